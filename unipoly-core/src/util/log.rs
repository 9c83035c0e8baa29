use log::LevelFilter;

pub const LOG_ENV_VAR: &str = "UNIPOLY_LOG";

pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> { 
    use simplelog::*;

    let mut cb = simplelog::ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto
    )
}

// 0: off, 1: info, 2: debug, 3+: trace.
pub fn level_from_verbosity(v: u8) -> LevelFilter { 
    use LevelFilter::*;
    match v {
        0 => Off,
        1 => Info,
        2 => Debug,
        _ => Trace,
    }
}

// Reads the verbosity from `UNIPOLY_LOG`. Unset or unparsable means off.
pub fn level_from_env() -> LevelFilter { 
    let v = std::env::var(LOG_ENV_VAR).ok()
        .and_then(|s| s.trim().parse::<u8>().ok())
        .unwrap_or(0);
    level_from_verbosity(v)
}

pub fn init_logger_from_env() -> Result<(), log::SetLoggerError> { 
    init_simple_logger(level_from_env())
}
