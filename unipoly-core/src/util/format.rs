use std::fmt::Display;

// Wraps `s` in parentheses if it is a compound expression, 
// i.e. it has a `+` or `-` other than a leading sign.
pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    let body = s.strip_prefix('-').unwrap_or(s.as_str());
    if body.contains(['+', '-', ' ']) { 
        format!("({s})")
    } else { 
        s
    }
}

pub fn subscript(i: i32) -> String {
    script(i, '\u{208B}', |d| 
        char::from_u32(('\u{2080}' as u32) + d)
    )
}

fn script<F>(i: i32, minus: char, digit: F) -> String
where F: Fn(u32) -> Option<char> { 
    let sign = if i < 0 { Some(minus) } else { None };
    let digits = i.unsigned_abs().to_string();

    sign.into_iter().chain(
        digits.chars().filter_map(|c| c.to_digit(10).and_then(&digit))
    ).collect()
}
