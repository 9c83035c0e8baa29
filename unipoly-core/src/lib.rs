mod abst;
mod types;

pub use abst::*;
pub use types::*;

pub mod util;

cfg_if::cfg_if! { 
    if #[cfg(feature = "tex")] {
        mod tex;
        pub use tex::*;
    }
}
