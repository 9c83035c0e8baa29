mod error;
mod poly;
mod scalar;
mod euclid;

pub use error::*;
pub use poly::*;

pub use unipoly_core::*;

cfg_if::cfg_if! { 
    if #[cfg(feature = "tex")] {
        mod tex;
    }
}
