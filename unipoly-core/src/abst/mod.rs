mod ops;
mod monoid;
mod ring;

pub use ops::*;
pub use monoid::*;
pub use ring::*;
