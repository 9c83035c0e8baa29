mod int;
mod float;
mod ff;

pub use ff::*;
