use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PolyError { 
    #[display("division by zero polynomial")]
    DivisionByZero,
}

impl std::error::Error for PolyError {}

pub type Result<T> = std::result::Result<T, PolyError>;
