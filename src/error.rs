use std::{error::Error, fmt};

/// The generator crate's result type.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Failures of the generator core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A raw value outside of {0, 1} was offered as a bit.
    InvalidBit(u8),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidBit(raw) => write!(f, "invalid bit value: {raw}"),
        }
    }
}

impl Error for GeneratorError {}
