use std::fmt::Display;

use super::Weight;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    EmptyAlphabet,
    Domain(DomainError),
}

/// Input that is structurally present but outside the values the coder
/// accepts. Symbols are kept in their `Debug` rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidWeight { symbol: String, weight: Weight },
    DuplicateSymbol { symbol: String },
    MissingCode { symbol: String },
    InvalidSentinelPattern(u64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "Cannot build a code for an empty alphabet"),
            Self::Domain(error) => write!(f, "{}", error),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWeight { symbol, weight } => {
                write!(
                    f,
                    "Weight {} of symbol {} is not a finite, non-negative number",
                    weight, symbol
                )
            }
            Self::DuplicateSymbol { symbol } => {
                write!(f, "Symbol {} occurs more than once in the input", symbol)
            }
            Self::MissingCode { symbol } => {
                write!(f, "No code present for symbol {}", symbol)
            }
            Self::InvalidSentinelPattern(pattern) => {
                write!(
                    f,
                    "Pattern {:#b} carries no sentinel bit in front of a code",
                    pattern
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyAlphabet => None,
            Self::Domain(error) => Some(error),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<DomainError> for Error {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
