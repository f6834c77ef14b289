use std::fmt::Display;

use crate::huffman;

#[derive(Debug)]
pub enum Error {
    Coding(huffman::Error),
    InvalidSymbolCount(usize),
    InvalidThreadCount(usize),
    ExperimentRunLost(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coding(error) => write!(f, "Huffman coding failed: {}", error),
            Self::InvalidSymbolCount(count) => {
                write!(f, "At least one symbol is required, but got {}", count)
            }
            Self::InvalidThreadCount(count) => {
                write!(f, "At least one thread is required, but got {}", count)
            }
            Self::ExperimentRunLost(run) => {
                write!(f, "Experiment run {} ended without a result", run)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Coding(error) => Some(error),
            _ => None,
        }
    }
}

impl From<huffman::Error> for Error {
    fn from(value: huffman::Error) -> Self {
        Self::Coding(value)
    }
}
