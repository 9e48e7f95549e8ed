//! Crate-wide error type.

use thiserror::Error;

use crate::arena::ArenaError;
use crate::bee::BankError;
use crate::dictionary::DictionaryError;
use crate::grid::GridError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Arena(#[from] ArenaError),
    #[error("invalid puzzle: {0}")]
    Grid(#[from] GridError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("failed to read puzzle {path}: {source}")]
    Puzzle {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
