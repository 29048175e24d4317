use std::io;

use thiserror::Error;

/// Errors surfaced while writing the fixture output
#[derive(Error, Debug)]
pub enum SqlError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
