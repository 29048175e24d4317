use std::io;

use thiserror::Error;

use crate::domain::DomainError;
use crate::generator::GeneratorError;
use crate::sql::SqlError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("SQL output error: {0}")]
    Sql(#[from] SqlError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
