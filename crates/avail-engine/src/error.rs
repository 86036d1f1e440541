//! Error types for avail-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailError {
    #[error("Invalid holiday date: {0}")]
    InvalidHoliday(String),
}

pub type Result<T> = std::result::Result<T, AvailError>;
