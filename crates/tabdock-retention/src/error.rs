//! Retention error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetentionError {
    #[error("Invalid retention policy: {0}")]
    InvalidPolicy(String),
}
