//! Catalog error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}
