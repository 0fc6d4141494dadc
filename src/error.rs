//! Error types for this library

/// All possible errors returned by `pairmap` maps
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("Value already bound to another key")]
    DuplicateValue,
}

/// Result type for `pairmap`
pub type Result<T> = std::result::Result<T, Error>;
