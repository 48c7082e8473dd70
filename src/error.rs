//! Domain errors
//!
//! Application-level failures (I/O, terminal setup) travel as `anyhow::Error`.
//! These are the validation errors a caller may want to match on.

use thiserror::Error;

/// Problems found while validating a ride catalog or carousel settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate ride id '{0}'")]
    DuplicateRideId(String),

    #[error("duplicate category id '{0}'")]
    DuplicateCategoryId(String),

    #[error("category id must not be empty")]
    EmptyCategoryId,

    #[error("category id 'all' is reserved for the all-categories filter")]
    ReservedCategoryId,

    #[error("page window must be at least 1")]
    ZeroPageWindow,

    #[error("page window {0} is larger than the maximum of {1}")]
    PageWindowTooLarge(usize, usize),

    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
}
