//! Error types for the CGN site

use thiserror::Error;

/// Main error type for site setup operations.
///
/// The gallery state machine itself never fails; these errors come from
/// building a catalog, loading configuration and installing logging.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Two categories share the same id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// The paginated category named by the policy is not in the catalog
    #[error("Paginated category not in catalog: {0}")]
    UnknownPaginatedCategory(String),

    /// Page size must be at least one image
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
