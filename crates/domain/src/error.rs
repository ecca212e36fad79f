//! Unified error type for the domain layer.
//!
//! Strict parsers return these; the adapter's lenient accessors never do.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Account identifier did not match `<namespace>:<chainRef>:<address>`
    #[error("Invalid account identifier: {0}")]
    InvalidAccountId(String),

    /// Network identifier did not match `<namespace>:<chainRef>`
    #[error("Invalid network identifier: {0}")]
    InvalidNetworkId(String),

    /// Namespace configuration contained no entries
    #[error("Requested namespaces must not be empty")]
    EmptyNamespaces,
}

impl DomainError {
    /// Create an invalid account identifier error
    pub fn invalid_account_id(raw: impl Into<String>) -> Self {
        Self::InvalidAccountId(raw.into())
    }

    /// Create an invalid network identifier error
    pub fn invalid_network_id(raw: impl Into<String>) -> Self {
        Self::InvalidNetworkId(raw.into())
    }
}
