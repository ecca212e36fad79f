//! Adapter error types.
//!
//! Construction failures are the only typed errors the adapter raises
//! itself; runtime transport failures pass through as `anyhow::Error`.

use thiserror::Error;

/// Fatal construction-time failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// No transport handle was supplied
    #[error("modal constructor: transport handle is undefined")]
    TransportUndefined,

    /// No project identifier was supplied
    #[error("modal constructor: projectId is undefined")]
    ProjectIdUndefined,

    /// The requested namespace configuration contained no entries
    #[error("modal constructor: requested namespaces are empty")]
    EmptyNamespaces,
}
