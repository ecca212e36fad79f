//! Core domain types for the wallet modal adapter.
//!
//! This crate holds the chain-agnostic value objects shared by the adapter
//! and its collaborators: CAIP-style identifiers, the session snapshot model
//! owned by the wallet transport, and the namespace configuration supplied
//! by the embedding application. No I/O and no async - pure data.

pub mod caip;
pub mod error;
pub mod namespaces;
pub mod session;

pub use caip::{CaipAddress, CaipNetwork, CaipNetworkId, ChainFamily};
pub use error::DomainError;
pub use namespaces::{NamespaceConfig, RequestedNamespaces};
pub use session::{AppMetadata, Session, SessionNamespace};
