//! CAIP-style identifiers and the network view pushed into the scaffold.
//!
//! Account identifiers follow the `<namespace>:<chainRef>:<address>`
//! convention. Two access styles are provided: lenient `Option`-returning
//! accessors used by the adapter (malformed upstream data degrades into
//! absent fields, never a panic or error), and a strict `parse()` for
//! callers that want validation up front.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Chain family a connector or network belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Evm,
    Solana,
}

impl ChainFamily {
    /// Stable string form used in scaffold configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainFamily::Evm => "evm",
            ChainFamily::Solana => "solana",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier for a network as understood by the scaffold.
///
/// Usually `<namespace>:<chainRef>` (e.g. `eip155:1`), but the type is
/// deliberately permissive: the connected-account view uses a concatenated
/// `<namespace><chainRef>` form with no separator, and no validation is
/// applied on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaipNetworkId(String);

impl CaipNetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build `<namespace>:<reference>` from its two parts
    pub fn from_parts(namespace: &str, reference: &str) -> Self {
        Self(format!("{namespace}:{reference}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaipNetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CaipNetworkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CaipNetworkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Composite account identifier `<namespace>:<chainRef>:<address>`.
///
/// Stored verbatim. The session owner (wallet transport) produces these;
/// the adapter pushes them into the scaffold unchanged and only ever reads
/// individual segments through the lenient accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaipAddress(String);

impl CaipAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `:`-segment (chain family), if present and non-empty
    pub fn namespace(&self) -> Option<&str> {
        self.0.split(':').next().filter(|s| !s.is_empty())
    }

    /// Second `:`-segment (chain reference), if present and non-empty
    pub fn chain_reference(&self) -> Option<&str> {
        self.0.split(':').nth(1).filter(|s| !s.is_empty())
    }

    /// Third `:`-segment (bare address), if present and non-empty
    pub fn address(&self) -> Option<&str> {
        self.0.split(':').nth(2).filter(|s| !s.is_empty())
    }

    /// `<namespace>:<chainRef>` network id for this account, if derivable
    pub fn caip_network_id(&self) -> Option<CaipNetworkId> {
        match (self.namespace(), self.chain_reference()) {
            (Some(ns), Some(reference)) => Some(CaipNetworkId::from_parts(ns, reference)),
            _ => None,
        }
    }

    /// Strict validation: all three segments present and non-empty.
    ///
    /// Returns `(namespace, chain_reference, address)` on success.
    pub fn parse(&self) -> Result<(&str, &str, &str), DomainError> {
        let mut segments = self.0.splitn(3, ':');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(ns), Some(reference), Some(address))
                if !ns.is_empty() && !reference.is_empty() && !address.is_empty() =>
            {
                Ok((ns, reference, address))
            }
            _ => Err(DomainError::invalid_account_id(&self.0)),
        }
    }
}

impl fmt::Display for CaipAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CaipAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CaipAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Network view pushed into the scaffold.
///
/// Derived and transient: recomputed on every sync, never cached by the
/// adapter. Image fields stay `None` when no preset or caller-supplied
/// image exists for the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaipNetwork {
    pub id: CaipNetworkId,
    pub name: String,
    pub image_id: Option<String>,
    pub image_url: Option<String>,
    pub chain: ChainFamily,
}
