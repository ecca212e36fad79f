//! Namespace configuration supplied by the embedding application.
//!
//! [`RequestedNamespaces`] is copied verbatim into the adapter at
//! construction and immutable afterwards. Ordering is significant: the
//! first entry's key is the "requested scope" used for the pre-connection
//! network sync and for approved-network queries.

use serde::{Deserialize, Serialize};

use crate::caip::CaipNetworkId;
use crate::error::DomainError;

/// Chains (and optional methods/events) requested under one namespace key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Chain-family identifier, e.g. `eip155`
    pub key: String,
    /// Ordered chain identifiers the adapter is allowed to request
    pub chains: Vec<CaipNetworkId>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

impl NamespaceConfig {
    pub fn new(key: impl Into<String>, chains: Vec<CaipNetworkId>) -> Self {
        Self {
            key: key.into(),
            chains,
            methods: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_events(mut self, events: Vec<String>) -> Self {
        self.events = events;
        self
    }
}

/// Ordered, immutable set of requested namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestedNamespaces {
    entries: Vec<NamespaceConfig>,
}

impl RequestedNamespaces {
    pub fn new(entries: Vec<NamespaceConfig>) -> Self {
        Self { entries }
    }

    /// Validated constructor: rejects an empty configuration
    pub fn try_new(entries: Vec<NamespaceConfig>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::EmptyNamespaces);
        }
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First configured namespace, positional (defines the requested scope)
    pub fn first(&self) -> Option<&NamespaceConfig> {
        self.entries.first()
    }

    /// Configured namespace with the given key
    pub fn get(&self, key: &str) -> Option<&NamespaceConfig> {
        self.entries.iter().find(|ns| ns.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamespaceConfig> {
        self.entries.iter()
    }
}

impl From<Vec<NamespaceConfig>> for RequestedNamespaces {
    fn from(entries: Vec<NamespaceConfig>) -> Self {
        Self::new(entries)
    }
}
