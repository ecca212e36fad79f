//! Session snapshot model.
//!
//! A [`Session`] is owned and mutated entirely by the wallet transport; the
//! adapter only ever reads a snapshot at the moment of synchronization.
//! Namespaces are kept as an ordered list because "the first namespace" is
//! positional in every consumer - a keyed map would lose that ordering.

use serde::{Deserialize, Serialize};

use crate::caip::CaipAddress;

/// Metadata describing an application (the embedder or a session peer).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub icons: Vec<String>,
}

/// One granted namespace inside a live session.
///
/// The adapter reads only `key` and `accounts`; `methods` and `events` are
/// carried for completeness of the session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionNamespace {
    /// Chain-family identifier, e.g. `eip155`
    pub key: String,
    /// Granted accounts as composite `<namespace>:<chainRef>:<address>` ids
    pub accounts: Vec<CaipAddress>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

impl SessionNamespace {
    pub fn new(key: impl Into<String>, accounts: Vec<CaipAddress>) -> Self {
        Self {
            key: key.into(),
            accounts,
            methods: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Live record of an established wallet connection.
///
/// Invariant (wallet-side): a session has at least one namespace with at
/// least one account. The adapter does not enforce this - a violation
/// degrades into partially-populated scaffold state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Pairing topic assigned by the transport
    pub topic: String,
    /// Granted namespaces, in the order the wallet returned them
    pub namespaces: Vec<SessionNamespace>,
    /// Unix expiry timestamp, when the transport reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
    /// Metadata of the wallet peer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_metadata: Option<AppMetadata>,
}

impl Session {
    pub fn new(topic: impl Into<String>, namespaces: Vec<SessionNamespace>) -> Self {
        Self {
            topic: topic.into(),
            namespaces,
            expiry: None,
            peer_metadata: None,
        }
    }

    /// First granted namespace, positional
    pub fn first_namespace(&self) -> Option<&SessionNamespace> {
        self.namespaces.first()
    }

    /// Granted namespace with the given key
    pub fn namespace(&self, key: &str) -> Option<&SessionNamespace> {
        self.namespaces.iter().find(|ns| ns.key == key)
    }
}
