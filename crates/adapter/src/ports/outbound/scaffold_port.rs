//! Scaffold Port - state-update surface of the modal scaffold.
//!
//! The scaffold owns the UI state store; the adapter only pushes values
//! into it through these setters and hands it the two controller-client
//! bundles at initialization. Rendering and the state store itself are
//! out of scope.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wcmodal_domain::{AppMetadata, CaipAddress, CaipNetwork, ChainFamily};

use crate::ports::inbound::{ConnectionControllerClient, NetworkControllerClient};

/// Connector category as displayed by the scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorType {
    WalletConnect,
    Injected,
    Announced,
    External,
}

/// Reverse-DNS style info attached to a connector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdns: Option<String>,
}

/// Descriptor for one wallet connector registered with the scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<ConnectorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ConnectorInfo>,
    pub chain: ChainFamily,
}

/// Static configuration passed to the scaffold at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    pub project_id: String,
    pub featured_wallet_ids: Vec<String>,
    pub allow_unsupported_chain: bool,
    pub chain: ChainFamily,
    pub is_universal_provider: bool,
    pub enable_onramp: bool,
    pub sdk_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AppMetadata>,
}

/// Everything the scaffold's base initializer receives from the adapter.
#[derive(Clone)]
pub struct ScaffoldInit {
    pub network_controller: Arc<dyn NetworkControllerClient>,
    pub connection_controller: Arc<dyn ConnectionControllerClient>,
    pub config: ScaffoldConfig,
}

impl std::fmt::Debug for ScaffoldInit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaffoldInit")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Port for the modal scaffold's state-update surface.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ScaffoldPort: Send + Sync {
    /// Invoke the scaffold's base initializer with bundles and config
    fn initialize(&self, init: ScaffoldInit);

    /// Replace the registered connector descriptors
    fn set_connectors(&self, connectors: Vec<Connector>);

    /// Mark the account connected or disconnected
    fn set_is_connected(&self, connected: bool);

    /// Push the currently connected composite account identifier
    fn set_caip_address(&self, address: Option<CaipAddress>);

    /// Push the currently selected network view
    fn set_caip_network(&self, network: Option<CaipNetwork>);

    /// Clear all account state
    fn reset_account(&self);

    /// Clear the wallet-connection state (pairing, URI)
    fn reset_wc_connection(&self);

    /// Clear the selected-network state
    fn reset_network(&self);

    /// Refresh the wallet list from the scaffold's backing service
    fn refetch_wallets(&self);
}
