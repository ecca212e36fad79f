//! Controller clients - the operation bundles injected into the scaffold.
//!
//! The scaffold calls back into these when the user switches networks or
//! initiates a connect/disconnect from the UI. The adapter implements both
//! traits; the scaffold receives them at initialization and never sees the
//! adapter type itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wcmodal_domain::{CaipNetwork, CaipNetworkId};

use crate::ports::outbound::DisplayUriHandler;

/// Result of an approved-networks query.
///
/// `approved_caip_network_ids` is `None` (not an error) when no session or
/// no matching namespace exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedNetworks {
    pub supports_all_networks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_caip_network_ids: Option<Vec<CaipNetworkId>>,
}

/// Network operations bundle.
#[async_trait]
pub trait NetworkControllerClient: Send + Sync {
    /// Switch the transport's default chain to the target network.
    /// No-op when the target is absent. Fire-and-forget: does not wait
    /// for wallet confirmation.
    async fn switch_caip_network(&self, network: Option<CaipNetwork>) -> anyhow::Result<()>;

    /// Chains approved under the requested scope of the live session.
    /// Synchronous read; must not fail when no session exists.
    fn approved_caip_networks(&self) -> ApprovedNetworks;
}

/// Connection operations bundle.
#[async_trait]
pub trait ConnectionControllerClient: Send + Sync {
    /// Establish a session. `on_uri` receives the display URI the scaffold
    /// renders as a QR code; the listener is installed before the connect
    /// call begins and removed once connect resolves.
    async fn connect(&self, on_uri: DisplayUriHandler) -> anyhow::Result<()>;

    /// Tear down the session and re-sync account state.
    async fn disconnect(&self) -> anyhow::Result<()>;
}
