//! Static preset tables for connector metadata and network images.

use wcmodal_domain::ChainFamily;

use crate::ports::outbound::{Connector, ConnectorInfo, ConnectorType};

/// Fixed identifier of the synthetic connector registered at construction.
pub const WALLET_CONNECT_CONNECTOR_ID: &str = "walletConnect";

/// SDK-version string reported to the scaffold.
pub const SDK_VERSION: &str = concat!("universal-adapter-", env!("CARGO_PKG_VERSION"));

/// Explorer id for a known connector.
pub fn connector_explorer_id(connector_id: &str) -> Option<&'static str> {
    match connector_id {
        WALLET_CONNECT_CONNECTOR_ID => {
            Some("c57ca95b47569778a828d19178114f4db188b89b763c899ba0be274e97267d96")
        }
        _ => None,
    }
}

/// Display name for a known connector.
pub fn connector_name(connector_id: &str) -> Option<&'static str> {
    match connector_id {
        WALLET_CONNECT_CONNECTOR_ID => Some("WalletConnect"),
        _ => None,
    }
}

/// Image id for a known connector.
pub fn connector_image_id(connector_id: &str) -> Option<&'static str> {
    match connector_id {
        WALLET_CONNECT_CONNECTOR_ID => Some("07ba87ed-43aa-4adf-4540-9e6a2b9cae00"),
        _ => None,
    }
}

/// Connector type for a known connector.
pub fn connector_type(connector_id: &str) -> Option<ConnectorType> {
    match connector_id {
        WALLET_CONNECT_CONNECTOR_ID => Some(ConnectorType::WalletConnect),
        _ => None,
    }
}

/// The one synthetic connector descriptor this adapter registers.
pub fn wallet_connect_connector() -> Connector {
    let id = WALLET_CONNECT_CONNECTOR_ID;
    Connector {
        id: id.to_string(),
        explorer_id: connector_explorer_id(id).map(String::from),
        name: connector_name(id).map(String::from),
        image_id: connector_image_id(id).map(String::from),
        connector_type: connector_type(id),
        info: Some(ConnectorInfo {
            rdns: Some(id.to_string()),
        }),
        chain: ChainFamily::Evm,
    }
}

/// Network image id for a bare EVM chain reference (e.g. `"1"`, `"137"`).
///
/// Keyed by the chain reference alone, not the full `eip155:<ref>` id.
pub fn eip155_network_image_id(chain_reference: &str) -> Option<&'static str> {
    match chain_reference {
        // Ethereum
        "1" => Some("692ed6ba-e569-459a-556a-776476829e00"),
        // Arbitrum
        "42161" => Some("3bff954d-5cb0-47a0-9a23-d20192e74600"),
        // Avalanche
        "43114" => Some("30c46e53-e989-45fb-4549-be3bd4eb3b00"),
        // Binance Smart Chain
        "56" => Some("93564157-2e8e-4ce7-81df-b264dbee9b00"),
        // Fantom
        "250" => Some("06b26297-fe0c-4733-5d6b-ffa5498aac00"),
        // Optimism
        "10" => Some("ab9c186a-c52f-464b-2906-ca59d760a400"),
        // Polygon
        "137" => Some("41d04d42-da3b-4453-8506-668cc0727900"),
        // Gnosis
        "100" => Some("02b53f6a-e3d4-479e-1cb4-21178987d100"),
        // Evmos
        "9001" => Some("f926ff41-260d-4028-635e-91913fc28e00"),
        // zkSync
        "324" => Some("b310f07f-4ef7-49f3-7073-2a0a39685800"),
        // Filecoin
        "314" => Some("90f6cca5-5ab4-4808-ebe0-6e4a7d0d5b00"),
        // IoTeX
        "4689" => Some("34e68754-e536-40da-c153-6ef2e7188a00"),
        // Metis
        "1088" => Some("3897a66d-40b9-4833-162f-a2c90531c900"),
        // Moonbeam
        "1284" => Some("161038da-44ae-4ec7-1208-0ea569454b00"),
        // Moonriver
        "1285" => Some("f1d73bb6-5450-4e18-38f7-fb6484264a00"),
        // Zora
        "7777777" => Some("845c60df-d429-4991-e687-91ae45791600"),
        // Celo
        "42220" => Some("ab781bbc-ccc6-418d-d32d-789b15da1f00"),
        // Base
        "8453" => Some("7289c336-3981-4081-c5f4-efc26ac64a00"),
        // Aurora
        "1313161554" => Some("3ff73439-a619-4894-9262-4470c773a100"),
        _ => None,
    }
}
