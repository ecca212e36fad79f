//! Simple test fixtures used across unit and integration tests.

use wcmodal_domain::{NamespaceConfig, RequestedNamespaces, Session, SessionNamespace};

/// An EVM-only namespace request: mainnet and polygon under `eip155`.
pub fn eip155_namespaces() -> RequestedNamespaces {
    RequestedNamespaces::new(vec![NamespaceConfig::new(
        "eip155",
        vec!["eip155:1".into(), "eip155:137".into()],
    )])
}

/// A session with one mainnet account granted under `eip155`.
pub fn mainnet_session() -> Session {
    Session::new(
        "topic-1",
        vec![SessionNamespace::new(
            "eip155",
            vec!["eip155:1:0xabc".into()],
        )],
    )
}
