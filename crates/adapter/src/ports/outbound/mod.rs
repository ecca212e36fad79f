//! Outbound ports - interfaces the adapter drives.

mod options_registry_port;
mod scaffold_port;
mod transport_port;

pub use options_registry_port::OptionsRegistryPort;
pub use scaffold_port::{
    Connector, ConnectorInfo, ConnectorType, ScaffoldConfig, ScaffoldInit, ScaffoldPort,
};
pub use transport_port::{
    DisplayUriHandler, SessionEvent, SessionEventHandler, SubscriptionHandle, TransportPort,
};

#[cfg(any(test, feature = "testing"))]
pub use options_registry_port::MockOptionsRegistryPort;
#[cfg(any(test, feature = "testing"))]
pub use scaffold_port::MockScaffoldPort;
#[cfg(any(test, feature = "testing"))]
pub use transport_port::MockTransportPort;
