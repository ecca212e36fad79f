//! Recording doubles for the scaffold and options registry ports.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wcmodal_domain::{CaipAddress, CaipNetwork};

use crate::ports::outbound::{
    Connector, OptionsRegistryPort, ScaffoldInit, ScaffoldPort,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One recorded scaffold invocation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldCall {
    Initialized,
    SetConnectors(Vec<Connector>),
    SetIsConnected(bool),
    SetCaipAddress(Option<CaipAddress>),
    SetCaipNetwork(Option<CaipNetwork>),
    ResetAccount,
    ResetWcConnection,
    ResetNetwork,
    RefetchWallets,
}

/// Scaffold double that records every call in order and keeps the last
/// initialization payload so tests can drive the controller bundles.
#[derive(Default)]
pub struct RecordingScaffold {
    calls: Mutex<Vec<ScaffoldCall>>,
    init: Mutex<Option<ScaffoldInit>>,
}

impl RecordingScaffold {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<ScaffoldCall> {
        lock(&self.calls).clone()
    }

    /// Number of recorded calls matching the predicate.
    pub fn count(&self, predicate: impl Fn(&ScaffoldCall) -> bool) -> usize {
        lock(&self.calls).iter().filter(|c| predicate(c)).count()
    }

    /// The initialization payload, when `initialize` has been called.
    pub fn init(&self) -> Option<ScaffoldInit> {
        lock(&self.init).clone()
    }

    /// Connectors from the most recent `set_connectors` call.
    pub fn connectors(&self) -> Vec<Connector> {
        lock(&self.calls)
            .iter()
            .rev()
            .find_map(|c| match c {
                ScaffoldCall::SetConnectors(connectors) => Some(connectors.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Every network view pushed, in order.
    pub fn networks_pushed(&self) -> Vec<Option<CaipNetwork>> {
        lock(&self.calls)
            .iter()
            .filter_map(|c| match c {
                ScaffoldCall::SetCaipNetwork(network) => Some(network.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every address pushed, in order.
    pub fn addresses_pushed(&self) -> Vec<Option<CaipAddress>> {
        lock(&self.calls)
            .iter()
            .filter_map(|c| match c {
                ScaffoldCall::SetCaipAddress(address) => Some(address.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ScaffoldCall) {
        lock(&self.calls).push(call);
    }
}

impl ScaffoldPort for RecordingScaffold {
    fn initialize(&self, init: ScaffoldInit) {
        *lock(&self.init) = Some(init);
        self.record(ScaffoldCall::Initialized);
    }

    fn set_connectors(&self, connectors: Vec<Connector>) {
        self.record(ScaffoldCall::SetConnectors(connectors));
    }

    fn set_is_connected(&self, connected: bool) {
        self.record(ScaffoldCall::SetIsConnected(connected));
    }

    fn set_caip_address(&self, address: Option<CaipAddress>) {
        self.record(ScaffoldCall::SetCaipAddress(address));
    }

    fn set_caip_network(&self, network: Option<CaipNetwork>) {
        self.record(ScaffoldCall::SetCaipNetwork(network));
    }

    fn reset_account(&self) {
        self.record(ScaffoldCall::ResetAccount);
    }

    fn reset_wc_connection(&self) {
        self.record(ScaffoldCall::ResetWcConnection);
    }

    fn reset_network(&self) {
        self.record(ScaffoldCall::ResetNetwork);
    }

    fn refetch_wallets(&self) {
        self.record(ScaffoldCall::RefetchWallets);
    }
}

/// Registry double that records announced project ids.
#[derive(Default)]
pub struct RecordingRegistry {
    project_ids: Mutex<Vec<String>>,
}

impl RecordingRegistry {
    pub fn project_ids(&self) -> Vec<String> {
        lock(&self.project_ids).clone()
    }
}

impl OptionsRegistryPort for RecordingRegistry {
    fn set_project_id(&self, project_id: &str) {
        lock(&self.project_ids).push(project_id.to_string());
    }
}
