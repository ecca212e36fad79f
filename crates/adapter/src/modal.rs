//! The wallet modal adapter.
//!
//! Wires the modal scaffold to the universal wallet transport: transport
//! session/account/network events become scaffold state updates, and
//! scaffold-initiated actions (connect, disconnect, switch network) become
//! transport calls. The adapter owns nothing but two scalars (the
//! requested scope and a sticky has-synced flag); sessions stay with the
//! transport and views are recomputed on every sync.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use wcmodal_domain::{CaipNetwork, CaipNetworkId, ChainFamily, RequestedNamespaces};

use crate::error::ModalError;
use crate::options::ModalOptions;
use crate::ports::inbound::{
    ApprovedNetworks, ConnectionControllerClient, NetworkControllerClient,
};
use crate::ports::outbound::{
    DisplayUriHandler, ScaffoldConfig, ScaffoldInit, ScaffoldPort, SessionEvent,
    SessionEventHandler, SubscriptionHandle, TransportPort,
};
use crate::presets;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Adapter between the modal scaffold and the universal wallet transport.
pub struct WalletConnectModal {
    inner: Arc<ModalInner>,
}

struct ModalInner {
    scaffold: Arc<dyn ScaffoldPort>,
    transport: Arc<dyn TransportPort>,
    requested_namespaces: RequestedNamespaces,
    /// First key of the requested namespaces; selection is positional
    requested_scope: String,
    chain_images: HashMap<String, String>,
    /// True once a non-empty session has been observed. One-way: never
    /// cleared, so a reconnect does not need to re-arm the reset guard.
    has_synced_connected_account: AtomicBool,
    session_subscriptions: Mutex<Vec<SubscriptionHandle>>,
}

impl WalletConnectModal {
    /// Construct the adapter and perform the initial account and network
    /// synchronization.
    ///
    /// Fails when the transport handle or project id is absent, or when
    /// the namespace configuration is empty.
    pub fn new(options: ModalOptions) -> Result<Self, ModalError> {
        let ModalOptions {
            transport,
            project_id,
            namespaces,
            chain_images,
            enable_onramp,
            metadata,
            scaffold,
            registry,
        } = options;

        let transport = transport.ok_or(ModalError::TransportUndefined)?;
        let project_id = project_id.ok_or(ModalError::ProjectIdUndefined)?;
        let requested_scope = namespaces
            .first()
            .map(|ns| ns.key.clone())
            .ok_or(ModalError::EmptyNamespaces)?;

        registry.set_project_id(&project_id);

        let inner = Arc::new(ModalInner {
            scaffold,
            transport,
            requested_namespaces: namespaces,
            requested_scope,
            chain_images,
            has_synced_connected_account: AtomicBool::new(false),
            session_subscriptions: Mutex::new(Vec::new()),
        });

        let network_controller: Arc<dyn NetworkControllerClient> = Arc::new(NetworkController {
            inner: Arc::clone(&inner),
        });
        let connection_controller: Arc<dyn ConnectionControllerClient> =
            Arc::new(ConnectionController {
                inner: Arc::clone(&inner),
            });

        inner.scaffold.initialize(ScaffoldInit {
            network_controller,
            connection_controller,
            config: ScaffoldConfig {
                project_id,
                featured_wallet_ids: Vec::new(),
                allow_unsupported_chain: true,
                chain: ChainFamily::Evm,
                is_universal_provider: true,
                enable_onramp: enable_onramp.unwrap_or(false),
                sdk_version: presets::SDK_VERSION.to_string(),
                metadata,
            },
        });

        inner
            .scaffold
            .set_connectors(vec![presets::wallet_connect_connector()]);

        inner.sync_account();
        inner.sync_network();

        let on_session_event: SessionEventHandler = {
            let inner = Arc::clone(&inner);
            Arc::new(move |_event| inner.sync_account())
        };
        let mut subscriptions = lock(&inner.session_subscriptions);
        subscriptions.push(
            inner
                .transport
                .on_session_event(SessionEvent::Updated, Arc::clone(&on_session_event)),
        );
        subscriptions.push(
            inner
                .transport
                .on_session_event(SessionEvent::Deleted, on_session_event),
        );
        drop(subscriptions);

        Ok(Self { inner })
    }

    /// Tear down the current session and re-sync account state.
    ///
    /// Idempotent when no session exists: the re-sync degrades to a pure
    /// reset.
    pub async fn disconnect(&self) -> anyhow::Result<()> {
        tracing::debug!("disconnecting wallet transport");
        self.inner.transport.disconnect().await?;
        self.inner.sync_account();
        Ok(())
    }

    /// Unsubscribe the retained session-event listeners.
    pub fn teardown(&self) {
        let handles: Vec<SubscriptionHandle> =
            lock(&self.inner.session_subscriptions).drain(..).collect();
        for handle in handles {
            handle.unsubscribe();
        }
    }
}

impl ModalInner {
    /// Copy the current session snapshot into the scaffold.
    ///
    /// Two-state machine: {never-connected, connected-at-least-once}. A
    /// missing session only clears scaffold state after the first
    /// non-empty session has been observed.
    fn sync_account(&self) {
        self.scaffold.reset_account();

        let Some(session) = self.transport.session() else {
            if self.has_synced_connected_account.load(Ordering::SeqCst) {
                tracing::debug!("session gone, clearing connection state");
                self.scaffold.reset_wc_connection();
                self.scaffold.reset_network();
            }
            return;
        };

        // The connected scope is the session's first namespace, which may
        // differ from the requested scope when the wallet grants
        // namespaces in another order. Both sides stay positional.
        let connected = session.first_namespace();
        let account = connected.and_then(|ns| ns.accounts.first());
        let chain_reference = account.and_then(|a| a.chain_reference());
        if account.is_none() || chain_reference.is_none() {
            tracing::warn!(
                topic = %session.topic,
                "session snapshot is missing namespace or account data"
            );
        }
        let scope = connected.map(|ns| ns.key.as_str()).unwrap_or_default();

        self.scaffold.set_is_connected(true);
        self.scaffold.set_caip_address(account.cloned());
        self.scaffold.set_caip_network(Some(CaipNetwork {
            id: CaipNetworkId::new(format!("{scope}{}", chain_reference.unwrap_or_default())),
            name: scope.to_string(),
            image_id: chain_reference
                .and_then(presets::eip155_network_image_id)
                .map(String::from),
            image_url: chain_reference
                .and_then(|reference| self.chain_images.get(reference))
                .cloned(),
            chain: ChainFamily::Evm,
        }));
        self.has_synced_connected_account.store(true, Ordering::SeqCst);
        tracing::debug!(scope, "synced connected account");
    }

    /// Paint the pre-connection network choice from the requested
    /// namespaces (not the live session) and refresh the wallet list.
    /// Runs once, at construction.
    fn sync_network(&self) {
        let chain_id = self
            .requested_namespaces
            .get(&self.requested_scope)
            .and_then(|ns| ns.chains.first())
            .cloned()
            .unwrap_or_else(|| CaipNetworkId::new(""));

        // Image lookups here are keyed by the full chain id, unlike the
        // bare chain reference used after connection.
        self.scaffold.set_caip_network(Some(CaipNetwork {
            id: chain_id.clone(),
            name: self.requested_scope.clone(),
            image_id: presets::eip155_network_image_id(chain_id.as_str()).map(String::from),
            image_url: self.chain_images.get(chain_id.as_str()).cloned(),
            chain: ChainFamily::Evm,
        }));
        self.scaffold.refetch_wallets();
    }
}

/// Network operations bundle handed to the scaffold.
struct NetworkController {
    inner: Arc<ModalInner>,
}

#[async_trait]
impl NetworkControllerClient for NetworkController {
    async fn switch_caip_network(&self, network: Option<CaipNetwork>) -> anyhow::Result<()> {
        if let Some(network) = network {
            self.inner.transport.set_default_chain(&network.id);
        }
        Ok(())
    }

    fn approved_caip_networks(&self) -> ApprovedNetworks {
        let scope = self.inner.requested_scope.as_str();
        let approved = self.inner.transport.session().and_then(|session| {
            session.namespace(scope).map(|ns| {
                ns.accounts
                    .iter()
                    .filter_map(|account| {
                        account
                            .chain_reference()
                            .map(|reference| CaipNetworkId::from_parts(scope, reference))
                    })
                    .collect()
            })
        });

        ApprovedNetworks {
            supports_all_networks: false,
            approved_caip_network_ids: approved,
        }
    }
}

/// Connection operations bundle handed to the scaffold.
struct ConnectionController {
    inner: Arc<ModalInner>,
}

#[async_trait]
impl ConnectionControllerClient for ConnectionController {
    async fn connect(&self, on_uri: DisplayUriHandler) -> anyhow::Result<()> {
        tracing::debug!("connecting wallet transport");
        // The listener must be installed before connect begins so the
        // display-URI emission cannot be missed. On failure it stays
        // registered and the error propagates untouched.
        let subscription = self.inner.transport.on_display_uri(on_uri);
        self.inner
            .transport
            .connect(&self.inner.requested_namespaces)
            .await?;
        subscription.unsubscribe();
        self.inner.sync_account();
        Ok(())
    }

    async fn disconnect(&self) -> anyhow::Result<()> {
        self.inner.transport.disconnect().await?;
        self.inner.sync_account();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{
        eip155_namespaces, mainnet_session, FakeTransport, RecordingRegistry, RecordingScaffold,
        ScaffoldCall,
    };
    use wcmodal_domain::{CaipAddress, NamespaceConfig, Session, SessionNamespace};

    fn options(
        scaffold: &Arc<RecordingScaffold>,
        transport: &Arc<FakeTransport>,
    ) -> ModalOptions {
        ModalOptions::new(
            Arc::clone(scaffold) as Arc<dyn ScaffoldPort>,
            Arc::new(RecordingRegistry::default()),
            eip155_namespaces(),
        )
        .with_transport(Arc::clone(transport) as Arc<dyn TransportPort>)
        .with_project_id("project-1")
    }

    #[test]
    fn construction_without_transport_fails() {
        let scaffold = RecordingScaffold::new();
        let result = WalletConnectModal::new(
            ModalOptions::new(
                Arc::clone(&scaffold) as Arc<dyn ScaffoldPort>,
                Arc::new(RecordingRegistry::default()),
                eip155_namespaces(),
            )
            .with_project_id("project-1"),
        );
        assert_eq!(result.err(), Some(ModalError::TransportUndefined));
        assert!(scaffold.calls().is_empty());
    }

    #[test]
    fn construction_without_project_id_fails() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let result = WalletConnectModal::new(
            ModalOptions::new(
                Arc::clone(&scaffold) as Arc<dyn ScaffoldPort>,
                Arc::new(RecordingRegistry::default()),
                eip155_namespaces(),
            )
            .with_transport(transport as Arc<dyn TransportPort>),
        );
        assert_eq!(result.err(), Some(ModalError::ProjectIdUndefined));
        assert!(scaffold.calls().is_empty());
    }

    #[test]
    fn construction_with_empty_namespaces_fails() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let result = WalletConnectModal::new(
            ModalOptions::new(
                Arc::clone(&scaffold) as Arc<dyn ScaffoldPort>,
                Arc::new(RecordingRegistry::default()),
                RequestedNamespaces::default(),
            )
            .with_transport(transport as Arc<dyn TransportPort>)
            .with_project_id("project-1"),
        );
        assert_eq!(result.err(), Some(ModalError::EmptyNamespaces));
    }

    #[test]
    fn construction_registers_exactly_one_walletconnect_connector() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let connectors = scaffold.connectors();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].id, "walletConnect");
        assert_eq!(
            connectors[0].connector_type,
            Some(crate::ports::outbound::ConnectorType::WalletConnect)
        );
    }

    #[test]
    fn construction_announces_project_id_to_registry() {
        let registry = Arc::new(RecordingRegistry::default());
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(
            ModalOptions::new(
                Arc::clone(&scaffold) as Arc<dyn ScaffoldPort>,
                Arc::clone(&registry) as Arc<dyn crate::ports::outbound::OptionsRegistryPort>,
                eip155_namespaces(),
            )
            .with_transport(transport as Arc<dyn TransportPort>)
            .with_project_id("project-1"),
        )
        .unwrap();

        assert_eq!(registry.project_ids(), vec!["project-1".to_string()]);
    }

    #[test]
    fn construction_announces_project_id_via_mock_registry() {
        use crate::ports::outbound::MockOptionsRegistryPort;
        use mockall::predicate;

        let mut registry = MockOptionsRegistryPort::new();
        registry
            .expect_set_project_id()
            .with(predicate::eq("project-1"))
            .times(1)
            .return_const(());

        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(
            ModalOptions::new(
                Arc::clone(&scaffold) as Arc<dyn ScaffoldPort>,
                Arc::new(registry),
                eip155_namespaces(),
            )
            .with_transport(transport as Arc<dyn TransportPort>)
            .with_project_id("project-1"),
        )
        .unwrap();
    }

    #[test]
    fn construction_paints_preconnection_network_and_refreshes_wallets() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        // No session yet, so the only pushed network is the requested one
        let networks = scaffold.networks_pushed();
        assert_eq!(networks.len(), 1);
        let network = networks[0].clone().unwrap();
        assert_eq!(network.id.as_str(), "eip155:1");
        assert_eq!(network.name, "eip155");
        // Full chain id misses the reference-keyed preset table
        assert_eq!(network.image_id, None);
        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::RefetchWallets)),
            1
        );
    }

    #[test]
    fn scaffold_config_carries_fixed_flags_and_sdk_version() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let config = scaffold.init().unwrap().config;
        assert_eq!(config.project_id, "project-1");
        assert!(config.featured_wallet_ids.is_empty());
        assert!(config.allow_unsupported_chain);
        assert!(config.is_universal_provider);
        assert!(!config.enable_onramp);
        assert_eq!(config.chain, ChainFamily::Evm);
        assert!(config.sdk_version.starts_with("universal-adapter-"));
    }

    #[test]
    fn enable_onramp_can_be_overridden_by_caller() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal =
            WalletConnectModal::new(options(&scaffold, &transport).with_enable_onramp(true))
                .unwrap();
        assert!(scaffold.init().unwrap().config.enable_onramp);
    }

    #[test]
    fn account_sync_pushes_connected_state_from_first_namespace() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.set_session(Some(mainnet_session()));
        let chain_images = HashMap::from([("1".to_string(), "https://img.example/1".to_string())]);
        let _modal = WalletConnectModal::new(
            options(&scaffold, &transport).with_chain_images(chain_images),
        )
        .unwrap();

        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::SetIsConnected(true))),
            1
        );
        assert_eq!(
            scaffold.addresses_pushed(),
            vec![Some(CaipAddress::from("eip155:1:0xabc"))]
        );
        // First pushed network is the connected view, second the
        // pre-connection network sync
        let networks = scaffold.networks_pushed();
        assert_eq!(networks.len(), 2);
        let connected = networks[0].clone().unwrap();
        assert_eq!(connected.id.as_str(), "eip1551");
        assert_eq!(connected.name, "eip155");
        assert_eq!(
            connected.image_id.as_deref(),
            presets::eip155_network_image_id("1")
        );
        assert_eq!(connected.image_url.as_deref(), Some("https://img.example/1"));
    }

    #[test]
    fn repeated_sync_with_unchanged_session_pushes_identical_values() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.set_session(Some(mainnet_session()));
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        transport.emit_session_event(SessionEvent::Updated);
        transport.emit_session_event(SessionEvent::Updated);

        let networks = scaffold.networks_pushed();
        // Construction pushed connected + requested; each update pushes
        // the connected view again
        assert_eq!(networks.len(), 4);
        assert_eq!(networks[2], networks[3]);
        let addresses = scaffold.addresses_pushed();
        assert_eq!(addresses.len(), 3);
        assert_eq!(addresses[1], addresses[2]);
    }

    #[test]
    fn session_loss_after_connection_resets_exactly_once_per_sync() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.set_session(Some(mainnet_session()));
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        transport.set_session(None);
        transport.emit_session_event(SessionEvent::Deleted);

        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::ResetWcConnection)),
            1
        );
        assert_eq!(scaffold.count(|c| matches!(c, ScaffoldCall::ResetNetwork)), 1);
    }

    #[test]
    fn session_loss_without_prior_connection_resets_nothing() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        transport.emit_session_event(SessionEvent::Deleted);

        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::ResetWcConnection)),
            0
        );
        assert_eq!(scaffold.count(|c| matches!(c, ScaffoldCall::ResetNetwork)), 0);
    }

    #[test]
    fn malformed_session_degrades_to_empty_fields() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        // Session with a namespace but no accounts violates the wallet
        // invariant; the adapter must degrade, not fail
        transport.set_session(Some(Session::new(
            "topic-x",
            vec![SessionNamespace::new("eip155", Vec::new())],
        )));
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::SetIsConnected(true))),
            1
        );
        assert_eq!(scaffold.addresses_pushed(), vec![None]);
        let connected = scaffold.networks_pushed()[0].clone().unwrap();
        assert_eq!(connected.id.as_str(), "eip155");
        assert_eq!(connected.image_id, None);
    }

    #[test]
    fn approved_networks_without_session_is_none_and_does_not_fail() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let approved = scaffold
            .init()
            .unwrap()
            .network_controller
            .approved_caip_networks();
        assert!(!approved.supports_all_networks);
        assert_eq!(approved.approved_caip_network_ids, None);
    }

    #[test]
    fn approved_networks_rewrites_accounts_under_the_requested_scope() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.set_session(Some(Session::new(
            "topic-1",
            vec![SessionNamespace::new(
                "eip155",
                vec![
                    CaipAddress::from("eip155:1:0xabc"),
                    CaipAddress::from("eip155:137:0xdef"),
                ],
            )],
        )));
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let approved = scaffold
            .init()
            .unwrap()
            .network_controller
            .approved_caip_networks();
        assert_eq!(
            approved.approved_caip_network_ids,
            Some(vec![
                CaipNetworkId::from("eip155:1"),
                CaipNetworkId::from("eip155:137"),
            ])
        );
    }

    #[test]
    fn approved_networks_ignores_namespaces_outside_the_requested_scope() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        // Wallet granted a different namespace than the one requested
        transport.set_session(Some(Session::new(
            "topic-1",
            vec![SessionNamespace::new(
                "solana",
                vec![CaipAddress::from("solana:mainnet:abc")],
            )],
        )));
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let approved = scaffold
            .init()
            .unwrap()
            .network_controller
            .approved_caip_networks();
        assert_eq!(approved.approved_caip_network_ids, None);
    }

    #[tokio::test]
    async fn switch_network_forwards_target_to_transport() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let controller = scaffold.init().unwrap().network_controller;
        controller
            .switch_caip_network(Some(CaipNetwork {
                id: CaipNetworkId::from("eip155:137"),
                name: "eip155".to_string(),
                image_id: None,
                image_url: None,
                chain: ChainFamily::Evm,
            }))
            .await
            .unwrap();
        controller.switch_caip_network(None).await.unwrap();

        assert_eq!(
            transport.default_chains(),
            vec![CaipNetworkId::from("eip155:137")]
        );
    }

    #[tokio::test]
    async fn connect_installs_uri_listener_before_connecting_and_removes_it_after() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.set_session_on_connect(mainnet_session());
        transport.emit_uri_on_connect("wc:pairing-uri");
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let on_uri: DisplayUriHandler = {
            let seen = Arc::clone(&seen);
            Arc::new(move |uri| lock(&seen).push(uri))
        };

        let controller = scaffold.init().unwrap().connection_controller;
        controller.connect(on_uri).await.unwrap();

        assert_eq!(transport.display_uri_listeners_at_connect(), Some(1));
        assert_eq!(transport.display_uri_listener_count(), 0);
        assert_eq!(transport.display_uri_unsubscribe_count(), 1);
        assert_eq!(*lock(&seen), vec!["wc:pairing-uri".to_string()]);
        // Connect resolved, so the account sync observed the new session
        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::SetIsConnected(true))),
            1
        );
    }

    #[tokio::test]
    async fn failed_connect_propagates_and_leaves_listener_registered() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.fail_next_connect("pairing rejected");
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let controller = scaffold.init().unwrap().connection_controller;
        let result = controller.connect(Arc::new(|_| {})).await;

        assert!(result.is_err());
        assert_eq!(transport.display_uri_listener_count(), 1);
        assert_eq!(transport.display_uri_unsubscribe_count(), 0);
        // No sync ran after the failure
        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::SetIsConnected(true))),
            0
        );
    }

    #[tokio::test]
    async fn connect_forwards_the_requested_namespaces() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let controller = scaffold.init().unwrap().connection_controller;
        controller.connect(Arc::new(|_| {})).await.unwrap();

        assert_eq!(transport.last_connect_namespaces(), Some(eip155_namespaces()));
    }

    #[tokio::test]
    async fn public_disconnect_tears_down_and_resyncs() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        transport.set_session(Some(mainnet_session()));
        let modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        modal.disconnect().await.unwrap();

        assert_eq!(transport.disconnect_calls(), 1);
        assert!(transport.session_snapshot().is_none());
        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::ResetWcConnection)),
            1
        );
        assert_eq!(scaffold.count(|c| matches!(c, ScaffoldCall::ResetNetwork)), 1);
    }

    #[tokio::test]
    async fn disconnect_without_session_is_idempotent() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        modal.disconnect().await.unwrap();
        modal.disconnect().await.unwrap();

        assert_eq!(transport.disconnect_calls(), 2);
        // Never connected, so the reset guard held both times
        assert_eq!(
            scaffold.count(|c| matches!(c, ScaffoldCall::ResetWcConnection)),
            0
        );
    }

    #[test]
    fn teardown_unsubscribes_both_session_event_listeners() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        assert_eq!(transport.session_listener_count(), 2);
        modal.teardown();
        assert_eq!(transport.session_listener_count(), 0);

        // Idempotent: nothing left to unsubscribe
        modal.teardown();
        assert_eq!(transport.session_listener_count(), 0);
    }

    #[test]
    fn connected_scope_follows_the_session_not_the_request() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        // Requested eip155, wallet granted solana first
        transport.set_session(Some(Session::new(
            "topic-1",
            vec![SessionNamespace::new(
                "solana",
                vec![CaipAddress::from("solana:mainnet:abc")],
            )],
        )));
        let _modal = WalletConnectModal::new(options(&scaffold, &transport)).unwrap();

        let connected = scaffold.networks_pushed()[0].clone().unwrap();
        assert_eq!(connected.id.as_str(), "solanamainnet");
        assert_eq!(connected.name, "solana");
    }

    #[test]
    fn second_requested_namespace_never_becomes_the_scope() {
        let scaffold = RecordingScaffold::new();
        let transport = FakeTransport::new();
        let namespaces = RequestedNamespaces::new(vec![
            NamespaceConfig::new("eip155", vec!["eip155:1".into()]),
            NamespaceConfig::new("solana", vec!["solana:mainnet".into()]),
        ]);
        let _modal = WalletConnectModal::new(
            ModalOptions::new(
                Arc::clone(&scaffold) as Arc<dyn ScaffoldPort>,
                Arc::new(RecordingRegistry::default()),
                namespaces,
            )
            .with_transport(Arc::clone(&transport) as Arc<dyn TransportPort>)
            .with_project_id("project-1"),
        )
        .unwrap();

        let network = scaffold.networks_pushed()[0].clone().unwrap();
        assert_eq!(network.name, "eip155");
    }
}
