//! In-memory transport double with synchronous pub/sub.
//!
//! Mirrors the cooperative event model the adapter assumes: emissions are
//! delivered in order, at most once per emission, with no overlapping
//! deliveries. Handler lists are cloned before invocation so a handler
//! may freely call back into the transport.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::anyhow;
use async_trait::async_trait;
use wcmodal_domain::{CaipNetworkId, RequestedNamespaces, Session};

use crate::ports::outbound::{
    DisplayUriHandler, SessionEvent, SessionEventHandler, SubscriptionHandle, TransportPort,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

type UriHandlers = Arc<Mutex<Vec<(u64, DisplayUriHandler)>>>;
type SessionHandlers = Arc<Mutex<Vec<(u64, SessionEvent, SessionEventHandler)>>>;

/// Scriptable transport double.
#[derive(Default)]
pub struct FakeTransport {
    session: Mutex<Option<Session>>,
    session_on_connect: Mutex<Option<Session>>,
    uri_on_connect: Mutex<Option<String>>,
    connect_failure: Mutex<Option<String>>,
    last_connect_namespaces: Mutex<Option<RequestedNamespaces>>,
    default_chains: Mutex<Vec<CaipNetworkId>>,
    uri_handlers: UriHandlers,
    session_handlers: SessionHandlers,
    uri_listeners_at_connect: Mutex<Option<usize>>,
    uri_unsubscribes: Arc<AtomicUsize>,
    connect_calls: AtomicUsize,
    disconnect_calls: AtomicUsize,
    next_subscription_id: AtomicU64,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Replace the current session snapshot.
    pub fn set_session(&self, session: Option<Session>) {
        *lock(&self.session) = session;
    }

    /// Session the transport installs when `connect` resolves.
    pub fn set_session_on_connect(&self, session: Session) {
        *lock(&self.session_on_connect) = Some(session);
    }

    /// URI emitted to display-URI listeners during `connect`.
    pub fn emit_uri_on_connect(&self, uri: &str) {
        *lock(&self.uri_on_connect) = Some(uri.to_string());
    }

    /// Make the next `connect` call fail with the given message.
    pub fn fail_next_connect(&self, message: &str) {
        *lock(&self.connect_failure) = Some(message.to_string());
    }

    /// Deliver a session lifecycle event to matching subscribers.
    pub fn emit_session_event(&self, event: SessionEvent) {
        let handlers: Vec<SessionEventHandler> = lock(&self.session_handlers)
            .iter()
            .filter(|(_, kind, _)| *kind == event)
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn session_snapshot(&self) -> Option<Session> {
        lock(&self.session).clone()
    }

    pub fn default_chains(&self) -> Vec<CaipNetworkId> {
        lock(&self.default_chains).clone()
    }

    pub fn last_connect_namespaces(&self) -> Option<RequestedNamespaces> {
        lock(&self.last_connect_namespaces).clone()
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }

    pub fn display_uri_listener_count(&self) -> usize {
        lock(&self.uri_handlers).len()
    }

    /// How many display-URI listeners were registered when the most
    /// recent `connect` began.
    pub fn display_uri_listeners_at_connect(&self) -> Option<usize> {
        *lock(&self.uri_listeners_at_connect)
    }

    pub fn display_uri_unsubscribe_count(&self) -> usize {
        self.uri_unsubscribes.load(Ordering::SeqCst)
    }

    pub fn session_listener_count(&self) -> usize {
        lock(&self.session_handlers).len()
    }

    fn next_id(&self) -> u64 {
        self.next_subscription_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl TransportPort for FakeTransport {
    async fn connect(&self, namespaces: &RequestedNamespaces) -> anyhow::Result<()> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        *lock(&self.last_connect_namespaces) = Some(namespaces.clone());
        *lock(&self.uri_listeners_at_connect) = Some(lock(&self.uri_handlers).len());

        if let Some(message) = lock(&self.connect_failure).take() {
            return Err(anyhow!(message));
        }

        if let Some(uri) = lock(&self.uri_on_connect).clone() {
            let handlers: Vec<DisplayUriHandler> = lock(&self.uri_handlers)
                .iter()
                .map(|(_, handler)| Arc::clone(handler))
                .collect();
            for handler in handlers {
                handler(uri.clone());
            }
        }

        if let Some(session) = lock(&self.session_on_connect).clone() {
            *lock(&self.session) = Some(session);
        }
        Ok(())
    }

    async fn disconnect(&self) -> anyhow::Result<()> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        *lock(&self.session) = None;
        Ok(())
    }

    fn set_default_chain(&self, chain_id: &CaipNetworkId) {
        lock(&self.default_chains).push(chain_id.clone());
    }

    fn session(&self) -> Option<Session> {
        lock(&self.session).clone()
    }

    fn on_display_uri(&self, handler: DisplayUriHandler) -> SubscriptionHandle {
        let id = self.next_id();
        lock(&self.uri_handlers).push((id, handler));
        let handlers = Arc::clone(&self.uri_handlers);
        let unsubscribes = Arc::clone(&self.uri_unsubscribes);
        SubscriptionHandle::new(move || {
            lock(&handlers).retain(|(handler_id, _)| *handler_id != id);
            unsubscribes.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn on_session_event(
        &self,
        event: SessionEvent,
        handler: SessionEventHandler,
    ) -> SubscriptionHandle {
        let id = self.next_id();
        lock(&self.session_handlers).push((id, event, handler));
        let handlers = Arc::clone(&self.session_handlers);
        SubscriptionHandle::new(move || {
            lock(&handlers).retain(|(handler_id, _, _)| *handler_id != id);
        })
    }
}
