//! Transport Port - session-oriented wallet transport operations.
//!
//! Abstracts the universal wallet transport: connect/disconnect, a
//! current-session snapshot, a default-chain setter, and event
//! subscriptions for the display-URI and session-lifecycle events.

use std::sync::Arc;

use async_trait::async_trait;
use wcmodal_domain::{CaipNetworkId, RequestedNamespaces, Session};

/// Session lifecycle events emitted by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session's namespaces or accounts changed
    Updated,
    /// The session was terminated by either side
    Deleted,
}

/// Handler for the one-shot display-URI event (QR/deep-link rendering).
pub type DisplayUriHandler = Arc<dyn Fn(String) + Send + Sync>;

/// Handler for session lifecycle events.
pub type SessionEventHandler = Arc<dyn Fn(SessionEvent) + Send + Sync>;

/// Handle to an installed event subscription.
///
/// Dropping the handle does NOT unsubscribe; call `unsubscribe()`
/// explicitly. A handle dropped without unsubscribing leaves the listener
/// registered on the transport.
pub struct SubscriptionHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    /// Create a handle whose `unsubscribe()` runs the given closure.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle with nothing to cancel.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Remove the listener from the transport. At most once; consumed.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Port for the universal wallet transport.
///
/// The adapter is a pass-through over these operations: no timeouts, no
/// retries, no cancellation. Every call is attempted exactly once and any
/// failure propagates to the caller of the wrapping adapter operation.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Establish a session, requesting the given namespaces.
    async fn connect(&self, namespaces: &RequestedNamespaces) -> anyhow::Result<()>;

    /// Tear down the current session, if any.
    async fn disconnect(&self) -> anyhow::Result<()>;

    /// Fire-and-forget: set the transport's default chain.
    fn set_default_chain(&self, chain_id: &CaipNetworkId);

    /// Snapshot of the current session, if one is established.
    fn session(&self) -> Option<Session>;

    /// Subscribe to the display-URI event emitted while connecting.
    fn on_display_uri(&self, handler: DisplayUriHandler) -> SubscriptionHandle;

    /// Subscribe to one session lifecycle event kind.
    fn on_session_event(
        &self,
        event: SessionEvent,
        handler: SessionEventHandler,
    ) -> SubscriptionHandle;
}
