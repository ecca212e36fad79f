//! Wallet modal adapter.
//!
//! Bridges a modal scaffold (wallet-connection UI framework) to a
//! universal wallet transport. Session, account, and network events from
//! the transport are translated into scaffold state updates; scaffold
//! actions (connect, disconnect, switch network) are translated into
//! transport calls. Both collaborators are ports - nothing here renders
//! UI or speaks a wire protocol.

pub mod error;
pub mod modal;
pub mod options;
pub mod ports;
pub mod presets;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::ModalError;
pub use modal::WalletConnectModal;
pub use options::ModalOptions;
