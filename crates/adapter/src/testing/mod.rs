//! Test utilities for the adapter.
//!
//! Hand-rolled recording doubles for the outbound ports, plus shared
//! fixtures. Available in unit tests and behind the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! wcmodal-adapter = { workspace = true, features = ["testing"] }
//! ```

mod fake_transport;
mod fixtures;
mod recording_scaffold;

pub use fake_transport::FakeTransport;
pub use fixtures::{eip155_namespaces, mainnet_session};
pub use recording_scaffold::{RecordingRegistry, RecordingScaffold, ScaffoldCall};
