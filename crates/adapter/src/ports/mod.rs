//! Ports for the wallet modal adapter.
//!
//! Outbound ports abstract the two external collaborators (modal scaffold,
//! wallet transport) plus the options registry. Inbound ports are the
//! controller-client traits the adapter implements and hands to the
//! scaffold at initialization.

pub mod inbound;
pub mod outbound;
