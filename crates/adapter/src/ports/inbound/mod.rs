//! Inbound ports - controller clients the adapter hands to the scaffold.

mod controller_clients;

pub use controller_clients::{
    ApprovedNetworks, ConnectionControllerClient, NetworkControllerClient,
};
