//! # Infrastructure Layer
//!
//! Ports to external collaborators: the carrier gateway and the store.

pub mod carrier;
pub mod store;
