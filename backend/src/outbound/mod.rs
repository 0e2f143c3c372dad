//! Outbound adapters implementing the domain store ports.
//!
//! - **memory**: process-local stores seeded with mock records. State is lost
//!   on restart.
//!
//! Adapters translate between port calls and their backing state. They hold
//! no business rules beyond the store contracts.

pub mod memory;
