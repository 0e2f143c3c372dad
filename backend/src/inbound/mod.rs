//! Inbound adapters that translate external requests into store port calls
//! while keeping framework details at the edge.

pub mod http;
