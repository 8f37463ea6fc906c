//! Inbound adapters translating external requests into domain service calls
//! while keeping framework details at the edge.
//!
//! REST handlers live under [`http`]; future transports would sit alongside
//! it.

pub mod http;
