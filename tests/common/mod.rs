//! Common test utilities shared across test types
//!
//! - `mocks.rs` - Stub implementation of the API port
//! - `server.rs` - `wiremock` server driven from synchronous tests

pub mod mocks;
