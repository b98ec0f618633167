//! Adapters - Implementations of port interfaces.
//!
//! - `http` - `DecisionApi` over the journal service's REST endpoints
//! - `memory` - `DecisionApi` held in process

pub mod http;
pub mod memory;

pub use http::{RestApiConfig, RestDecisionApi};
pub use memory::InMemoryDecisionApi;
