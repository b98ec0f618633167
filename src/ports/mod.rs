//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionApi` - The journal service that owns decision storage

mod decision_api;

pub use decision_api::{ApiError, DecisionApi, DeleteAck};
