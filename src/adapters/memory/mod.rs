//! In-memory adapters for testing and offline use.

mod in_memory_api;

pub use in_memory_api::InMemoryDecisionApi;
