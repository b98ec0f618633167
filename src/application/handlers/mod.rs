//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations against
//! the `DecisionApi` port.

pub mod analysis;
mod errors;
pub mod journal;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis::*;
pub use errors::JournalError;
pub use journal::*;
