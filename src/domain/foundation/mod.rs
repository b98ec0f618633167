//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the decision journal.

mod confidence;
mod errors;
mod ids;
mod numeric;
mod percentage;
mod timestamp;

pub use confidence::Confidence;
pub use errors::ValidationError;
pub use ids::{DecisionId, UserId};
pub use numeric::parse_number;
pub use percentage::{format_percent, round1, Percentage};
pub use timestamp::Timestamp;
