//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `journal` - Decision record, categories, tags, and metadata
//! - `outcome` - Outcome form validation and submissions
//! - `analysis` - Pure statistics over fetched decisions

pub mod analysis;
pub mod foundation;
pub mod journal;
pub mod outcome;
