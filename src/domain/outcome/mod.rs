//! Outcome module - recording how a decision turned out.
//!
//! `OutcomeForm::validate` either yields an `OutcomeSubmission` or an
//! informational `OutcomeRejection`. Results move freely, so reverting a
//! resolved decision to pending is an ordinary submission.

mod rejection;
mod submission;

pub use rejection::OutcomeRejection;
pub use submission::{OutcomeForm, OutcomeSubmission};
