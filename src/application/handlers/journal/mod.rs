//! Journal handlers - create, edit, resolve, and delete decisions.

mod create_decision;
mod delete_decision;
mod edit_decision;
mod get_decision;
mod list_decisions;
mod submit_outcome;

pub use create_decision::{CreateDecisionCommand, CreateDecisionError, CreateDecisionHandler};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use edit_decision::{EditDecisionCommand, EditDecisionError, EditDecisionHandler};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery, ListPendingHandler};
pub use submit_outcome::{
    RevertOutcomeCommand, RevertOutcomeHandler, SubmitOutcomeCommand, SubmitOutcomeError,
    SubmitOutcomeHandler,
};
