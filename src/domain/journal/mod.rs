//! Journal module - the decision record and its vocabulary.
//!
//! # Components
//!
//! - `Decision` - A logged judgment with its result lifecycle
//! - `DecisionMeta` - Category-shaped metadata (investing vs. generic)
//! - `CategoryRegistry` - Category ids and their localized result labels
//! - `Tags` / `TagSelection` - Ordered tag sets and the capped picker
//! - `DecisionDraft` / `DecisionPatch` - Create and update request shapes

mod category;
mod decision;
mod draft;
mod meta;
mod result;
mod tags;

pub use category::{
    labels_for, CategoryId, CategoryInfo, CategoryRegistry, ResultLabels, PENDING_LABEL,
};
pub use decision::Decision;
pub use draft::{DecisionDraft, DecisionPatch, NewDecision};
pub use meta::{DecisionMeta, InvestMeta, MarketCondition, TradeAction};
pub use result::DecisionResult;
pub use tags::{TagSelection, TagToggle, Tags, DEFAULT_TAG_CAP, SUGGESTED_TAGS};
