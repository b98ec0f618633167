//! Decision Journal - client core
//!
//! Logs personal decisions, records how they turned out, and derives a
//! track record from them: positive rates by category, confidence
//! calibration, tag performance, and week-over-week reviews. The journal
//! itself lives behind a REST service reached through [`ports::DecisionApi`].

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
