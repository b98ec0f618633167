//! HTTP adapter for the journal service.

mod dto;
mod rest_client;

pub use dto::DecisionDto;
pub use rest_client::{RestApiConfig, RestDecisionApi, DEFAULT_USER_HEADER};
