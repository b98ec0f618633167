//! REST client for the journal service.
//!
//! Every request carries the configured user id in a header; there is no
//! token handling. Non-2xx responses become [`ApiError::Status`] with the
//! response body text.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::HeaderName;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::dto::{into_decisions, DecisionDto};
use crate::domain::analysis::{AnalysisSummary, StatsOverview, SummaryQuery, WeeklyReport};
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::journal::{Decision, DecisionPatch, NewDecision};
use crate::ports::{ApiError, DecisionApi, DeleteAck};

/// Header used when none is configured.
pub const DEFAULT_USER_HEADER: &str = "x-user-id";

/// Connection settings for [`RestDecisionApi`].
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    pub base_url: String,
    pub user_id: UserId,
    pub user_header: String,
    /// `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl RestApiConfig {
    pub fn new(base_url: impl Into<String>, user_id: UserId) -> Self {
        Self {
            base_url: base_url.into(),
            user_id,
            user_header: DEFAULT_USER_HEADER.to_string(),
            timeout: None,
        }
    }

    pub fn with_user_header(mut self, header: impl Into<String>) -> Self {
        self.user_header = header.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// [`DecisionApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct RestDecisionApi {
    client: reqwest::Client,
    base_url: String,
    user_id: UserId,
    user_header: HeaderName,
}

impl RestDecisionApi {
    pub fn new(config: RestApiConfig) -> Result<Self, ApiError> {
        let user_header = HeaderName::from_bytes(config.user_header.as_bytes())
            .map_err(|e| ApiError::Transport(format!("invalid header name '{}': {}", config.user_header, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format_reqwest_error(&e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id,
            user_header,
        })
    }

    /// URL helper.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.client
            .request(method, self.url(path))
            .header(self.user_header.clone(), self.user_id.as_str())
    }

    /// `/decisions/{id}` with the id as one percent-encoded path segment.
    fn decision_url(&self, id: &DecisionId) -> Result<Url, ApiError> {
        // dot segments would be dropped and hit the collection instead
        if matches!(id.as_str(), "." | "..") {
            return Err(ApiError::Transport(format!("cannot address decision '{}'", id)));
        }
        let mut url = Url::parse(&self.url("/decisions"))
            .map_err(|e| ApiError::Transport(format!("invalid base url '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("base url '{}' cannot carry a path", self.base_url)))?
            .push(id.as_str());
        Ok(url)
    }

    fn decision_request(&self, method: Method, id: &DecisionId) -> Result<RequestBuilder, ApiError> {
        let url = self.decision_url(id)?;
        debug!("{} {}", method, url.path());
        Ok(self
            .client
            .request(method, url)
            .header(self.user_header.clone(), self.user_id.as_str()))
    }

    /// Sends the request and decodes a 2xx JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format_reqwest_error(&e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(format_reqwest_error(&e)))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body = %summarize_response_body(&body),
                "Journal API returned an error"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode journal API response");
            ApiError::Decode(e.to_string())
        })
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(method, path).json(body)).await
    }

    async fn fetch_decision(&self, request: RequestBuilder) -> Result<Decision, ApiError> {
        let dto: DecisionDto = self.send(request).await?;
        Ok(Decision::try_from(dto)?)
    }

    async fn fetch_decisions(&self, path: &str) -> Result<Vec<Decision>, ApiError> {
        let dtos: Vec<DecisionDto> = self.send(self.request(Method::GET, path)).await?;
        let decisions = into_decisions(dtos)?;
        debug!("Fetched {} decisions from {}", decisions.len(), path);
        Ok(decisions)
    }
}

#[async_trait]
impl DecisionApi for RestDecisionApi {
    async fn create_decision(&self, decision: &NewDecision) -> Result<Decision, ApiError> {
        let dto: DecisionDto = self.send_json(Method::POST, "/decisions", decision).await?;
        Ok(Decision::try_from(dto)?)
    }

    async fn list_decisions(&self) -> Result<Vec<Decision>, ApiError> {
        self.fetch_decisions("/decisions").await
    }

    async fn get_decision(&self, id: &DecisionId) -> Result<Decision, ApiError> {
        self.fetch_decision(self.decision_request(Method::GET, id)?)
            .await
    }

    async fn update_decision(&self, id: &DecisionId, patch: &DecisionPatch) -> Result<Decision, ApiError> {
        self.fetch_decision(self.decision_request(Method::PATCH, id)?.json(patch))
            .await
    }

    async fn delete_decision(&self, id: &DecisionId) -> Result<DeleteAck, ApiError> {
        self.send(self.decision_request(Method::DELETE, id)?).await
    }

    async fn get_analysis(&self) -> Result<StatsOverview, ApiError> {
        self.send(self.request(Method::GET, "/analysis")).await
    }

    async fn get_summary(&self, query: &SummaryQuery) -> Result<AnalysisSummary, ApiError> {
        self.send(self.request(Method::GET, "/analysis/summary").query(query))
            .await
    }

    async fn get_pending(&self) -> Result<Vec<Decision>, ApiError> {
        self.fetch_decisions("/analysis/pending").await
    }

    async fn get_weekly_report(&self, week_start: NaiveDate) -> Result<WeeklyReport, ApiError> {
        let week_start = week_start.format("%Y-%m-%d").to_string();
        self.send(
            self.request(Method::GET, "/weekly-report")
                .query(&[("weekStart", week_start)]),
        )
        .await
    }
}

fn format_reqwest_error(err: &reqwest::Error) -> String {
    // Keep chained causes so DNS/TLS/socket failures stay visible.
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !cause_msg.is_empty() && !message.contains(&cause_msg) {
            message.push_str(": ");
            message.push_str(&cause_msg);
        }
        source = cause.source();
    }

    message
}

/// Single-line, bounded rendering of a response body for logs.
fn summarize_response_body(raw: &str) -> String {
    const MAX_CHARS: usize = 400;
    let compact = raw.replace(['\n', '\r'], " ");
    if compact.chars().count() > MAX_CHARS {
        let head: String = compact.chars().take(MAX_CHARS).collect();
        format!("{}…", head)
    } else {
        compact
    }
}
