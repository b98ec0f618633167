//! Journal service connection configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::http::{RestApiConfig, DEFAULT_USER_HEADER};
use crate::domain::foundation::UserId;

/// Journal API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the journal service, e.g. `https://journal.example.com/api`
    pub base_url: String,

    /// Identifier sent with every request
    pub user_id: String,

    /// Header carrying the user identifier
    #[serde(default = "default_user_header")]
    pub user_header: String,

    /// Request timeout in seconds; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("api.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("api.user_id"));
        }
        let header_ok = !self.user_header.is_empty()
            && self
                .user_header
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !header_ok {
            return Err(ValidationError::InvalidUserHeader(self.user_header.clone()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Settings for the REST adapter.
    pub fn rest_config(&self) -> Result<RestApiConfig, ValidationError> {
        let user_id = UserId::new(self.user_id.trim())
            .map_err(|_| ValidationError::MissingRequired("api.user_id"))?;
        let mut rest = RestApiConfig::new(&self.base_url, user_id).with_user_header(&self.user_header);
        if let Some(timeout) = self.timeout() {
            rest = rest.with_timeout(timeout);
        }
        Ok(rest)
    }
}

fn default_user_header() -> String {
    DEFAULT_USER_HEADER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            base_url: "https://journal.example.com".to_string(),
            user_id: "u-1".to_string(),
            user_header: default_user_header(),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_base_url_requires_http_scheme() {
        let mut c = config();
        c.base_url = "journal.example.com".to_string();
        assert_eq!(c.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_blank_user_id_is_missing() {
        let mut c = config();
        c.user_id = "  ".to_string();
        assert_eq!(c.validate(), Err(ValidationError::MissingRequired("api.user_id")));
    }

    #[test]
    fn test_header_with_spaces_is_rejected() {
        let mut c = config();
        c.user_header = "x user".to_string();
        assert!(matches!(c.validate(), Err(ValidationError::InvalidUserHeader(_))));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut c = config();
        c.timeout_secs = Some(0);
        assert_eq!(c.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_rest_config_carries_timeout() {
        let mut c = config();
        c.timeout_secs = Some(10);
        let rest = c.rest_config().unwrap();
        assert_eq!(rest.timeout, Some(Duration::from_secs(10)));
        assert_eq!(rest.user_id.as_str(), "u-1");
        assert_eq!(rest.user_header, "x-user-id");
    }
}
