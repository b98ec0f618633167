//! Display preferences

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DEFAULT_TOP_TAGS;
use crate::domain::journal::DEFAULT_TAG_CAP;

/// Limits used when presenting decisions and statistics
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Tags shown in the frequency list
    #[serde(default = "default_top_tags_limit")]
    pub top_tags_limit: usize,

    /// Tags a decision may carry
    #[serde(default = "default_tag_selection_cap")]
    pub tag_selection_cap: usize,

    /// Look-back window of the summary, in days
    #[serde(default = "default_summary_days")]
    pub summary_days: u32,
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_tags_limit == 0 {
            return Err(ValidationError::InvalidLimit("display.top_tags_limit"));
        }
        if self.tag_selection_cap == 0 {
            return Err(ValidationError::InvalidLimit("display.tag_selection_cap"));
        }
        if self.summary_days == 0 {
            return Err(ValidationError::InvalidLimit("display.summary_days"));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_tags_limit: default_top_tags_limit(),
            tag_selection_cap: default_tag_selection_cap(),
            summary_days: default_summary_days(),
        }
    }
}

fn default_top_tags_limit() -> usize {
    DEFAULT_TOP_TAGS
}

fn default_tag_selection_cap() -> usize {
    DEFAULT_TAG_CAP
}

fn default_summary_days() -> u32 {
    30
}
