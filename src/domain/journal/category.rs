//! Category registry: which categories exist and how their results are worded.
//!
//! The built-in table is created once per process and never mutated.
//! Deployments with a different category set build their own
//! [`CategoryRegistry`] from entries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DecisionResult;
use crate::domain::foundation::ValidationError;

/// Identifier of a decision category (`invest`, `health`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// The investing category, which carries trade metadata.
    pub const INVEST: &'static str = "invest";

    /// Creates a CategoryId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("category_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The investing category id.
    pub fn invest() -> Self {
        Self(Self::INVEST.to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the investing category.
    pub fn is_invest(&self) -> bool {
        self.0 == Self::INVEST
    }
}

impl TryFrom<String> for CategoryId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label shown for a decision that has no outcome yet.
pub const PENDING_LABEL: &str = "대기";

/// Display wording for the three terminal results of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLabels {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
}

impl ResultLabels {
    pub fn new(
        positive: impl Into<String>,
        negative: impl Into<String>,
        neutral: impl Into<String>,
    ) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
            neutral: neutral.into(),
        }
    }

    /// Wording used when a category is unknown.
    pub fn generic() -> Self {
        Self::new("긍정", "부정", "중립")
    }

    /// Label for any result, including pending.
    pub fn label(&self, result: DecisionResult) -> &str {
        match result {
            DecisionResult::Pending => PENDING_LABEL,
            DecisionResult::Positive => &self.positive,
            DecisionResult::Negative => &self.negative,
            DecisionResult::Neutral => &self.neutral,
        }
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: CategoryId,
    pub name: String,
    pub labels: ResultLabels,
}

impl CategoryInfo {
    pub fn new(id: CategoryId, name: impl Into<String>, labels: ResultLabels) -> Self {
        Self {
            id,
            name: name.into(),
            labels,
        }
    }
}

/// Read-only lookup table from category id to its display data.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<CategoryInfo>,
    fallback: ResultLabels,
}

impl CategoryRegistry {
    /// Builds a registry from entries; later duplicates of an id are ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = CategoryInfo>) -> Self {
        let mut categories: Vec<CategoryInfo> = Vec::new();
        for entry in entries {
            if !categories.iter().any(|c| c.id == entry.id) {
                categories.push(entry);
            }
        }
        Self {
            categories,
            fallback: ResultLabels::generic(),
        }
    }

    /// The process-wide built-in registry.
    pub fn builtin() -> &'static CategoryRegistry {
        &BUILTIN
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Looks up a category.
    pub fn get(&self, id: &str) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    /// Returns true if the id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Result labels for a category, falling back to the generic wording.
    pub fn labels_for(&self, id: &str) -> &ResultLabels {
        self.get(id).map(|c| &c.labels).unwrap_or(&self.fallback)
    }

    /// Label for a single result within a category.
    pub fn result_label(&self, id: &str, result: DecisionResult) -> &str {
        self.labels_for(id).label(result)
    }

    /// Display name of a category, or the raw id when unknown.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(id)
    }
}

fn entry(id: &str, name: &str, labels: (&str, &str, &str)) -> CategoryInfo {
    CategoryInfo {
        id: CategoryId(id.to_string()),
        name: name.to_string(),
        labels: ResultLabels::new(labels.0, labels.1, labels.2),
    }
}

static BUILTIN: Lazy<CategoryRegistry> = Lazy::new(|| {
    CategoryRegistry::from_entries([
        entry(CategoryId::INVEST, "투자", ("수익", "손실", "본전")),
        entry("health", "건강", ("개선", "악화", "유지")),
        entry("study", "공부", ("성취", "미달", "보통")),
        entry("career", "커리어", ("성공", "실패", "보류")),
        entry("relationship", "관계", ("좋아짐", "나빠짐", "그대로")),
        entry("daily", "일상", ("만족", "후회", "무난")),
    ])
});

/// Result labels from the built-in registry.
pub fn labels_for(category_id: &str) -> &'static ResultLabels {
    BUILTIN.labels_for(category_id)
}
