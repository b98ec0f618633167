//! Wire shapes returned by the journal service.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::{Confidence, DecisionId, Timestamp, UserId, ValidationError};
use crate::domain::journal::{CategoryId, Decision, DecisionMeta, DecisionResult};

/// A decision exactly as the service sends it.
///
/// `meta` stays untyped here; its shape depends on `categoryId` and is
/// resolved by [`DecisionMeta::from_wire`] during conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionDto {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub meta: Option<Value>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub resolved_at: Option<Timestamp>,
}

impl TryFrom<DecisionDto> for Decision {
    type Error = ValidationError;

    fn try_from(dto: DecisionDto) -> Result<Self, Self::Error> {
        let category_id = CategoryId::new(dto.category_id)?;
        let confidence = match dto.confidence {
            Some(value) => Confidence::try_new(value)?,
            None => Confidence::default(),
        };
        let result: DecisionResult = match dto.result.as_deref() {
            Some(raw) => raw.parse()?,
            None => DecisionResult::Pending,
        };
        let meta = DecisionMeta::from_wire(&category_id, dto.meta.as_ref());

        Ok(Decision::new(
            DecisionId::new(dto.id)?,
            UserId::new(dto.user_id)?,
            category_id,
            dto.title,
            dto.created_at,
        )?
        .with_notes(dto.notes)
        .with_tags(dto.tags.into())
        .with_confidence(confidence)
        .with_meta(meta)
        .with_result(result, dto.resolved_at))
    }
}

pub fn into_decisions(dtos: Vec<DecisionDto>) -> Result<Vec<Decision>, ValidationError> {
    dtos.into_iter().map(Decision::try_from).collect()
}
