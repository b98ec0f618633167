//! Outcome form and the validated submission it produces.

use super::OutcomeRejection;
use crate::domain::analysis::calc_return_rate;
use crate::domain::foundation::{parse_number, Confidence};
use crate::domain::journal::{Decision, DecisionMeta, DecisionPatch, DecisionResult, InvestMeta, TradeAction};

/// Raw state of the "record outcome" form. Prices are the text the user typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeForm {
    pub result: Option<DecisionResult>,
    pub confidence: Confidence,
    pub entry_price: String,
    pub exit_price: String,
    pub action: Option<TradeAction>,
    pub reflection: Option<String>,
}

impl OutcomeForm {
    /// Form pre-filled from what the decision already holds.
    pub fn prefilled(decision: &Decision) -> Self {
        let invest = decision.meta().as_invest();
        let price = |p: Option<f64>| p.map(|v| v.to_string()).unwrap_or_default();
        Self {
            result: Some(decision.result()).filter(|r| r.is_terminal()),
            confidence: decision.confidence(),
            entry_price: price(invest.and_then(|m| m.entry_price)),
            exit_price: price(invest.and_then(|m| m.exit_price)),
            action: invest.and_then(|m| m.action),
            reflection: decision.meta().reflection().map(str::to_string),
        }
    }

    /// Return rate the form would store, for live display while typing.
    pub fn preview_return_rate(&self, decision: &Decision) -> Option<f64> {
        calc_return_rate(
            parse_number(&self.entry_price),
            parse_number(&self.exit_price),
            self.effective_action(decision),
        )
    }

    /// Checks the form against the decision it belongs to.
    ///
    /// Investing decisions additionally need both prices; the return rate is
    /// recomputed from them and stored in the metadata.
    pub fn validate(&self, decision: &Decision) -> Result<OutcomeSubmission, OutcomeRejection> {
        let result = self
            .result
            .filter(|r| r.is_terminal())
            .ok_or(OutcomeRejection::ResultNotSelected)?;

        let reflection = self
            .reflection
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        let meta = match decision.meta() {
            DecisionMeta::Invest(existing) => {
                let entry = required_price("entryPrice", &self.entry_price)?;
                let exit = required_price("exitPrice", &self.exit_price)?;
                let action = self.effective_action(decision);
                DecisionMeta::Invest(InvestMeta {
                    action: Some(action),
                    entry_price: Some(entry),
                    exit_price: Some(exit),
                    return_rate: calc_return_rate(Some(entry), Some(exit), action),
                    reflection,
                    ..existing.clone()
                })
            }
            DecisionMeta::Generic { .. } => DecisionMeta::Generic { reflection },
        };

        Ok(OutcomeSubmission {
            result,
            confidence: self.confidence,
            meta: Some(meta),
        })
    }

    fn effective_action(&self, decision: &Decision) -> TradeAction {
        self.action
            .or_else(|| decision.meta().as_invest().and_then(|m| m.action))
            .unwrap_or_default()
    }
}

fn required_price(field: &'static str, input: &str) -> Result<f64, OutcomeRejection> {
    if input.trim().is_empty() {
        return Err(OutcomeRejection::MissingField { field });
    }
    parse_number(input).ok_or_else(|| OutcomeRejection::InvalidNumber {
        field,
        input: input.to_string(),
    })
}

/// A well-formed outcome update, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSubmission {
    pub result: DecisionResult,
    pub confidence: Confidence,
    pub meta: Option<DecisionMeta>,
}

impl OutcomeSubmission {
    /// Manual revert: back to pending, keeping the given confidence.
    pub fn revert_to_pending(confidence: Confidence) -> Self {
        Self {
            result: DecisionResult::Pending,
            confidence,
            meta: None,
        }
    }

    /// The partial update sent to the API.
    pub fn into_patch(self) -> DecisionPatch {
        DecisionPatch {
            result: Some(self.result),
            confidence: Some(self.confidence),
            meta: self.meta,
            ..DecisionPatch::default()
        }
    }
}
