//! Category-specific decision metadata.
//!
//! On the wire `meta` is a flat JSON object. In the domain it is a tagged
//! union selected by the decision's category, so investing fields are only
//! reachable on investing decisions.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

use super::CategoryId;
use crate::domain::foundation::{parse_number, ValidationError};

/// Direction of an investing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    #[default]
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::Buy => "매수",
            TradeAction::Sell => "매도",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TradeAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TradeAction::Buy),
            "sell" => Ok(TradeAction::Sell),
            other => Err(ValidationError::invalid_format(
                "action",
                format!("expected buy or sell, got '{}'", other),
            )),
        }
    }
}

/// Market backdrop recorded with an investing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCondition {
    Bull,
    Bear,
    Sideways,
    Volatile,
}

impl MarketCondition {
    pub const ALL: [MarketCondition; 4] = [
        MarketCondition::Bull,
        MarketCondition::Bear,
        MarketCondition::Sideways,
        MarketCondition::Volatile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCondition::Bull => "bull",
            MarketCondition::Bear => "bear",
            MarketCondition::Sideways => "sideways",
            MarketCondition::Volatile => "volatile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketCondition::Bull => "상승장",
            MarketCondition::Bear => "하락장",
            MarketCondition::Sideways => "횡보장",
            MarketCondition::Volatile => "변동성장",
        }
    }
}

impl FromStr for MarketCondition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MarketCondition::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "marketCondition",
                    format!("unknown value '{}'", wanted),
                )
            })
    }
}

/// Trade details of an investing decision. Every field is optional until
/// an outcome is recorded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvestMeta {
    pub symbol: Option<String>,
    pub action: Option<TradeAction>,
    pub market_condition: Option<MarketCondition>,
    pub entry_price: Option<f64>,
    pub exit_price: Option<f64>,
    /// Percent, one decimal place.
    pub return_rate: Option<f64>,
    pub reflection: Option<String>,
}

/// Metadata attached to a decision, shaped by its category.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionMeta {
    Invest(InvestMeta),
    Generic { reflection: Option<String> },
}

impl Default for DecisionMeta {
    fn default() -> Self {
        DecisionMeta::Generic { reflection: None }
    }
}

impl DecisionMeta {
    /// Empty metadata of the right shape for a category.
    pub fn empty_for(category: &CategoryId) -> Self {
        if category.is_invest() {
            DecisionMeta::Invest(InvestMeta::default())
        } else {
            DecisionMeta::default()
        }
    }

    /// Reads the flat wire object for a category.
    ///
    /// Numbers may arrive as JSON numbers or numeric text. Unknown keys and
    /// unrecognized enum values are dropped rather than rejected.
    pub fn from_wire(category: &CategoryId, value: Option<&Value>) -> Self {
        let empty = Map::new();
        let map = match value {
            Some(Value::Object(map)) => map,
            _ => &empty,
        };
        let reflection = wire_text(map, "reflection");

        if !category.is_invest() {
            return DecisionMeta::Generic { reflection };
        }

        DecisionMeta::Invest(InvestMeta {
            symbol: wire_text(map, "symbol"),
            action: wire_text(map, "action").and_then(|s| s.parse().ok()),
            market_condition: wire_text(map, "marketCondition").and_then(|s| s.parse().ok()),
            entry_price: wire_number(map, "entryPrice"),
            exit_price: wire_number(map, "exitPrice"),
            return_rate: wire_number(map, "returnRate"),
            reflection,
        })
    }

    /// Flat wire object; absent fields are omitted.
    pub fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match self {
            DecisionMeta::Invest(invest) => {
                put_text(&mut map, "symbol", invest.symbol.as_deref());
                put_text(&mut map, "action", invest.action.map(|a| a.as_str()));
                put_text(
                    &mut map,
                    "marketCondition",
                    invest.market_condition.map(|m| m.as_str()),
                );
                put_number(&mut map, "entryPrice", invest.entry_price);
                put_number(&mut map, "exitPrice", invest.exit_price);
                put_number(&mut map, "returnRate", invest.return_rate);
                put_text(&mut map, "reflection", invest.reflection.as_deref());
            }
            DecisionMeta::Generic { reflection } => {
                put_text(&mut map, "reflection", reflection.as_deref());
            }
        }
        map
    }

    /// Re-shapes the metadata after a category change, keeping the reflection.
    pub fn conform_to(self, category: &CategoryId) -> Self {
        match (self, category.is_invest()) {
            (DecisionMeta::Invest(invest), true) => DecisionMeta::Invest(invest),
            (DecisionMeta::Generic { reflection }, false) => DecisionMeta::Generic { reflection },
            (DecisionMeta::Invest(invest), false) => DecisionMeta::Generic {
                reflection: invest.reflection,
            },
            (DecisionMeta::Generic { reflection }, true) => DecisionMeta::Invest(InvestMeta {
                reflection,
                ..InvestMeta::default()
            }),
        }
    }

    pub fn as_invest(&self) -> Option<&InvestMeta> {
        match self {
            DecisionMeta::Invest(invest) => Some(invest),
            DecisionMeta::Generic { .. } => None,
        }
    }

    pub fn reflection(&self) -> Option<&str> {
        match self {
            DecisionMeta::Invest(invest) => invest.reflection.as_deref(),
            DecisionMeta::Generic { reflection } => reflection.as_deref(),
        }
    }

    /// Returns true when nothing would be sent on the wire.
    pub fn is_empty(&self) -> bool {
        self.to_wire().is_empty()
    }
}

impl Serialize for DecisionMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

fn wire_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn wire_number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn put_text(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::String(v.to_string()));
    }
}

fn put_number(map: &mut Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(n) = value.and_then(Number::from_f64) {
        map.insert(key.to_string(), Value::Number(n));
    }
}
