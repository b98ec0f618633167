//! Return rate of an investing decision.

use crate::domain::foundation::{parse_number, round1};
use crate::domain::journal::TradeAction;

/// Return in percent, rounded to one decimal place.
///
/// A sell profits when the price falls, so its sign is flipped relative to
/// a buy. Returns `None` when either price is missing or non-finite, or
/// when the entry price is not positive.
pub fn calc_return_rate(entry: Option<f64>, exit: Option<f64>, action: TradeAction) -> Option<f64> {
    let entry = entry.filter(|v| v.is_finite())?;
    let exit = exit.filter(|v| v.is_finite())?;
    if entry <= 0.0 {
        return None;
    }
    let raw = match action {
        TradeAction::Sell => (entry - exit) / entry,
        TradeAction::Buy => (exit - entry) / entry,
    };
    Some(round1(raw * 100.0))
}

/// [`calc_return_rate`] over raw form text.
pub fn calc_return_rate_text(entry: &str, exit: &str, action: TradeAction) -> Option<f64> {
    calc_return_rate(parse_number(entry), parse_number(exit), action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_gains_when_price_rises() {
        let rate = calc_return_rate(Some(72000.0), Some(76000.0), TradeAction::Buy).unwrap();
        assert!((rate - 5.6).abs() < 1e-9);
    }

    #[test]
    fn sell_loses_when_price_rises() {
        let rate = calc_return_rate(Some(72000.0), Some(76000.0), TradeAction::Sell).unwrap();
        assert!((rate + 5.6).abs() < 1e-9);
    }

    #[test]
    fn zero_entry_is_undefined() {
        assert_eq!(calc_return_rate(Some(0.0), Some(100.0), TradeAction::Buy), None);
        assert_eq!(calc_return_rate(Some(-5.0), Some(100.0), TradeAction::Buy), None);
    }

    #[test]
    fn missing_or_non_finite_prices_are_undefined() {
        assert_eq!(calc_return_rate(None, Some(100.0), TradeAction::Buy), None);
        assert_eq!(calc_return_rate(Some(100.0), None, TradeAction::Buy), None);
        assert_eq!(calc_return_rate(Some(f64::NAN), Some(1.0), TradeAction::Buy), None);
        assert_eq!(calc_return_rate(Some(1.0), Some(f64::INFINITY), TradeAction::Buy), None);
    }

    #[test]
    fn text_inputs_use_comma_stripped_parse() {
        let rate = calc_return_rate_text("72,000", "76,000", TradeAction::Buy).unwrap();
        assert!((rate - 5.6).abs() < 1e-9);
        assert_eq!(calc_return_rate_text("abc", "76,000", TradeAction::Buy), None);
        assert_eq!(calc_return_rate_text("", "76,000", TradeAction::Sell), None);
    }

    #[test]
    fn unchanged_price_is_zero() {
        assert_eq!(calc_return_rate(Some(50.0), Some(50.0), TradeAction::Sell), Some(0.0));
    }
}
