//! # Input Module
//!
//! Turns the raw text handed over by the input collaborator into typed values.
//!
//! Parsing never throws: an unusable service cost becomes `None`, which the
//! calculator then rejects with [`TipError::InvalidInput`].
//!
//! ```text
//! "33.33"  ──► parse_service_cost ──► Some(33.33)
//! ""       ──► parse_service_cost ──► None
//! "abc"    ──► parse_service_cost ──► None
//! "on"     ──► parse_round_up     ──► Ok(true)
//! ```

use crate::error::{TipError, TipResult};

/// Parses the service cost entered by the user.
///
/// ## Rules
/// - Leading and trailing whitespace is ignored
/// - Must parse as a decimal number
/// - Must be finite and not negative
///
/// ## Example
/// ```rust
/// use tiptime_core::input::parse_service_cost;
///
/// assert_eq!(parse_service_cost(" 50.00 "), Some(50.0));
/// assert_eq!(parse_service_cost(""), None);
/// assert_eq!(parse_service_cost("-5"), None);
/// assert_eq!(parse_service_cost("NaN"), None);
/// ```
pub fn parse_service_cost(raw: &str) -> Option<f64> {
    let cost: f64 = raw.trim().parse().ok()?;
    is_valid_cost(cost).then_some(cost)
}

/// Whether `cost` is acceptable as a service cost.
#[inline]
pub fn is_valid_cost(cost: f64) -> bool {
    cost.is_finite() && cost >= 0.0
}

/// Parses the state of the round-up toggle.
///
/// Accepts `true/false`, `yes/no`, `on/off`, `y/n` and `1/0`, case-insensitively.
pub fn parse_round_up(raw: &str) -> TipResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(TipError::InvalidFlag(raw.trim().to_string())),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_cost_valid() {
        assert_eq!(parse_service_cost("50"), Some(50.0));
        assert_eq!(parse_service_cost("33.33"), Some(33.33));
        assert_eq!(parse_service_cost("0"), Some(0.0));
        assert_eq!(parse_service_cost("\t12.5\n"), Some(12.5));
    }

    #[test]
    fn test_parse_service_cost_invalid() {
        assert_eq!(parse_service_cost(""), None);
        assert_eq!(parse_service_cost("   "), None);
        assert_eq!(parse_service_cost("abc"), None);
        assert_eq!(parse_service_cost("12,50"), None);
        assert_eq!(parse_service_cost("-0.01"), None);
        assert_eq!(parse_service_cost("inf"), None);
        assert_eq!(parse_service_cost("NaN"), None);
    }

    #[test]
    fn test_parse_round_up() {
        assert_eq!(parse_round_up("true"), Ok(true));
        assert_eq!(parse_round_up("ON"), Ok(true));
        assert_eq!(parse_round_up("1"), Ok(true));
        assert_eq!(parse_round_up("no"), Ok(false));
        assert_eq!(parse_round_up(" off "), Ok(false));
        assert_eq!(
            parse_round_up("maybe"),
            Err(TipError::InvalidFlag("maybe".to_string()))
        );
    }
}
