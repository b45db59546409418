//! # Domain Types
//!
//! Core domain types used throughout Tip Time.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐              ┌──────────────────────────┐         │
//! │  │    TipTier      │              │        TipQuote          │         │
//! │  │  ─────────────  │              │  ──────────────────────  │         │
//! │  │  Ten     1000   │─────────────►│  service_cost (f64)      │         │
//! │  │  Fifteen 1500   │              │  tier                    │         │
//! │  │  Twenty  2000   │              │  round_up                │         │
//! │  │  (basis points) │              │  tip (f64)               │         │
//! │  └─────────────────┘              └──────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{TipError, TipResult};
use crate::BPS_PER_UNIT;

// =============================================================================
// Tip Tier
// =============================================================================

/// A discrete gratuity percentage offered to the user.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01%. Keeping the rate as an integer means
/// `cost * 2000 / 10000` is exact for whole-cent costs, whereas `cost * 0.2`
/// carries the binary error of `0.2` into the round-up step.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TipTier {
    /// 10% of the service cost.
    #[default]
    Ten,
    /// 15% of the service cost.
    Fifteen,
    /// 20% of the service cost.
    Twenty,
}

impl TipTier {
    /// Every tier, in ascending order.
    pub const ALL: [TipTier; 3] = [TipTier::Ten, TipTier::Fifteen, TipTier::Twenty];

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(self) -> u32 {
        match self {
            TipTier::Ten => 1000,
            TipTier::Fifteen => 1500,
            TipTier::Twenty => 2000,
        }
    }

    /// Returns the fractional rate (0.10, 0.15 or 0.20).
    #[inline]
    pub fn rate(self) -> f64 {
        self.bps() as f64 / BPS_PER_UNIT as f64
    }

    /// Returns the whole percentage (10, 15 or 20).
    #[inline]
    pub const fn percent(self) -> u32 {
        self.bps() / 100
    }

    /// Resolves an optional selected-option identifier to a tier.
    ///
    /// An absent or blank selection resolves to `default`; whoever calls this
    /// decides what "nothing selected" means. Anything else must name a tier.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::TipTier;
    ///
    /// assert_eq!(TipTier::from_selection(None, TipTier::Ten).unwrap(), TipTier::Ten);
    /// assert_eq!(
    ///     TipTier::from_selection(Some("twenty_percent_option"), TipTier::Ten).unwrap(),
    ///     TipTier::Twenty
    /// );
    /// assert!(TipTier::from_selection(Some("25"), TipTier::Ten).is_err());
    /// ```
    pub fn from_selection(selection: Option<&str>, default: TipTier) -> TipResult<TipTier> {
        match selection.map(str::trim) {
            None | Some("") => Ok(default),
            Some(id) => id.parse(),
        }
    }
}

impl FromStr for TipTier {
    type Err = TipError;

    /// Accepts `10`, `10%`, `ten`, `ten_percent` and `ten_percent_option`
    /// (likewise for fifteen and twenty), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        let id = id.strip_suffix("_option").unwrap_or(id.as_str());
        let id = id
            .strip_suffix("_percent")
            .or_else(|| id.strip_suffix('%'))
            .unwrap_or(id);

        match id {
            "10" | "ten" => Ok(TipTier::Ten),
            "15" | "fifteen" => Ok(TipTier::Fifteen),
            "20" | "twenty" => Ok(TipTier::Twenty),
            _ => Err(TipError::UnknownTier(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

// =============================================================================
// Tip Quote
// =============================================================================

/// The inputs and output of one successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipQuote {
    /// Pre-tip bill amount entered by the user.
    pub service_cost: f64,

    /// Tier the tip was computed with.
    pub tier: TipTier,

    /// Whether the tip was rounded up to a whole currency unit.
    pub round_up: bool,

    /// Final tip.
    pub tip: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rates() {
        assert_eq!(TipTier::Ten.rate(), 0.10);
        assert_eq!(TipTier::Fifteen.rate(), 0.15);
        assert_eq!(TipTier::Twenty.rate(), 0.20);
        assert_eq!(TipTier::Fifteen.percent(), 15);
    }

    #[test]
    fn test_tier_parse_identifiers() {
        assert_eq!("10".parse::<TipTier>().unwrap(), TipTier::Ten);
        assert_eq!("15%".parse::<TipTier>().unwrap(), TipTier::Fifteen);
        assert_eq!("Twenty".parse::<TipTier>().unwrap(), TipTier::Twenty);
        assert_eq!(
            "fifteen_percent_option".parse::<TipTier>().unwrap(),
            TipTier::Fifteen
        );
        assert_eq!("TEN_PERCENT".parse::<TipTier>().unwrap(), TipTier::Ten);
    }

    #[test]
    fn test_tier_parse_rejects_unknown() {
        assert_eq!(
            "25".parse::<TipTier>(),
            Err(TipError::UnknownTier("25".to_string()))
        );
        assert!("percent".parse::<TipTier>().is_err());
        assert!("_option".parse::<TipTier>().is_err());
    }

    #[test]
    fn test_from_selection_uses_explicit_default() {
        assert_eq!(
            TipTier::from_selection(None, TipTier::Fifteen).unwrap(),
            TipTier::Fifteen
        );
        assert_eq!(
            TipTier::from_selection(Some("  "), TipTier::Twenty).unwrap(),
            TipTier::Twenty
        );
        assert_eq!(
            TipTier::from_selection(Some("10"), TipTier::Twenty).unwrap(),
            TipTier::Ten
        );
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(TipTier::Ten.to_string(), "10%");
        assert_eq!(TipTier::Twenty.to_string(), "20%");
    }

    #[test]
    fn test_quote_serializes_snake_case_tier() {
        let quote = TipQuote {
            service_cost: 50.0,
            tier: TipTier::Twenty,
            round_up: false,
            tip: 10.0,
        };
        let json = serde_json::to_value(quote).unwrap();
        assert_eq!(json["tier"], "twenty");
        assert_eq!(json["tip"], 10.0);
    }
}
