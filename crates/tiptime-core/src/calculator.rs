//! # Calculator Module
//!
//! The one piece of business logic in Tip Time.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  service_cost ──► present? finite? >= 0? ──no──► TipError::InvalidInput │
//! │                          │                                              │
//! │                         yes                                             │
//! │                          ▼                                              │
//! │              tip = cost × tier.bps / 10000                              │
//! │                          │                                              │
//! │                round_up? ├──yes──► ceil(tip)                            │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                        tip                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{TipError, TipResult};
use crate::types::{TipQuote, TipTier};
use crate::BPS_PER_UNIT;

/// Stateless tip calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipCalculator;

impl TipCalculator {
    /// Computes the tip for a service cost.
    ///
    /// ## Arguments
    /// * `service_cost` - Bill amount, `None` when the raw input was unparsable
    /// * `tier` - Selected percentage tier
    /// * `round_up` - Round the tip up to the next whole currency unit
    ///
    /// ## Errors
    /// [`TipError::InvalidInput`] when the cost is absent, not finite or
    /// negative. No computation happens in that case.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::{TipCalculator, TipError, TipTier};
    ///
    /// assert_eq!(TipCalculator::compute(Some(50.0), TipTier::Twenty, false), Ok(10.0));
    /// assert_eq!(TipCalculator::compute(Some(33.33), TipTier::Fifteen, true), Ok(5.0));
    /// assert!(matches!(
    ///     TipCalculator::compute(None, TipTier::Ten, false),
    ///     Err(TipError::InvalidInput { .. })
    /// ));
    /// ```
    pub fn compute(service_cost: Option<f64>, tier: TipTier, round_up: bool) -> TipResult<f64> {
        let cost = service_cost
            .ok_or_else(|| TipError::invalid_input("service cost is missing or not a number"))?;

        if !cost.is_finite() {
            return Err(TipError::invalid_input(format!(
                "service cost must be a finite number, got {cost}"
            )));
        }
        if cost < 0.0 {
            return Err(TipError::invalid_input(format!(
                "service cost must not be negative, got {cost}"
            )));
        }
        // -0.0 passes the sign check above
        let cost = cost.abs();

        let scaled = cost * f64::from(tier.bps());
        let tip = if scaled.is_finite() {
            scaled / f64::from(BPS_PER_UNIT)
        } else {
            cost * tier.rate()
        };

        let tip = if round_up { tip.ceil() } else { tip };

        debug!(cost, %tier, round_up, tip, "Computed tip");
        Ok(tip)
    }

    /// Same as [`TipCalculator::compute`], but returns the inputs alongside
    /// the tip.
    pub fn quote(service_cost: Option<f64>, tier: TipTier, round_up: bool) -> TipResult<TipQuote> {
        let tip = Self::compute(service_cost, tier, round_up)?;

        Ok(TipQuote {
            service_cost: service_cost.unwrap_or_default().abs(),
            tier,
            round_up,
            tip,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
