//! # Money Module
//!
//! Provides the `Money` type used at the display boundary.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  The tip itself is a real number (4.9995 stays 4.9995 until someone    │
//! │  asks to round it up). Before it is shown to a person it is converted  │
//! │  ONCE, through a base-10 Decimal, to whole minor units (cents, paise). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiptime_core::money::Money;
//!
//! let tip = Money::from_amount(4.9995).unwrap();
//! assert_eq!(tip.cents(), 500);
//! assert_eq!((tip.major(), tip.minor_part()), (5, 0));
//! ```

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents, paise, pence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Minor units per major unit.
    pub const MINOR_PER_MAJOR: i64 = 100;

    /// Decimal digits of the minor unit.
    pub const MINOR_DIGITS: u32 = 2;

    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a real amount in major units to the nearest minor unit.
    ///
    /// Halves round away from zero (`0.005` → 1 cent). Returns `None` for
    /// NaN, infinities, and amounts outside the `i64` cent range.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(10.0).unwrap().cents(), 1000);
    /// assert_eq!(Money::from_amount(1.005).unwrap().cents(), 101);
    /// assert!(Money::from_amount(f64::NAN).is_none());
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        // Shortest round-trip text, so 1.005 is rounded as written rather
        // than as 1.00499999999999989...
        let decimal = Decimal::from_str(&amount.to_string()).ok()?;
        let rounded =
            decimal.round_dp_with_strategy(Self::MINOR_DIGITS, RoundingStrategy::MidpointAwayFromZero);

        rounded
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / Self::MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % Self::MINOR_PER_MAJOR).abs()
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
