//! # tiptime-core: Pure Business Logic for Tip Time
//!
//! This crate is the **heart** of Tip Time. It turns a service cost, a tip
//! tier and a round-up preference into a tip amount, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Time Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Input collaborator (tiptime-cli)                │   │
//! │  │      cost text ──► tier selection ──► round-up toggle           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiptime-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │   input   │  │ calculator │  │   money   │ │   │
//! │  │   │  TipTier  │  │  parsing  │  │  compute   │  │   Money   │ │   │
//! │  │   │  TipQuote │  │           │  │            │  │           │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Display collaborator (tiptime-cli)                 │   │
//! │  │         currency formatting + "Tip Amount: %s" template         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TipTier, TipQuote)
//! - [`calculator`] - The tip computation itself
//! - [`input`] - Parsing raw text coming from the input collaborator
//! - [`money`] - Integer minor-unit amounts for display
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tiptime_core::{TipCalculator, TipTier};
//!
//! let tip = TipCalculator::compute(Some(33.33), TipTier::Fifteen, true).unwrap();
//! assert_eq!(tip, 5.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod input;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::TipCalculator;
pub use error::{TipError, TipResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basis points in one whole (100%).
pub const BPS_PER_UNIT: u32 = 10_000;
