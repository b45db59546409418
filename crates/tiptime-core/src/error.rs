//! # Error Types
//!
//! Domain-specific error types for tiptime-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  raw text ──► input::parse_* ──► TipError ──► screen keeps old display  │
//! │                                       │                                 │
//! │                                       └──► CLI prints to stderr, exit 1 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Tip Error
// =============================================================================

/// Errors produced while reading inputs or computing a tip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TipError {
    /// The service cost is absent, not a number, not finite, or negative.
    ///
    /// ## When This Occurs
    /// - Cost field left empty
    /// - Cost field contains text such as `"abc"`
    /// - Cost is `-5` or `inf`
    ///
    /// No computation is performed and no result is produced.
    #[error("Invalid service cost: {reason}")]
    InvalidInput { reason: String },

    /// The selected tier identifier does not name one of the three tiers.
    #[error("Unknown tip tier: '{0}' (expected 10, 15 or 20)")]
    UnknownTier(String),

    /// The round-up toggle text is not a recognised boolean.
    #[error("Invalid round-up flag: '{0}'")]
    InvalidFlag(String),
}

impl TipError {
    /// Shorthand for [`TipError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        TipError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with TipError.
pub type TipResult<T> = Result<T, TipError>;

// =============================================================================
// Unit Tests
// =============================================================================
