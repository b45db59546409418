//! # Tip Screen
//!
//! The single screen of the app: a cost field, three tier options, a
//! round-up toggle and a result line.
//!
//! ## Calculate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  raw cost ──► parse_service_cost ──┐                                    │
//! │  selection ─► TipTier::from_selection ──► TipCalculator::compute        │
//! │  round-up ─────────────────────────┘              │                     │
//! │                                          ok ──────┴────── err           │
//! │                                           │                 │           │
//! │                              format + template      display untouched  │
//! │                                           │                             │
//! │                                  replace display text                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tiptime_core::input::{parse_round_up, parse_service_cost};
use tiptime_core::{TipCalculator, TipQuote, TipTier};
use tracing::{debug, warn};

use crate::config::TipConfig;
use crate::error::ScreenError;

/// Display state of the tip screen.
#[derive(Debug, Clone)]
pub struct TipScreen {
    config: TipConfig,
    display: String,
}

impl TipScreen {
    /// Creates a screen with an empty result line.
    pub fn new(config: TipConfig) -> Self {
        TipScreen {
            config,
            display: String::new(),
        }
    }

    /// Current result line (empty until the first successful calculation).
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Configuration the screen renders with.
    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    /// Reads the three inputs, updates the result line and returns the
    /// quote behind it.
    ///
    /// On any error the result line keeps its previous text.
    pub fn calculate(
        &mut self,
        raw_cost: &str,
        selection: Option<&str>,
        round_up: bool,
    ) -> Result<TipQuote, ScreenError> {
        let tier = TipTier::from_selection(selection, self.config.default_tier)?;
        let quote = TipCalculator::quote(parse_service_cost(raw_cost), tier, round_up)?;

        let amount = self
            .config
            .currency
            .format_amount(quote.tip)
            .ok_or(ScreenError::Unrepresentable(quote.tip))?;

        self.display = self.config.template.render(&amount);
        debug!(display = %self.display, "Result updated");

        Ok(quote)
    }

    /// Handles one line of interactive input: `<cost> [tier] [round-up]`.
    ///
    /// A missing tier uses the configured default; a missing round-up flag
    /// uses the configured toggle state.
    pub fn calculate_line(&mut self, line: &str) -> Result<TipQuote, ScreenError> {
        let mut fields = line.split_whitespace();
        let raw_cost = fields.next().unwrap_or_default();
        let selection = fields.next();
        let round_up = match fields.next() {
            Some(flag) => parse_round_up(flag)?,
            None => self.config.round_up,
        };
        if fields.next().is_some() {
            warn!(line, "Extra values on input line");
            return Err(ScreenError::TooManyFields);
        }

        self.calculate(raw_cost, selection, round_up)
    }
}
