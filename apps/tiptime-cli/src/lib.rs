//! # Tip Time CLI
//!
//! Terminal stand-in for the app's single screen: reads the service cost,
//! tier selection and round-up toggle, and prints the formatted tip.
//!
//! - [`cli`] - Argument definitions and command dispatch
//! - [`config`] - Layered configuration (defaults, file, environment)
//! - [`display`] - Currency formatting and the result template
//! - [`screen`] - Display state that only changes on a successful calculation
//! - [`error`] - CLI error types

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod screen;

pub use crate::config::TipConfig;
pub use crate::error::{ConfigError, ScreenError};
pub use crate::screen::TipScreen;
