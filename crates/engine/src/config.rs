//! Configuration system for the register-machine interpreter.
//!
//! This module defines the configuration structure used to parameterize a
//! [`Machine`](crate::core::executor::Machine). It provides:
//! 1. **Defaults:** Baseline machine constants (the command budget).
//! 2. **Structures:** The root `Config` type, deserializable from JSON for
//!    embedding hosts; use `Config::default()` otherwise.
//!
//! The command budget is the only tunable: the machine has no other resource
//! or time limit, so the budget is the sole guard against runaway loops.

use serde::Deserialize;

/// Default configuration constants for the interpreter.
///
/// These values define the baseline machine when not explicitly overridden.
mod defaults {
    /// Maximum number of executed commands per run (10,000).
    ///
    /// Reaching the budget forces immediate termination even mid-program.
    /// Comment lines do not count toward the budget.
    pub const COMMAND_BUDGET: u64 = 10_000;
}

/// Root configuration structure for the machine.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use regsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.command_budget, 10_000);
/// ```
///
/// Deserializing from JSON (typical embedding-host usage):
///
/// ```
/// use regsim_core::config::Config;
///
/// let json = r#"{ "command_budget": 50 }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.command_budget, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of executed commands before the run is forcibly halted.
    ///
    /// Lower values let tests exercise the resource-exceeded path quickly;
    /// the default matches the fixed 10,000-instruction ceiling.
    pub command_budget: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_budget: defaults::COMMAND_BUDGET,
        }
    }
}
