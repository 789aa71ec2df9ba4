//! Runtime configuration structures and loaders.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::types::RENDER_TICK_MS;

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaseConfig {
    /// Spawn seed. `None` derives one from the clock.
    pub seed: Option<u32>,
    /// Append a JSON line per turn to this file.
    pub turn_log_path: Option<PathBuf>,
    /// Directory for `chase.log`. `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
    /// Install an OS Ctrl-C handler in addition to the raw-mode key.
    pub handle_signals: bool,
    pub render_tick: Duration,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            turn_log_path: None,
            log_dir: None,
            handle_signals: true,
            render_tick: Duration::from_millis(RENDER_TICK_MS),
        }
    }
}

impl ChaseConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CHASE_SEED` - Spawn seed (default: clock-derived)
    /// - `CHASE_TURN_LOG_PATH` - JSON-lines turn log (default: disabled)
    /// - `CHASE_LOG_DIR` - Directory for `chase.log` (default: platform cache dir)
    /// - `CHASE_DISABLE_SIGNAL` - Set to "1" or "true" to skip the OS Ctrl-C handler
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ChaseConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = parse_var(&lookup, "CHASE_SEED");
        config.turn_log_path = path_var(&lookup, "CHASE_TURN_LOG_PATH");
        config.log_dir = path_var(&lookup, "CHASE_LOG_DIR");

        if let Some(v) = lookup("CHASE_DISABLE_SIGNAL") {
            let v = v.trim();
            if v == "1" || v.eq_ignore_ascii_case("true") {
                config.handle_signals = false;
            }
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn path_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
}
