use std::time::Duration;

use tracing::warn;

use crate::engine::{EngineError, SimulationPolicy};
use crate::matches::CleanupConfig;

/// Timing and policy for one match engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Real time per simulated minute
    pub minute_period: Duration,
    /// Bounds of the random delay between general commentary lines
    pub commentary_delay_min: Duration,
    pub commentary_delay_max: Duration,
    pub half_time_minute: u32,
    /// The match ends automatically when the clock reaches this minute
    pub full_time_minute: u32,
    /// Fixed seed for reproducible matches
    pub seed: Option<u64>,
    pub policy: SimulationPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minute_period: Duration::from_secs(3),
            commentary_delay_min: Duration::from_secs(5),
            commentary_delay_max: Duration::from_secs(15),
            half_time_minute: 45,
            full_time_minute: 90,
            seed: None,
            policy: SimulationPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_minute_period(mut self, period: Duration) -> Self {
        self.minute_period = period;
        self
    }

    pub fn with_commentary_delay(mut self, min: Duration, max: Duration) -> Self {
        self.commentary_delay_min = min;
        self.commentary_delay_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: SimulationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.minute_period.is_zero() {
            return Err(EngineError::InvalidConfig(
                "Minute period must be non-zero".to_string(),
            ));
        }

        if self.commentary_delay_min.is_zero()
            || self.commentary_delay_min > self.commentary_delay_max
        {
            return Err(EngineError::InvalidConfig(format!(
                "Invalid commentary delay range {:?}..={:?}",
                self.commentary_delay_min, self.commentary_delay_max
            )));
        }

        if self.full_time_minute == 0 || self.half_time_minute >= self.full_time_minute {
            return Err(EngineError::InvalidConfig(format!(
                "Half-time minute {} must fall before full-time minute {}",
                self.half_time_minute, self.full_time_minute
            )));
        }

        if !self.policy.is_valid() {
            return Err(EngineError::InvalidConfig(
                "Simulation policy probabilities out of range".to_string(),
            ));
        }

        Ok(())
    }
}

/// Process-level settings for the server binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Postgres connection string; matches are kept in memory when absent
    pub database_url: Option<String>,
    pub engine: EngineConfig,
    pub cleanup: CleanupConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            database_url: None,
            engine: EngineConfig::default(),
            cleanup: CleanupConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `DATABASE_URL`, `MATCH_MINUTE_MS` and
    /// `PAUSED_MATCH_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(bind_addr) = lookup("BIND_ADDR") {
            config.bind_addr = bind_addr;
        }

        config.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(raw) = lookup("MATCH_MINUTE_MS") {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => {
                    config.engine.minute_period = Duration::from_millis(ms);
                }
                _ => {
                    warn!(value = %raw, "Ignoring invalid MATCH_MINUTE_MS");
                }
            }
        }

        if let Some(raw) = lookup("PAUSED_MATCH_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config.cleanup.paused_threshold = Duration::from_secs(secs);
                }
                _ => {
                    warn!(value = %raw, "Ignoring invalid PAUSED_MATCH_TIMEOUT_SECS");
                }
            }
        }

        config
    }
}
