//! Named configuration for the quiz and the popup spawner.
//!
//! Defaults are the fixed constants the quiz has always shipped with. Overrides are
//! collected in a [`ChaosConfigDraft`] and validated in one place.

use std::time::Duration;

use thiserror::Error;

use crate::model::Language;

pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u64 = 20_000;
pub const DEFAULT_INACTIVITY_CHECK_MS: u64 = 1_000;
pub const DEFAULT_MAX_POPUPS: usize = 8;
pub const DEFAULT_SPAWN_PERIOD_MS: u64 = 800;
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.7;
pub const DEFAULT_FLOATING_PROBABILITY: f64 = 0.5;
pub const DEFAULT_POPUP_SIZE: f64 = 200.0;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("inactivity timeout must be > 0 ms")]
    InvalidInactivityTimeout,

    #[error("inactivity check period must be > 0 ms")]
    InvalidInactivityCheck,

    #[error("max popups must be > 0")]
    InvalidMaxPopups,

    #[error("spawn period must be > 0 ms")]
    InvalidSpawnPeriod,

    #[error("{name} probability must be in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("popup size must be a finite, non-negative number, got {0}")]
    InvalidPopupSize(f64),
}

/// Settings of the quiz engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    inactivity_timeout_ms: u64,
    inactivity_check_ms: u64,
    default_language: Language,
}

impl QuizSettings {
    /// Milliseconds without activity before a running session resets.
    #[must_use]
    pub fn inactivity_timeout_ms(&self) -> u64 {
        self.inactivity_timeout_ms
    }

    #[must_use]
    pub fn inactivity_check_period(&self) -> Duration {
        Duration::from_millis(self.inactivity_check_ms)
    }

    #[must_use]
    pub fn default_language(&self) -> Language {
        self.default_language
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            inactivity_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT_MS,
            inactivity_check_ms: DEFAULT_INACTIVITY_CHECK_MS,
            default_language: Language::default(),
        }
    }
}

/// Settings of the popup spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSettings {
    max_popups: usize,
    spawn_period_ms: u64,
    spawn_probability: f64,
    floating_probability: f64,
    popup_size: f64,
}

impl SpawnSettings {
    /// Upper bound on concurrently live popups.
    #[must_use]
    pub fn max_popups(&self) -> usize {
        self.max_popups
    }

    #[must_use]
    pub fn spawn_period(&self) -> Duration {
        Duration::from_millis(self.spawn_period_ms)
    }

    /// Chance that a spawn tick actually creates a popup.
    #[must_use]
    pub fn spawn_probability(&self) -> f64 {
        self.spawn_probability
    }

    #[must_use]
    pub fn floating_probability(&self) -> f64 {
        self.floating_probability
    }

    /// Edge length reserved for a popup when picking its position.
    #[must_use]
    pub fn popup_size(&self) -> f64 {
        self.popup_size
    }
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            max_popups: DEFAULT_MAX_POPUPS,
            spawn_period_ms: DEFAULT_SPAWN_PERIOD_MS,
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            floating_probability: DEFAULT_FLOATING_PROBABILITY,
            popup_size: DEFAULT_POPUP_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChaosConfig {
    pub quiz: QuizSettings,
    pub spawn: SpawnSettings,
}

/// Unvalidated overrides; `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChaosConfigDraft {
    pub default_language: Option<Language>,
    pub inactivity_timeout_ms: Option<u64>,
    pub inactivity_check_ms: Option<u64>,
    pub max_popups: Option<usize>,
    pub spawn_period_ms: Option<u64>,
    pub spawn_probability: Option<f64>,
    pub floating_probability: Option<f64>,
    pub popup_size: Option<f64>,
}

impl ChaosConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the overrides and merge them over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for zero periods or limits, probabilities outside
    /// `[0, 1]` and negative or non-finite popup sizes.
    pub fn validate(self) -> Result<ChaosConfig, ConfigError> {
        let quiz_defaults = QuizSettings::default();
        let spawn_defaults = SpawnSettings::default();

        let inactivity_timeout_ms = self
            .inactivity_timeout_ms
            .unwrap_or(quiz_defaults.inactivity_timeout_ms);
        if inactivity_timeout_ms == 0 {
            return Err(ConfigError::InvalidInactivityTimeout);
        }
        let inactivity_check_ms = self
            .inactivity_check_ms
            .unwrap_or(quiz_defaults.inactivity_check_ms);
        if inactivity_check_ms == 0 {
            return Err(ConfigError::InvalidInactivityCheck);
        }

        let max_popups = self.max_popups.unwrap_or(spawn_defaults.max_popups);
        if max_popups == 0 {
            return Err(ConfigError::InvalidMaxPopups);
        }
        let spawn_period_ms = self.spawn_period_ms.unwrap_or(spawn_defaults.spawn_period_ms);
        if spawn_period_ms == 0 {
            return Err(ConfigError::InvalidSpawnPeriod);
        }
        let spawn_probability = probability(
            "spawn",
            self.spawn_probability
                .unwrap_or(spawn_defaults.spawn_probability),
        )?;
        let floating_probability = probability(
            "floating",
            self.floating_probability
                .unwrap_or(spawn_defaults.floating_probability),
        )?;
        let popup_size = self.popup_size.unwrap_or(spawn_defaults.popup_size);
        if !popup_size.is_finite() || popup_size < 0.0 {
            return Err(ConfigError::InvalidPopupSize(popup_size));
        }

        Ok(ChaosConfig {
            quiz: QuizSettings {
                inactivity_timeout_ms,
                inactivity_check_ms,
                default_language: self
                    .default_language
                    .unwrap_or(quiz_defaults.default_language),
            },
            spawn: SpawnSettings {
                max_popups,
                spawn_period_ms,
                spawn_probability,
                floating_probability,
                popup_size,
            },
        })
    }
}

fn probability(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
