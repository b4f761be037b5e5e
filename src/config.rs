use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{InterestInferencer, Matcher, StopWordSet};
use crate::models::{ScoringWeights, TravelPolicy};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_interest_threshold")]
    pub interest_threshold: f64,
    /// Only rank requests open on this date
    #[serde(default)]
    pub open_on: Option<NaiveDate>,
    /// Extra stop words added to the English list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            interest_threshold: default_interest_threshold(),
            open_on: None,
            extra_stop_words: Vec::new(),
        }
    }
}

fn default_top_k() -> usize { crate::core::DEFAULT_TOP_K }
fn default_interest_threshold() -> f64 { crate::core::DEFAULT_INTEREST_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub travel: TravelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_travel_weight")]
    pub travel: f64,
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            travel: default_travel_weight(),
            interest: default_interest_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 40.0 }
fn default_travel_weight() -> f64 { 20.0 }
fn default_interest_weight() -> f64 { 20.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct TravelConfig {
    #[serde(default = "default_short_minutes")]
    pub short_minutes: u32,
    #[serde(default = "default_long_minutes")]
    pub long_minutes: u32,
    #[serde(default = "default_near_flat")]
    pub near_flat: f64,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            short_minutes: default_short_minutes(),
            long_minutes: default_long_minutes(),
            near_flat: default_near_flat(),
        }
    }
}

fn default_short_minutes() -> u32 { 10 }
fn default_long_minutes() -> u32 { 120 }
fn default_near_flat() -> f64 { 4.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VMATCH__MATCHING__TOP_K -> matching.top_k
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            skill: self.scoring.weights.skill,
            travel: self.scoring.weights.travel,
            interest: self.scoring.weights.interest,
        }
    }

    pub fn travel_policy(&self) -> TravelPolicy {
        TravelPolicy {
            short_minutes: self.scoring.travel.short_minutes,
            long_minutes: self.scoring.travel.long_minutes,
            near_flat: self.scoring.travel.near_flat,
        }
    }

    /// English stop words plus any configured extras
    pub fn stop_words(&self) -> StopWordSet {
        let mut words = StopWordSet::english();
        words.extend(self.matching.extra_stop_words.iter().cloned());
        words
    }

    /// Build a matcher from the configured weights and thresholds
    pub fn matcher(&self) -> Matcher {
        let inferencer =
            InterestInferencer::new(self.matching.interest_threshold, Arc::new(self.stop_words()));
        Matcher::new(
            self.scoring_weights(),
            self.travel_policy(),
            inferencer,
            self.matching.top_k,
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix("VMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
