//! [`Config`]-related definitions.

use common::Day;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::rule::NumNights;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visible calendar window configuration.
    pub window: Window,

    /// Engine configuration.
    pub engine: Engine,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Visible calendar window configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Window {
    /// First visible day.
    #[default(Day::today())]
    pub first: Day,

    /// Number of visible days.
    #[default(14)]
    pub num_days: u16,
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Engine {
    /// Width of a single day cell, in pixels.
    #[default(48.0)]
    pub cell_width_px: f64,

    /// Minimum rendered width of a visible segment, in pixels.
    #[default(20.0)]
    pub min_segment_px: f64,

    /// Minimum stay (in nights) assumed when no rule constrains it.
    #[default(1)]
    pub default_min_stay: u16,
}

impl From<Engine> for service::Config {
    fn from(value: Engine) -> Self {
        let Engine {
            cell_width_px,
            min_segment_px,
            default_min_stay,
        } = value;
        Self {
            calendar: service::calendar::Config {
                cell_width_px,
                min_segment_px,
            },
            pricing: service::pricing::Config {
                default_min_stay: NumNights::new(default_min_stay)
                    .unwrap_or(NumNights::MIN),
            },
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
