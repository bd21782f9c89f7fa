#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, OverflowPolicy, WidthMode, NARROW_WIDTH_THRESHOLD};
use serde::{Deserialize, Serialize};
use self::toml_config::TomlConfig;

/// Fully resolved settings: defaults, then the TOML file, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub width_mode: WidthMode,
    pub narrow_threshold: i32,
    pub factorial_overflow: OverflowPolicy,
    pub fibonacci_overflow: OverflowPolicy,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width_mode: WidthMode::Auto,
            narrow_threshold: NARROW_WIDTH_THRESHOLD,
            factorial_overflow: OverflowPolicy::Wrap,
            fibonacci_overflow: OverflowPolicy::Wrap,
            output_format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn apply_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(width) = config.factorial.width {
            self.width_mode = width;
        }
        if let Some(threshold) = config.factorial.narrow_threshold {
            self.narrow_threshold = threshold;
        }
        if let Some(overflow) = config.factorial.overflow {
            self.factorial_overflow = overflow;
        }
        if let Some(overflow) = config.fibonacci.overflow {
            self.fibonacci_overflow = overflow;
        }
        if let Some(format) = config.output.format {
            self.output_format = format;
        }
        self
    }
}

impl From<&TomlConfig> for Settings {
    fn from(config: &TomlConfig) -> Self {
        Settings::default().apply_toml(config)
    }
}

impl ConfigProvider for Settings {
    fn width_mode(&self) -> WidthMode {
        self.width_mode
    }

    fn narrow_threshold(&self) -> i32 {
        self.narrow_threshold
    }

    fn factorial_overflow(&self) -> OverflowPolicy {
        self.factorial_overflow
    }

    fn fibonacci_overflow(&self) -> OverflowPolicy {
        self.fibonacci_overflow
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}
