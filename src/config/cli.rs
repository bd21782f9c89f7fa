use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::{OutputFormat, OverflowPolicy, WidthMode, MAX_EXACT_WIDE_FACTORIAL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "numeric-demo")]
#[command(about = "Compute a factorial and print a Fibonacci sequence")]
pub struct CliConfig {
    /// Factorial argument; prompted for when omitted
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub number: Option<i32>,

    /// Number of Fibonacci terms; prompted for when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i32>,

    /// Accumulator width for the factorial
    #[arg(long, value_enum)]
    pub width: Option<WidthMode>,

    /// Largest argument that uses the narrow accumulator in auto mode
    #[arg(long)]
    pub narrow_threshold: Option<i32>,

    /// Overflow handling for both operations
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file when one was given, then layers the flags on top.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::from(&file)
            }
            None => Settings::default(),
        };

        if let Some(width) = self.width {
            settings.width_mode = width;
        }
        if let Some(threshold) = self.narrow_threshold {
            settings.narrow_threshold = threshold;
        }
        if let Some(overflow) = self.overflow {
            settings.factorial_overflow = overflow;
            settings.fibonacci_overflow = overflow;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }

        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(threshold) = self.narrow_threshold {
            validate_range("narrow_threshold", threshold, 0, MAX_EXACT_WIDE_FACTORIAL)?;
        }
        Ok(())
    }
}
