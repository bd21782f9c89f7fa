#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use numeric_demo::utils::validation::Validate;
use numeric_demo::{
    CliConfig, DemoEngine, DemoError, DemoRequest, FactorialValue, OutputFormat, Settings,
    TextReporter, TomlConfig, WidthMode, WidthPolicy,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", content)?;
    Ok(file)
}

#[test]
fn test_toml_threshold_changes_width_selection() -> Result<()> {
    let file = write_config("[factorial]\nnarrow_threshold = 4\n")?;
    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    let mut engine = DemoEngine::new(Settings::from(&config), TextReporter::new(Vec::new()));
    let outcome = engine.run(DemoRequest { n: 5, count: 1 })?;

    let factorial = outcome.factorial?;
    assert_eq!(factorial.width, WidthPolicy::Wide);
    assert_eq!(factorial.value, FactorialValue::Wide(120));
    Ok(())
}

#[test]
fn test_cli_flags_override_config_file() -> Result<()> {
    let file = write_config(
        "[factorial]\nwidth = \"narrow\"\n\n[output]\nformat = \"json\"\n",
    )?;
    let path = file.path().to_string_lossy().to_string();

    let cli = CliConfig::try_parse_from(["numeric-demo", "--config", &path, "--format", "csv"])?;
    cli.validate()?;
    let settings = cli.resolve_settings()?;

    assert_eq!(settings.width_mode, WidthMode::Narrow);
    assert_eq!(settings.output_format, OutputFormat::Csv);
    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> Result<()> {
    let file = write_config("[factorial]\nnarrow_threshold = 99\n")?;
    let path = file.path().to_string_lossy().to_string();

    let cli = CliConfig::try_parse_from(["numeric-demo", "--config", &path])?;
    let err = cli.resolve_settings().unwrap_err();
    assert!(matches!(err, DemoError::InvalidConfigValueError { .. }));
    assert_eq!(err.severity(), numeric_demo::utils::error::ErrorSeverity::Critical);
    Ok(())
}

#[test]
fn test_malformed_config_file_is_rejected() -> Result<()> {
    let file = write_config("[factorial\nwidth = ")?;
    let err = TomlConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, DemoError::ConfigValidationError { .. }));
    Ok(())
}
