pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::prompt::Prompter;
pub use crate::adapters::report::{reporter_for, CsvReporter, JsonReporter, TextReporter};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::engine::{DemoEngine, DemoOutcome};
pub use crate::core::factorial::{compute_factorial, compute_factorial_with};
pub use crate::core::fibonacci::{
    fibonacci_terms, fibonacci_terms_with, produce_fibonacci, produce_fibonacci_with, FibonacciSeq,
};
pub use crate::domain::model::{
    DemoRequest, FactorialValue, OutputFormat, OverflowPolicy, WidthMode, WidthPolicy,
    NARROW_WIDTH_THRESHOLD,
};
pub use crate::utils::error::{DemoError, Result};
