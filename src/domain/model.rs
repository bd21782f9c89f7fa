use crate::core::fibonacci::FibonacciSeq;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest argument routed to the narrow accumulator when the width is chosen automatically.
///
/// This is a fixed configuration constant. It happens to match the largest exact
/// narrow factorial, but it is not derived from it.
pub const NARROW_WIDTH_THRESHOLD: i32 = 12;

/// Largest `n` whose factorial fits an `i32`.
pub const MAX_EXACT_NARROW_FACTORIAL: i32 = 12;

/// Largest `n` whose factorial fits a `u64`.
pub const MAX_EXACT_WIDE_FACTORIAL: i32 = 20;

/// Number of leading Fibonacci terms that fit an `i32` (term 0 through term 46).
pub const MAX_EXACT_FIBONACCI_TERMS: i32 = 47;

/// Fixed-width accumulator used for a factorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthPolicy {
    /// 32-bit signed.
    Narrow,
    /// 64-bit unsigned.
    Wide,
}

impl WidthPolicy {
    pub fn for_argument(n: i32, threshold: i32) -> Self {
        if n <= threshold {
            WidthPolicy::Narrow
        } else {
            WidthPolicy::Wide
        }
    }

    pub fn max_exact_factorial(self) -> i32 {
        match self {
            WidthPolicy::Narrow => MAX_EXACT_NARROW_FACTORIAL,
            WidthPolicy::Wide => MAX_EXACT_WIDE_FACTORIAL,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            WidthPolicy::Narrow => "32-bit signed",
            WidthPolicy::Wide => "64-bit unsigned",
        }
    }
}

impl fmt::Display for WidthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthPolicy::Narrow => write!(f, "narrow"),
            WidthPolicy::Wide => write!(f, "wide"),
        }
    }
}

/// How the width for a factorial is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    #[default]
    Auto,
    Narrow,
    Wide,
}

impl WidthMode {
    pub fn resolve(self, n: i32, threshold: i32) -> WidthPolicy {
        match self {
            WidthMode::Auto => WidthPolicy::for_argument(n, threshold),
            WidthMode::Narrow => WidthPolicy::Narrow,
            WidthMode::Wide => WidthPolicy::Wide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, silently.
    #[default]
    Wrap,
    /// Report `DemoError::Overflow` instead of a wrapped value.
    Checked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactorialValue {
    Narrow(i32),
    Wide(u64),
}

impl FactorialValue {
    pub fn width(&self) -> WidthPolicy {
        match self {
            FactorialValue::Narrow(_) => WidthPolicy::Narrow,
            FactorialValue::Wide(_) => WidthPolicy::Wide,
        }
    }
}

impl fmt::Display for FactorialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorialValue::Narrow(v) => write!(f, "{}", v),
            FactorialValue::Wide(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorialOutcome {
    pub n: i32,
    pub width: WidthPolicy,
    pub value: FactorialValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FibonacciOutcome {
    pub count: i32,
    /// Produced on demand; iterate a clone to read the terms.
    pub terms: FibonacciSeq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoRequest {
    pub n: i32,
    pub count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_for_argument_uses_threshold() {
        assert_eq!(WidthPolicy::for_argument(0, NARROW_WIDTH_THRESHOLD), WidthPolicy::Narrow);
        assert_eq!(WidthPolicy::for_argument(12, NARROW_WIDTH_THRESHOLD), WidthPolicy::Narrow);
        assert_eq!(WidthPolicy::for_argument(13, NARROW_WIDTH_THRESHOLD), WidthPolicy::Wide);
        assert_eq!(WidthPolicy::for_argument(-4, NARROW_WIDTH_THRESHOLD), WidthPolicy::Narrow);
        assert_eq!(WidthPolicy::for_argument(6, 5), WidthPolicy::Wide);
    }

    #[test]
    fn test_width_mode_resolve() {
        assert_eq!(WidthMode::Auto.resolve(20, 12), WidthPolicy::Wide);
        assert_eq!(WidthMode::Narrow.resolve(20, 12), WidthPolicy::Narrow);
        assert_eq!(WidthMode::Wide.resolve(3, 12), WidthPolicy::Wide);
    }

    #[test]
    fn test_factorial_value_serializes_as_plain_number() {
        let outcome = FactorialOutcome {
            n: 5,
            width: WidthPolicy::Narrow,
            value: FactorialValue::Narrow(120),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"n": 5, "width": "narrow", "value": 120}));
    }

    #[test]
    fn test_policies_deserialize_lowercase() {
        let mode: WidthMode = serde_json::from_str("\"wide\"").unwrap();
        assert_eq!(mode, WidthMode::Wide);
        let overflow: OverflowPolicy = serde_json::from_str("\"checked\"").unwrap();
        assert_eq!(overflow, OverflowPolicy::Checked);
        let format: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(format, OutputFormat::Csv);
    }
}
