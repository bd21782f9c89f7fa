use crate::domain::model::{FactorialValue, OverflowPolicy, WidthPolicy};
use crate::utils::error::{DemoError, Result};

/// Computes `n!` in the given accumulator width, wrapping silently on overflow.
///
/// `0!` is `1`. A negative `n` is rejected with [`DemoError::NegativeArgument`].
pub fn compute_factorial(n: i32, width: WidthPolicy) -> Result<FactorialValue> {
    compute_factorial_with(n, width, OverflowPolicy::Wrap)
}

/// Like [`compute_factorial`], with the overflow behaviour chosen by `overflow`.
pub fn compute_factorial_with(
    n: i32,
    width: WidthPolicy,
    overflow: OverflowPolicy,
) -> Result<FactorialValue> {
    if n < 0 {
        return Err(DemoError::NegativeArgument { n });
    }

    let value = match width {
        WidthPolicy::Narrow => narrow_product(n, overflow).map(FactorialValue::Narrow),
        WidthPolicy::Wide => wide_product(n as u64, overflow).map(FactorialValue::Wide),
    };

    match value {
        Some(value) => Ok(value),
        None => Err(DemoError::Overflow {
            operation: "factorial",
            argument: n,
            max_argument: width.max_exact_factorial(),
        }),
    }
}

// Once a wrapping product reaches zero it stays zero, so the loop can stop there.
fn narrow_product(n: i32, overflow: OverflowPolicy) -> Option<i32> {
    let mut acc: i32 = 1;
    for i in 1..=n {
        acc = match overflow {
            OverflowPolicy::Wrap => acc.wrapping_mul(i),
            OverflowPolicy::Checked => acc.checked_mul(i)?,
        };
        if acc == 0 {
            break;
        }
    }
    Some(acc)
}

fn wide_product(n: u64, overflow: OverflowPolicy) -> Option<u64> {
    let mut acc: u64 = 1;
    for i in 1..=n {
        acc = match overflow {
            OverflowPolicy::Wrap => acc.wrapping_mul(i),
            OverflowPolicy::Checked => acc.checked_mul(i)?,
        };
        if acc == 0 {
            break;
        }
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_factorial_is_one_for_both_widths() {
        assert_eq!(compute_factorial(0, WidthPolicy::Narrow).unwrap(), FactorialValue::Narrow(1));
        assert_eq!(compute_factorial(0, WidthPolicy::Wide).unwrap(), FactorialValue::Wide(1));
    }

    #[test]
    fn test_small_factorials() {
        assert_eq!(compute_factorial(1, WidthPolicy::Narrow).unwrap(), FactorialValue::Narrow(1));
        assert_eq!(compute_factorial(5, WidthPolicy::Narrow).unwrap(), FactorialValue::Narrow(120));
        assert_eq!(compute_factorial(5, WidthPolicy::Wide).unwrap(), FactorialValue::Wide(120));
        assert_eq!(
            compute_factorial(12, WidthPolicy::Narrow).unwrap(),
            FactorialValue::Narrow(479_001_600)
        );
    }

    #[test]
    fn test_twenty_factorial() {
        assert_eq!(
            compute_factorial(20, WidthPolicy::Wide).unwrap(),
            FactorialValue::Wide(2_432_902_008_176_640_000)
        );
        // 32-bit signed wraparound
        assert_eq!(
            compute_factorial(20, WidthPolicy::Narrow).unwrap(),
            FactorialValue::Narrow(-2_102_132_736)
        );
    }

    #[test]
    fn test_narrow_wraps_past_twelve() {
        assert_eq!(
            compute_factorial(13, WidthPolicy::Narrow).unwrap(),
            FactorialValue::Narrow(1_932_053_504)
        );
        assert_eq!(
            compute_factorial(17, WidthPolicy::Narrow).unwrap(),
            FactorialValue::Narrow(-288_522_240)
        );
    }

    #[test]
    fn test_wide_wraps_past_twenty() {
        assert_eq!(
            compute_factorial(21, WidthPolicy::Wide).unwrap(),
            FactorialValue::Wide(14_197_454_024_290_336_768)
        );
    }

    #[test]
    fn test_negative_argument_is_rejected() {
        for width in [WidthPolicy::Narrow, WidthPolicy::Wide] {
            let err = compute_factorial(-1, width).unwrap_err();
            assert!(matches!(err, DemoError::NegativeArgument { n: -1 }));
        }
        assert!(matches!(
            compute_factorial(i32::MIN, WidthPolicy::Wide),
            Err(DemoError::NegativeArgument { .. })
        ));
    }

    #[test]
    fn test_checked_reports_overflow() {
        assert_eq!(
            compute_factorial_with(12, WidthPolicy::Narrow, OverflowPolicy::Checked).unwrap(),
            FactorialValue::Narrow(479_001_600)
        );
        let err = compute_factorial_with(13, WidthPolicy::Narrow, OverflowPolicy::Checked)
            .unwrap_err();
        assert!(matches!(
            err,
            DemoError::Overflow {
                operation: "factorial",
                argument: 13,
                max_argument: 12
            }
        ));

        assert!(compute_factorial_with(20, WidthPolicy::Wide, OverflowPolicy::Checked).is_ok());
        assert!(matches!(
            compute_factorial_with(21, WidthPolicy::Wide, OverflowPolicy::Checked),
            Err(DemoError::Overflow { max_argument: 20, .. })
        ));
    }

    #[test]
    fn test_negative_wins_over_checked() {
        assert!(matches!(
            compute_factorial_with(-3, WidthPolicy::Narrow, OverflowPolicy::Checked),
            Err(DemoError::NegativeArgument { n: -3 })
        ));
    }

    #[test]
    fn test_huge_arguments_wrap_to_zero() {
        assert_eq!(compute_factorial(34, WidthPolicy::Narrow).unwrap(), FactorialValue::Narrow(0));
        assert_eq!(compute_factorial(i32::MAX, WidthPolicy::Narrow).unwrap(), FactorialValue::Narrow(0));
        assert_eq!(compute_factorial(66, WidthPolicy::Wide).unwrap(), FactorialValue::Wide(0));
        assert_eq!(compute_factorial(i32::MAX, WidthPolicy::Wide).unwrap(), FactorialValue::Wide(0));
    }

    #[test]
    fn test_repeated_calls_match() {
        let first = compute_factorial(15, WidthPolicy::Wide).unwrap();
        let second = compute_factorial(15, WidthPolicy::Wide).unwrap();
        assert_eq!(first, second);
    }
}
