use crate::domain::model::{
    FactorialOutcome, FibonacciOutcome, OutputFormat, OverflowPolicy, WidthMode,
};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn width_mode(&self) -> WidthMode;
    fn narrow_threshold(&self) -> i32;
    fn factorial_overflow(&self) -> OverflowPolicy;
    fn fibonacci_overflow(&self) -> OverflowPolicy;
    fn output_format(&self) -> OutputFormat;
}

/// Presentation sink for computed results. Domain errors arrive as the `Err` side
/// of the outcome; the returned `Result` only fails when writing fails.
pub trait Reporter {
    fn factorial(&mut self, outcome: &Result<FactorialOutcome>) -> Result<()>;
    fn fibonacci(&mut self, outcome: &Result<FibonacciOutcome>) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn factorial(&mut self, outcome: &Result<FactorialOutcome>) -> Result<()> {
        (**self).factorial(outcome)
    }

    fn fibonacci(&mut self, outcome: &Result<FibonacciOutcome>) -> Result<()> {
        (**self).fibonacci(outcome)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
