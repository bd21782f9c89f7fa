use crate::core::factorial::compute_factorial_with;
use crate::core::fibonacci::fibonacci_terms_with;
use crate::core::{ConfigProvider, Reporter};
use crate::domain::model::{DemoRequest, FactorialOutcome, FibonacciOutcome};
use crate::utils::error::{DemoError, Result};

/// Both results of one run. A domain error in one step does not prevent the other.
#[derive(Debug)]
pub struct DemoOutcome {
    pub factorial: Result<FactorialOutcome>,
    pub fibonacci: Result<FibonacciOutcome>,
}

impl DemoOutcome {
    pub fn first_error(&self) -> Option<&DemoError> {
        self.factorial
            .as_ref()
            .err()
            .or_else(|| self.fibonacci.as_ref().err())
    }
}

pub struct DemoEngine<C: ConfigProvider, R: Reporter> {
    config: C,
    reporter: R,
}

impl<C: ConfigProvider, R: Reporter> DemoEngine<C, R> {
    pub fn new(config: C, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn run(&mut self, request: DemoRequest) -> Result<DemoOutcome> {
        tracing::debug!("Running numeric demo for {:?}", request);

        let factorial = self.factorial(request.n);
        if let Err(e) = &factorial {
            tracing::warn!("Factorial step failed: {}", e);
        }
        self.reporter.factorial(&factorial)?;

        let fibonacci = self.fibonacci(request.count);
        if let Err(e) = &fibonacci {
            tracing::warn!("Fibonacci step failed: {}", e);
        }
        self.reporter.fibonacci(&fibonacci)?;

        self.reporter.finish()?;

        Ok(DemoOutcome {
            factorial,
            fibonacci,
        })
    }

    fn factorial(&self, n: i32) -> Result<FactorialOutcome> {
        let width = self
            .config
            .width_mode()
            .resolve(n, self.config.narrow_threshold());
        tracing::debug!("Computing {}! with the {} accumulator", n, width.type_name());

        let value = compute_factorial_with(n, width, self.config.factorial_overflow())?;
        Ok(FactorialOutcome { n, width, value })
    }

    fn fibonacci(&self, count: i32) -> Result<FibonacciOutcome> {
        tracing::debug!("Producing {} Fibonacci terms", count);

        let terms = fibonacci_terms_with(count, self.config.fibonacci_overflow())?;
        Ok(FibonacciOutcome { count, terms })
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
