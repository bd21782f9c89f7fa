pub mod engine;
pub mod factorial;
pub mod fibonacci;

pub use crate::domain::model::{FactorialOutcome, FibonacciOutcome};
pub use crate::domain::ports::{ConfigProvider, Reporter};
pub use crate::utils::error::Result;
