// Adapters layer: concrete implementations for the terminal side (prompting, report output).

pub mod prompt;
pub mod report;
