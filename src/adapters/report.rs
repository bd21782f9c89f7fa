use crate::core::{FactorialOutcome, FibonacciOutcome, Reporter};
use crate::domain::model::OutputFormat;
use crate::utils::error::{DemoError, Result};
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Builds the reporter for `format` over a buffered `writer`.
pub fn reporter_for<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn Reporter + 'a> {
    let writer = BufWriter::new(writer);
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(writer)),
        OutputFormat::Json => Box::new(JsonReporter::new(writer)),
        OutputFormat::Csv => Box::new(CsvReporter::new(writer)),
    }
}

/// Plain console text, one block per operation.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    writer: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn factorial(&mut self, outcome: &Result<FactorialOutcome>) -> Result<()> {
        match outcome {
            Ok(f) => writeln!(
                self.writer,
                "Factorial of {} (using {} accumulator) is {}",
                f.n,
                f.width.type_name(),
                f.value
            )?,
            Err(e) => writeln!(self.writer, "Error: {}", e.user_friendly_message())?,
        }
        Ok(())
    }

    fn fibonacci(&mut self, outcome: &Result<FibonacciOutcome>) -> Result<()> {
        match outcome {
            Ok(f) => {
                writeln!(self.writer, "Fibonacci series up to {} terms:", f.count)?;
                for (index, term) in f.terms.clone().enumerate() {
                    if index > 0 {
                        write!(self.writer, " ")?;
                    }
                    write!(self.writer, "{}", term)?;
                }
                writeln!(self.writer)?;
            }
            Err(e) => writeln!(self.writer, "Error: {}", e.user_friendly_message())?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Section<T> {
    Outcome(T),
    Failed { error: String },
}

impl<T: Clone> Section<T> {
    fn from_outcome(outcome: &Result<T>) -> Self {
        match outcome {
            Ok(value) => Section::Outcome(value.clone()),
            Err(e) => Section::Failed {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    factorial: &'a Option<Section<FactorialOutcome>>,
    fibonacci: &'a Option<Section<FibonacciOutcome>>,
}

/// Holds both sections and writes a single JSON document on `finish`.
/// Fibonacci terms are serialized straight from the lazy sequence.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    writer: W,
    factorial: Option<Section<FactorialOutcome>>,
    fibonacci: Option<Section<FibonacciOutcome>>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            factorial: None,
            fibonacci: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn factorial(&mut self, outcome: &Result<FactorialOutcome>) -> Result<()> {
        self.factorial = Some(Section::from_outcome(outcome));
        Ok(())
    }

    fn fibonacci(&mut self, outcome: &Result<FibonacciOutcome>) -> Result<()> {
        self.fibonacci = Some(Section::from_outcome(outcome));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = JsonDocument {
            factorial: &self.factorial,
            fibonacci: &self.fibonacci,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct CsvRow {
    operation: &'static str,
    argument: i32,
    index: Option<usize>,
    value: Option<String>,
    error: Option<String>,
}

impl CsvRow {
    fn error(operation: &'static str, argument: i32, error: &DemoError) -> Self {
        Self {
            operation,
            argument,
            index: None,
            value: None,
            error: Some(error.to_string()),
        }
    }
}

/// Rows of `operation,argument,index,value,error`.
pub struct CsvReporter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| DemoError::IoError(e.into_error()))
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn factorial(&mut self, outcome: &Result<FactorialOutcome>) -> Result<()> {
        let row = match outcome {
            Ok(f) => CsvRow {
                operation: "factorial",
                argument: f.n,
                index: None,
                value: Some(f.value.to_string()),
                error: None,
            },
            Err(e) => CsvRow::error("factorial", error_argument(e), e),
        };
        self.writer.serialize(row)?;
        Ok(())
    }

    fn fibonacci(&mut self, outcome: &Result<FibonacciOutcome>) -> Result<()> {
        match outcome {
            Ok(f) => {
                for (index, term) in f.terms.clone().enumerate() {
                    self.writer.serialize(CsvRow {
                        operation: "fibonacci",
                        argument: f.count,
                        index: Some(index),
                        value: Some(term.to_string()),
                        error: None,
                    })?;
                }
            }
            Err(e) => self
                .writer
                .serialize(CsvRow::error("fibonacci", error_argument(e), e))?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn error_argument(error: &DemoError) -> i32 {
    match error {
        DemoError::NegativeArgument { n } => *n,
        DemoError::NonPositiveCount { count } => *count,
        DemoError::Overflow { argument, .. } => *argument,
        _ => 0,
    }
}
