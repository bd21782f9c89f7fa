use crate::utils::error::{DemoError, Result};
use std::io::{BufRead, ErrorKind, Write};

pub const FACTORIAL_PROMPT: &str = "Enter a non-negative integer to calculate its factorial: ";
pub const FIBONACCI_PROMPT: &str = "Enter the number of Fibonacci terms to display: ";

/// Asks for integers on an interactive stream.
#[derive(Debug)]
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `prompt`, then reads and parses one line.
    pub fn read_integer(&mut self, prompt: &str) -> Result<i32> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => DemoError::InvalidInput {
                input: String::new(),
                reason: "input is not valid UTF-8".to_string(),
            },
            _ => DemoError::IoError(e),
        })?;
        if read == 0 {
            return Err(DemoError::InvalidInput {
                input: String::new(),
                reason: "input ended before a number was entered".to_string(),
            });
        }

        let trimmed = line.trim();
        trimmed.parse::<i32>().map_err(|e| DemoError::InvalidInput {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })
    }

    /// Uses `given` when present, otherwise prompts.
    pub fn integer_or_prompt(&mut self, given: Option<i32>, prompt: &str) -> Result<i32> {
        match given {
            Some(value) => Ok(value),
            None => self.read_integer(prompt),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
