use crate::domain::model::{OverflowPolicy, MAX_EXACT_FIBONACCI_TERMS};
use crate::utils::error::{DemoError, Result};
use serde::{Serialize, Serializer};
use std::iter::FusedIterator;

/// Lazily yields a fixed number of Fibonacci terms, starting at term 0.
///
/// Terms live in an `i32` and wrap past term 46. Clone the sequence before
/// iterating to replay it from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciSeq {
    current: i32,
    next: i32,
    remaining: usize,
}

impl FibonacciSeq {
    fn new(count: usize) -> Self {
        Self {
            current: 0,
            next: 1,
            remaining: count,
        }
    }
}

impl Iterator for FibonacciSeq {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let term = self.current;
        let following = self.current.wrapping_add(self.next);
        self.current = self.next;
        self.next = following;
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FibonacciSeq {}

impl FusedIterator for FibonacciSeq {}

/// Serializes the remaining terms as a sequence without collecting them first.
impl Serialize for FibonacciSeq {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.clone())
    }
}

/// Returns a lazy sequence of `count` terms, or [`DemoError::NonPositiveCount`].
pub fn fibonacci_terms(count: i32) -> Result<FibonacciSeq> {
    if count <= 0 {
        return Err(DemoError::NonPositiveCount { count });
    }
    Ok(FibonacciSeq::new(count as usize))
}

/// Like [`fibonacci_terms`]; under `Checked` a count that would emit a wrapped
/// term is refused up front, so no partial sequence is ever produced.
pub fn fibonacci_terms_with(count: i32, overflow: OverflowPolicy) -> Result<FibonacciSeq> {
    let seq = fibonacci_terms(count)?;
    if overflow == OverflowPolicy::Checked && count > MAX_EXACT_FIBONACCI_TERMS {
        return Err(DemoError::Overflow {
            operation: "fibonacci",
            argument: count,
            max_argument: MAX_EXACT_FIBONACCI_TERMS,
        });
    }
    Ok(seq)
}

/// Collects the first `count` terms, wrapping silently past term 46.
pub fn produce_fibonacci(count: i32) -> Result<Vec<i32>> {
    produce_fibonacci_with(count, OverflowPolicy::Wrap)
}

/// Eager form of [`fibonacci_terms_with`].
pub fn produce_fibonacci_with(count: i32, overflow: OverflowPolicy) -> Result<Vec<i32>> {
    Ok(fibonacci_terms_with(count, overflow)?.collect())
}
