//! Generic reading history with minimum extraction.
//!
//! Every sensor owns exactly one `ReadingSequence` of its value type. The
//! sequence preserves insertion order; the only mutation that reorders
//! anything is `extract_min`, which removes a single element.

use std::ops::Add;
use tracing::debug;

/// Numeric capability required of a stored reading.
pub trait ReadingValue: Copy + PartialOrd + Add<Output = Self> + std::fmt::Debug {
    /// Additive identity; the sum of an empty sequence.
    const ZERO: Self;

    /// Projection used for floating-point averages.
    fn as_f64(self) -> f64;

    /// Human-readable rendering: three decimals for floats, plain for integers.
    fn render(self) -> String;
}

impl ReadingValue for f64 {
    const ZERO: Self = 0.0;

    fn as_f64(self) -> f64 {
        self
    }

    fn render(self) -> String {
        format!("{self:.3}")
    }
}

impl ReadingValue for i64 {
    const ZERO: Self = 0;

    fn as_f64(self) -> f64 {
        self as f64
    }

    fn render(self) -> String {
        self.to_string()
    }
}

/// An ordered, growable history of readings of one numeric type.
///
/// Cloning produces an independent deep copy; mutating the clone never
/// affects the original.
#[derive(Debug, Clone)]
pub struct ReadingSequence<T: ReadingValue> {
    values: Vec<T>,
}

impl<T: ReadingValue> Default for ReadingSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ReadingValue> ReadingSequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a reading to the end of the history.
    pub fn append(&mut self, value: T) {
        debug!(value = %value.render(), "reading appended");
        self.values.push(value);
    }

    /// Number of live readings.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all live readings in `T`'s arithmetic; zero when empty.
    pub fn sum(&self) -> T {
        self.values
            .iter()
            .copied()
            .fold(T::ZERO, |acc, v| acc + v)
    }

    /// Remove and return the smallest reading.
    ///
    /// A single forward scan with a strict `<` comparison, so ties resolve
    /// to the earliest-inserted occurrence. Returns `None` on an empty
    /// sequence and leaves it untouched.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }

        let mut min_idx = 0;
        for (idx, value) in self.values.iter().enumerate().skip(1) {
            if *value < self.values[min_idx] {
                min_idx = idx;
            }
        }

        let removed = self.values.remove(min_idx);
        debug!(value = %removed.render(), "minimum reading extracted");
        Some(removed)
    }

    /// First reading exactly equal to `value`; no removal.
    pub fn find_exact(&self, value: T) -> Option<T> {
        self.values.iter().copied().find(|v| *v == value)
    }

    /// Remove all readings. Idempotent.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Live readings in insertion order.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tracks_appends_and_extractions() {
        let mut seq = ReadingSequence::new();
        for v in [3.0, 1.0, 2.0] {
            seq.append(v);
        }
        assert_eq!(seq.count(), 3);

        seq.extract_min();
        assert_eq!(seq.count(), 2);
    }

    #[test]
    fn test_extract_min_returns_smallest() {
        let mut seq = ReadingSequence::new();
        seq.append(10.0);
        seq.append(5.0);
        seq.append(20.0);

        assert_eq!(seq.extract_min(), Some(5.0));
        assert_eq!(seq.count(), 2);
        assert_eq!(seq.values(), &[10.0, 20.0]);
    }

    #[test]
    fn test_extract_min_tie_break_removes_earliest() {
        let mut seq = ReadingSequence::new();
        seq.append(2);
        seq.append(1);
        seq.append(1);
        seq.append(3);

        assert_eq!(seq.extract_min(), Some(1));
        // The first 1 is gone; the later one survives in place.
        assert_eq!(seq.values(), &[2, 1, 3]);
    }

    #[test]
    fn test_extract_min_on_empty_is_none() {
        let mut seq: ReadingSequence<i64> = ReadingSequence::new();
        assert_eq!(seq.extract_min(), None);
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let seq: ReadingSequence<i64> = ReadingSequence::new();
        assert_eq!(seq.sum(), 0);

        let seq: ReadingSequence<f64> = ReadingSequence::new();
        assert_eq!(seq.sum(), 0.0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = ReadingSequence::new();
        original.append(1);
        original.append(2);

        let mut copy = original.clone();
        assert_eq!(copy.sum(), original.sum());

        copy.append(10);
        copy.extract_min();
        assert_eq!(original.count(), 2);
        assert_eq!(original.sum(), 3);
    }

    #[test]
    fn test_find_exact_matches_without_mutation() {
        let mut seq = ReadingSequence::new();
        seq.append(4.5);
        seq.append(2.25);

        assert_eq!(seq.find_exact(2.25), Some(2.25));
        assert_eq!(seq.find_exact(9.0), None);
        assert_eq!(seq.count(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut seq = ReadingSequence::new();
        seq.append(7);
        seq.clear();
        assert!(seq.is_empty());
        seq.clear();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_render_formats_by_type() {
        assert_eq!(5.0_f64.render(), "5.000");
        assert_eq!((-2.5_f64).render(), "-2.500");
        assert_eq!(85_i64.render(), "85");
    }
}
