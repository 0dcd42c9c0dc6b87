//! Polymorphic sensor variants and their shared capability surface.
//!
//! The registry only ever sees `dyn Sensor`; adding a new sensor kind means
//! implementing this trait, with no change to the registry or the sequence.

pub mod pressure;
pub mod temperature;

pub use pressure::PressureSensor;
pub use temperature::TemperatureSensor;

use crate::ingest::IngestError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind label attached to each sensor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Pressure,
}

impl SensorKind {
    pub fn label(self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Pressure => "pressure",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one processing pass over a sensor's readings.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// The sensor had no readings to work with.
    NoReadings,
    /// Average over every reading; nothing removed.
    Averaged { average: f64, count: usize },
    /// The minimum reading was removed and the remainder averaged.
    MinimumExtracted {
        removed: f64,
        remaining_average: f64,
        remaining: usize,
    },
}

/// One sensor's entry in a `process_all` pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    pub identifier: String,
    pub kind: SensorKind,
    pub outcome: ProcessOutcome,
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProcessOutcome::NoReadings => {
                write!(f, "[{}] ({}) no readings", self.identifier, self.kind)
            }
            ProcessOutcome::Averaged { average, count } => write!(
                f,
                "[{}] ({}) average {average:.3} over {count} reading(s)",
                self.identifier, self.kind
            ),
            ProcessOutcome::MinimumExtracted {
                removed,
                remaining_average,
                remaining,
            } => write!(
                f,
                "[{}] ({}) minimum {removed:.3} removed, remaining average {remaining_average:.3} over {remaining} reading(s)",
                self.identifier, self.kind
            ),
        }
    }
}

/// Capability surface shared by every sensor variant.
pub trait Sensor {
    /// Immutable identifier set at construction. Uniqueness is not
    /// enforced; lookup resolves duplicates to the first inserted.
    fn identifier(&self) -> &str;

    fn kind(&self) -> SensorKind;

    /// Human summary tagged with the variant's kind label.
    fn describe(&self) -> String;

    /// Parse `text` into this variant's value type and append it.
    /// Nothing is mutated on failure.
    fn ingest(&mut self, text: &str) -> Result<(), IngestError>;

    /// Variant-specific aggregation over the reading history.
    fn process(&mut self) -> ProcessOutcome;

    /// Number of live readings.
    fn reading_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(SensorKind::Temperature.label(), "temperature");
        assert_eq!(SensorKind::Pressure.to_string(), "pressure");
    }

    #[test]
    fn test_report_display_formats() {
        let report = ProcessReport {
            identifier: "T-001".to_string(),
            kind: SensorKind::Temperature,
            outcome: ProcessOutcome::MinimumExtracted {
                removed: 5.0,
                remaining_average: 15.0,
                remaining: 2,
            },
        };
        let text = report.to_string();
        assert!(text.contains("T-001"));
        assert!(text.contains("5.000"));
        assert!(text.contains("15.000"));

        let empty = ProcessReport {
            identifier: "P-100".to_string(),
            kind: SensorKind::Pressure,
            outcome: ProcessOutcome::NoReadings,
        };
        assert!(empty.to_string().contains("no readings"));
    }
}
