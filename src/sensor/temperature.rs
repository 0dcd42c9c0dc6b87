//! Temperature sensor: floating-point readings, minimum-extraction processing.

use crate::ingest::IngestError;
use crate::sensor::{ProcessOutcome, Sensor, SensorKind};
use crate::sequence::{ReadingSequence, ReadingValue};
use chrono::{DateTime, Utc};
use statrs::statistics::Statistics;
use tracing::debug;

/// A sensor recording floating-point temperature readings.
///
/// Processing discards the lowest reading as an outlier and reports the
/// average of what remains.
pub struct TemperatureSensor {
    identifier: String,
    history: ReadingSequence<f64>,
    created_at: DateTime<Utc>,
}

impl TemperatureSensor {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        debug!(sensor = %identifier, kind = "temperature", "sensor created");
        Self {
            identifier,
            history: ReadingSequence::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a reading directly, bypassing text parsing.
    pub fn record(&mut self, value: f64) {
        self.history.append(value);
    }
}

impl Sensor for TemperatureSensor {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn describe(&self) -> String {
        format!(
            "[{}] ({}) {} reading(s), created {}",
            self.identifier,
            self.kind(),
            self.history.count(),
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }

    fn ingest(&mut self, text: &str) -> Result<(), IngestError> {
        let value: f64 = text.trim().parse().map_err(|_| IngestError::InvalidValue {
            kind: self.kind(),
            text: text.to_string(),
        })?;
        // NaN or infinity would break the total order extraction relies on.
        if !value.is_finite() {
            return Err(IngestError::InvalidValue {
                kind: self.kind(),
                text: text.to_string(),
            });
        }
        self.record(value);
        Ok(())
    }

    fn process(&mut self) -> ProcessOutcome {
        let Some(removed) = self.history.extract_min() else {
            return ProcessOutcome::NoReadings;
        };

        let remaining = self.history.count();
        let remaining_average = if remaining == 0 {
            0.0
        } else {
            self.history.values().iter().map(|v| v.as_f64()).mean()
        };

        ProcessOutcome::MinimumExtracted {
            removed,
            remaining_average,
            remaining,
        }
    }

    fn reading_count(&self) -> usize {
        self.history.count()
    }
}

impl Drop for TemperatureSensor {
    fn drop(&mut self) {
        debug!(
            sensor = %self.identifier,
            readings = self.history.count(),
            "temperature sensor dropped, reading history released"
        );
    }
}
