//! Pressure sensor: integer readings, whole-history averaging.

use crate::ingest::IngestError;
use crate::sensor::{ProcessOutcome, Sensor, SensorKind};
use crate::sequence::{ReadingSequence, ReadingValue};
use chrono::{DateTime, Utc};
use statrs::statistics::Statistics;
use tracing::debug;

/// A sensor recording integer pressure readings.
///
/// Processing reports the floating-point average over every reading; nothing
/// is removed.
pub struct PressureSensor {
    identifier: String,
    history: ReadingSequence<i64>,
    created_at: DateTime<Utc>,
}

impl PressureSensor {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        debug!(sensor = %identifier, kind = "pressure", "sensor created");
        Self {
            identifier,
            history: ReadingSequence::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a reading directly, bypassing text parsing.
    pub fn record(&mut self, value: i64) {
        self.history.append(value);
    }
}

impl Sensor for PressureSensor {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
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
        let value: i64 = text.trim().parse().map_err(|_| IngestError::InvalidValue {
            kind: self.kind(),
            text: text.to_string(),
        })?;
        self.record(value);
        Ok(())
    }

    fn process(&mut self) -> ProcessOutcome {
        let count = self.history.count();
        if count == 0 {
            return ProcessOutcome::NoReadings;
        }

        let average = self.history.values().iter().map(|v| v.as_f64()).mean();
        ProcessOutcome::Averaged { average, count }
    }

    fn reading_count(&self) -> usize {
        self.history.count()
    }
}

impl Drop for PressureSensor {
    fn drop(&mut self) {
        debug!(
            sensor = %self.identifier,
            readings = self.history.count(),
            "pressure sensor dropped, reading history released"
        );
    }
}
