//! Ordered, exclusively-owning collection of heterogeneous sensors.
//!
//! The registry is the single owner of every sensor in the running system.
//! Teardown cascades: dropping the registry drops each sensor, which in turn
//! releases its reading history.

use crate::sensor::{ProcessReport, Sensor};
use tracing::{debug, info};

/// Owns every sensor, in creation order.
#[derive(Default)]
pub struct SensorRegistry {
    sensors: Vec<Box<dyn Sensor>>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self {
            sensors: Vec::new(),
        }
    }

    /// Take ownership of a sensor, appending it in creation order.
    pub fn insert(&mut self, sensor: Box<dyn Sensor>) {
        debug!(sensor = %sensor.identifier(), kind = %sensor.kind(), "sensor registered");
        self.sensors.push(sensor);
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// First sensor whose identifier matches, scanning in insertion order.
    ///
    /// The reference is only valid while the registry lives; duplicates are
    /// legal and resolve to the earliest insertion.
    pub fn find_by_identifier(&self, id: &str) -> Option<&dyn Sensor> {
        self.sensors
            .iter()
            .find(|s| s.identifier() == id)
            .map(|s| &**s)
    }

    /// Mutable variant of [`find_by_identifier`](Self::find_by_identifier).
    pub fn find_by_identifier_mut(&mut self, id: &str) -> Option<&mut (dyn Sensor + '_)> {
        match self.sensors.iter_mut().find(|s| s.identifier() == id) {
            Some(s) => Some(&mut **s),
            None => None,
        }
    }

    /// Run every sensor's `process` in insertion order and collect the
    /// per-sensor reports. The collection itself is never mutated.
    pub fn process_all(&mut self) -> Vec<ProcessReport> {
        self.sensors
            .iter_mut()
            .map(|sensor| ProcessReport {
                identifier: sensor.identifier().to_string(),
                kind: sensor.kind(),
                outcome: sensor.process(),
            })
            .collect()
    }

    /// `describe()` output for every sensor in insertion order.
    pub fn summarize(&self) -> Vec<String> {
        self.sensors.iter().map(|s| s.describe()).collect()
    }

    /// Release every owned sensor.
    ///
    /// Idempotent: a second call finds nothing to release. Also runs
    /// automatically when the registry is dropped, so sensors are released
    /// exactly once on every exit path.
    pub fn teardown(&mut self) {
        if self.sensors.is_empty() {
            return;
        }
        for sensor in self.sensors.drain(..) {
            info!(sensor = %sensor.identifier(), "releasing sensor");
        }
        info!("registry teardown complete");
    }
}

impl Drop for SensorRegistry {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{PressureSensor, ProcessOutcome, SensorKind, TemperatureSensor};

    fn populated() -> SensorRegistry {
        let mut registry = SensorRegistry::new();
        registry.insert(Box::new(TemperatureSensor::new("T-001")));
        registry.insert(Box::new(PressureSensor::new("P-100")));
        registry
    }

    #[test]
    fn test_find_by_identifier() {
        let registry = populated();
        let sensor = registry.find_by_identifier("P-100").unwrap();
        assert_eq!(sensor.kind(), SensorKind::Pressure);
        assert!(registry.find_by_identifier("X-999").is_none());
    }

    #[test]
    fn test_duplicate_identifiers_resolve_to_first_inserted() {
        let mut registry = SensorRegistry::new();
        registry.insert(Box::new(TemperatureSensor::new("S-1")));
        registry.insert(Box::new(PressureSensor::new("S-1")));

        let sensor = registry.find_by_identifier("S-1").unwrap();
        assert_eq!(sensor.kind(), SensorKind::Temperature);
    }

    #[test]
    fn test_process_all_preserves_insertion_order() {
        let mut registry = populated();
        registry
            .find_by_identifier_mut("P-100")
            .unwrap()
            .ingest("80")
            .unwrap();

        let reports = registry.process_all();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].identifier, "T-001");
        assert_eq!(reports[0].outcome, ProcessOutcome::NoReadings);
        assert_eq!(reports[1].identifier, "P-100");
        assert_eq!(
            reports[1].outcome,
            ProcessOutcome::Averaged {
                average: 80.0,
                count: 1,
            }
        );
    }

    #[test]
    fn test_summarize_lists_every_sensor_in_order() {
        let registry = populated();
        let summary = registry.summarize();
        assert_eq!(summary.len(), 2);
        assert!(summary[0].contains("T-001"));
        assert!(summary[1].contains("P-100"));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut registry = populated();
        registry.teardown();
        assert!(registry.is_empty());

        // Second call is a no-op, and the drop at end of scope finds an
        // already-empty registry.
        registry.teardown();
        assert!(registry.is_empty());
    }
}
