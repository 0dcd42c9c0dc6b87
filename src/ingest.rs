//! Line-oriented ingestion: `identifier,value` text into a typed reading.
//!
//! This is the boundary the simulated serial feed comes through. Every
//! failure is a returned outcome; nothing here aborts, and a rejected line
//! never mutates any sensor.

use crate::registry::SensorRegistry;
use crate::sensor::SensorKind;
use thiserror::Error;
use tracing::warn;

/// Failures surfaced while turning external text into a reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("line has no `,` separator")]
    MissingSeparator,

    #[error("no sensor with identifier `{0}`")]
    UnknownSensor(String),

    #[error("`{text}` is not a valid {kind} reading")]
    InvalidValue { kind: SensorKind, text: String },
}

/// Parse one `identifier,value` line and append the value to the matching
/// sensor.
///
/// The line is split at the first `,`; a line without one is rejected before
/// any lookup. Trailing newline or carriage return is stripped from the
/// value. Lookup failures and parse failures leave the registry untouched.
pub fn ingest_line(line: &str, registry: &mut SensorRegistry) -> Result<(), IngestError> {
    let Some((identifier, value)) = line.split_once(',') else {
        warn!(line, "line rejected: no separator");
        return Err(IngestError::MissingSeparator);
    };
    let value = value.trim_end_matches(['\n', '\r']);

    let Some(sensor) = registry.find_by_identifier_mut(identifier) else {
        warn!(identifier, "line rejected: identifier not found");
        return Err(IngestError::UnknownSensor(identifier.to_string()));
    };

    sensor.ingest(value).map_err(|e| {
        warn!(identifier, value, "line rejected: {e}");
        e
    })
}
