//! Polysensor - console-driven polymorphic IoT sensor simulator.
//!
//! Heterogeneous sensors (temperature, pressure) each accumulate an ordered
//! history of readings. A registry owns every sensor and applies each
//! variant's aggregation policy on demand.
//!
//! # Architecture
//!
//! ```text
//! menu / serial line ──▶ SensorRegistry ──▶ dyn Sensor ──▶ ReadingSequence<T>
//!        (I/O glue)       (owns sensors)    (two variants)  (owned history)
//! ```
//!
//! Ownership is a strict chain: the registry exclusively owns each sensor,
//! each sensor exclusively owns its reading sequence. Dropping the registry
//! releases everything deterministically.
//!
//! # Example
//!
//! ```
//! use polysensor::{ingest_line, PressureSensor, SensorRegistry};
//!
//! let mut registry = SensorRegistry::new();
//! registry.insert(Box::new(PressureSensor::new("P-100")));
//!
//! ingest_line("P-100,85", &mut registry).unwrap();
//! let reports = registry.process_all();
//! assert_eq!(reports.len(), 1);
//! ```

pub mod config;
pub mod ingest;
pub mod registry;
pub mod sensor;
pub mod sequence;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError, SensorSeed};
pub use ingest::{ingest_line, IngestError};
pub use registry::SensorRegistry;
pub use sensor::{
    PressureSensor, ProcessOutcome, ProcessReport, Sensor, SensorKind, TemperatureSensor,
};
pub use sequence::{ReadingSequence, ReadingValue};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
