//! parcelsort Core - package classification for automated sorting
//!
//! This crate provides the classification rules and nothing else:
//! - [`Measurement`] holding width, height, length (cm) and mass (kg)
//! - [`classify`] mapping a measurement to a [`Category`]
//! - [`SortError`] for input that fails domain validation
//! - [`ClassificationObserver`] for optional instrumentation
//!
//! Classification is pure: no I/O, no shared state, safe to call from any thread.

pub mod category;
pub mod classifier;
pub mod error;
pub mod measurement;
pub mod observer;


pub use category::{Category, CategoryParseError};
pub use classifier::{
    assess, classify, classify_measurement, classify_observed, Assessment, BULKY_DIMENSION_CM,
    BULKY_VOLUME_CM3, HEAVY_MASS_KG,
};
pub use error::{InvalidReason, Result, SortError};
pub use measurement::{Field, Measurement, MeasurementBuilder};
pub use observer::{ClassificationObserver, TracingObserver};
