//! parcelsort - package handling classification for automated sorting
//!
//! Classifies a package as `STANDARD`, `SPECIAL` or `REJECTED` from its
//! dimensions and mass, and carries the caller-side pieces around it.
//!
//! # Example
//!
//! ```rust
//! use parcelsort::prelude::*;
//!
//! let category = classify(90.0, 90.0, 90.0, 10.0).unwrap();
//! assert_eq!(category, Category::Standard);
//! assert_eq!(DisplayStyle::of(category).css_class(), "result-standard");
//! ```

// Classifier
pub use parcelsort_core::{
    assess, classify, classify_measurement, classify_observed, Assessment, Category,
    CategoryParseError, ClassificationObserver, Field, InvalidReason, Measurement,
    MeasurementBuilder, SortError, TracingObserver, BULKY_DIMENSION_CM, BULKY_VOLUME_CM3,
    HEAVY_MASS_KG,
};

// Configuration
pub use parcelsort_config::{ConfigError, ConsoleConfig, SamplePackage, SorterConfig};

pub mod catalog;
pub mod cli;
pub mod form;
pub mod style;

pub use catalog::{run_catalog, run_sample, SampleOutcome};
pub use form::{check_form, parse_field, submit, FormError, FormInput};
pub use style::{class_for_label, DisplayStyle};

/// Console output, available with the `console` feature.
#[cfg(feature = "console")]
pub mod console {
    pub use parcelsort_console::{format_category, format_volume, init, init_with, SorterConsoleLayer};
}

pub mod prelude {
    pub use super::{classify, classify_measurement, Category, Measurement, SortError};
    pub use super::{check_form, submit, FormError, FormInput};
    pub use super::{run_catalog, SampleOutcome, SamplePackage, SorterConfig};
    pub use super::DisplayStyle;
}
