//! The package classifier.
//!
//! A package is *bulky* when its volume reaches [`BULKY_VOLUME_CM3`] or any
//! dimension reaches [`BULKY_DIMENSION_CM`], and *heavy* when its mass
//! reaches [`HEAVY_MASS_KG`]. Every comparison is inclusive.
//!
//! | bulky | heavy | category   |
//! |-------|-------|------------|
//! | no    | no    | `STANDARD` |
//! | yes   | no    | `SPECIAL`  |
//! | no    | yes   | `SPECIAL`  |
//! | yes   | yes   | `REJECTED` |

use crate::category::Category;
use crate::error::Result;
use crate::measurement::Measurement;
use crate::observer::ClassificationObserver;

/// Volume at or above which a package is bulky, in cubic centimeters.
pub const BULKY_VOLUME_CM3: f64 = 1_000_000.0;

/// Single dimension at or above which a package is bulky, in centimeters.
pub const BULKY_DIMENSION_CM: f64 = 150.0;

/// Mass at or above which a package is heavy, in kilograms.
pub const HEAVY_MASS_KG: f64 = 20.0;

/// Intermediate values computed while classifying one package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// `width × height × length` in cubic centimeters.
    pub volume: f64,
    pub is_bulky: bool,
    pub is_heavy: bool,
    pub category: Category,
}

/// Validates a measurement and computes its assessment.
///
/// # Errors
///
/// Returns [`SortError::InvalidInput`](crate::SortError::InvalidInput) when a
/// value is not finite or is negative.
pub fn assess(measurement: &Measurement) -> Result<Assessment> {
    measurement.validate()?;

    let volume = measurement.volume();
    let is_bulky = volume >= BULKY_VOLUME_CM3
        || measurement.width >= BULKY_DIMENSION_CM
        || measurement.height >= BULKY_DIMENSION_CM
        || measurement.length >= BULKY_DIMENSION_CM;
    let is_heavy = measurement.mass >= HEAVY_MASS_KG;

    Ok(Assessment {
        volume,
        is_bulky,
        is_heavy,
        category: Category::from_flags(is_bulky, is_heavy),
    })
}

/// Classifies a package from its width, height, length (cm) and mass (kg).
///
/// # Example
///
/// ```
/// use parcelsort_core::{classify, Category};
///
/// assert_eq!(classify(90.0, 90.0, 90.0, 10.0).unwrap(), Category::Standard);
/// assert_eq!(classify(200.0, 50.0, 50.0, 15.0).unwrap(), Category::Special);
/// assert_eq!(classify(150.0, 150.0, 150.0, 25.0).unwrap(), Category::Rejected);
/// assert!(classify(-1.0, 10.0, 10.0, 5.0).is_err());
/// ```
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    classify_measurement(&Measurement::new(width, height, length, mass))
}

/// Classifies an already assembled measurement.
pub fn classify_measurement(measurement: &Measurement) -> Result<Category> {
    assess(measurement).map(|a| a.category)
}

/// Classifies a measurement and reports the assessment to `observer`.
pub fn classify_observed<O>(measurement: &Measurement, observer: &O) -> Result<Category>
where
    O: ClassificationObserver + ?Sized,
{
    let assessment = assess(measurement)?;
    observer.on_classified(measurement, &assessment);
    Ok(assessment.category)
}
