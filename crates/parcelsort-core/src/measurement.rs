//! Package measurements and their domain validation.

use std::fmt;

use crate::error::{InvalidReason, Result, SortError};

/// One of the four measured quantities of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Width in centimeters.
    Width,
    /// Height in centimeters.
    Height,
    /// Length in centimeters.
    Length,
    /// Mass in kilograms.
    Mass,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    /// Returns the lower-case field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }

    /// Returns the unit the field is measured in.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Mass => "kg",
            _ => "cm",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensions (cm) and mass (kg) of a single package.
///
/// Construction does not validate; [`Measurement::validate`] applies the
/// classifier's rule that every value is finite and non-negative. Zero is
/// allowed here even though some callers refuse it.
///
/// # Example
///
/// ```
/// use parcelsort_core::Measurement;
///
/// let m = Measurement::new(100.0, 100.0, 100.0, 5.0);
/// assert_eq!(m.volume(), 1_000_000.0);
/// assert!(m.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl Measurement {
    /// Creates a measurement from its four values.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    /// Starts a builder where unset fields count as missing.
    pub fn builder() -> MeasurementBuilder {
        MeasurementBuilder::default()
    }

    /// Returns the value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
            Field::Length => self.length,
            Field::Mass => self.mass,
        }
    }

    /// Returns `width × height × length` in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Checks that every value is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            check_value(field, self.get(field))?;
        }
        Ok(())
    }
}

fn check_value(field: Field, value: f64) -> Result<()> {
    let reason = if !value.is_finite() {
        InvalidReason::NotFinite(value)
    } else if value < 0.0 {
        InvalidReason::Negative(value)
    } else {
        return Ok(());
    };
    Err(SortError::InvalidInput { field, reason })
}

/// Builder for [`Measurement`] that tracks missing fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementBuilder {
    width: Option<f64>,
    height: Option<f64>,
    length: Option<f64>,
    mass: Option<f64>,
}

impl MeasurementBuilder {
    pub fn width(mut self, value: f64) -> Self {
        self.width = Some(value);
        self
    }

    pub fn height(mut self, value: f64) -> Self {
        self.height = Some(value);
        self
    }

    pub fn length(mut self, value: f64) -> Self {
        self.length = Some(value);
        self
    }

    pub fn mass(mut self, value: f64) -> Self {
        self.mass = Some(value);
        self
    }

    /// Sets a field by name.
    pub fn set(self, field: Field, value: f64) -> Self {
        match field {
            Field::Width => self.width(value),
            Field::Height => self.height(value),
            Field::Length => self.length(value),
            Field::Mass => self.mass(value),
        }
    }

    /// Finishes the measurement, validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] with [`InvalidReason::Missing`] for
    /// the first unset field, or the domain validation error otherwise.
    pub fn build(self) -> Result<Measurement> {
        let missing = |field: Field| SortError::InvalidInput {
            field,
            reason: InvalidReason::Missing,
        };
        let measurement = Measurement {
            width: self.width.ok_or_else(|| missing(Field::Width))?,
            height: self.height.ok_or_else(|| missing(Field::Height))?,
            length: self.length.ok_or_else(|| missing(Field::Length))?,
            mass: self.mass.ok_or_else(|| missing(Field::Mass))?,
        };
        measurement.validate()?;
        Ok(measurement)
    }
}
