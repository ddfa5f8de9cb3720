//! Caller-side form handling.
//!
//! The form applies its own pre-check before calling the classifier, and that
//! check is stricter: every value must be greater than zero, while the
//! classifier accepts zero. The two policies are kept apart on purpose;
//! [`check_form`] never replaces [`Measurement::validate`].

use parcelsort_core::{
    classify_observed, Category, ClassificationObserver, Field, Measurement, SortError,
};
use thiserror::Error;
use tracing::warn;

/// Errors surfaced to the person filling in the form.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormError {
    /// A value was zero, negative or not a number.
    #[error("Please enter valid positive numbers for all dimensions and mass ({field} was {value})")]
    NotPositive { field: Field, value: f64 },

    /// The form accepted the values but the classifier refused them.
    #[error(transparent)]
    Rejected(#[from] SortError),
}

/// Raw form values after lenient parsing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormInput {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl FormInput {
    /// Parses the four text fields with [`parse_field`].
    pub fn parse(width: &str, height: &str, length: &str, mass: &str) -> Self {
        Self {
            width: parse_field(width),
            height: parse_field(height),
            length: parse_field(length),
            mass: parse_field(mass),
        }
    }

    /// Returns the values as a measurement.
    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.width, self.height, self.length, self.mass)
    }
}

/// Leniently parses a text field.
///
/// The longest leading decimal number of the trimmed input is used, so
/// `"12.5cm"` reads as `12.5`. Input with no leading number reads as `0.0`.
///
/// ```
/// use parcelsort::parse_field;
///
/// assert_eq!(parse_field(" 42 "), 42.0);
/// assert_eq!(parse_field("12.5cm"), 12.5);
/// assert_eq!(parse_field("1e3"), 1000.0);
/// assert_eq!(parse_field("abc"), 0.0);
/// assert_eq!(parse_field(""), 0.0);
/// ```
pub fn parse_field(text: &str) -> f64 {
    let prefix = numeric_prefix(text.trim_start());
    match prefix.parse::<f64>() {
        Ok(v) if v.is_nan() || v == 0.0 => 0.0,
        Ok(v) => v,
        Err(_) => 0.0,
    }
}

// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]` or `[+-]Infinity`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return &s[..end + "Infinity".len()];
    }

    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

/// Strict pre-check applied by the form: every value must be a number above zero.
///
/// # Errors
///
/// Returns [`FormError::NotPositive`] naming the first offending field.
pub fn check_form(measurement: &Measurement) -> Result<(), FormError> {
    for field in Field::ALL {
        let value = measurement.get(field);
        // NaN fails the comparison and is refused here too.
        if !(value > 0.0) {
            return Err(FormError::NotPositive { field, value });
        }
    }
    Ok(())
}

/// Runs the form pre-check and then the classifier.
pub fn submit<O>(input: &FormInput, observer: &O) -> Result<Category, FormError>
where
    O: ClassificationObserver + ?Sized,
{
    let measurement = input.measurement();
    let result = check_form(&measurement)
        .and_then(|()| classify_observed(&measurement, observer).map_err(FormError::from));

    if let Err(ref error) = result {
        warn!(event = "rejected_input", error = %error);
    }
    result
}
