//! Running the canned sample catalog.
//!
//! Samples go straight to the classifier without the form pre-check. Each
//! sample is classified independently, so an invalid sample is reported in
//! its own outcome and the rest still run.

use parcelsort_config::SamplePackage;
use parcelsort_core::{classify_observed, Category, ClassificationObserver, SortError};
use tracing::info;

/// Result of classifying one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome {
    pub description: String,
    /// `width × height × length`, reported even when classification fails.
    pub volume: f64,
    pub result: Result<Category, SortError>,
    /// Category the sample declared, if any.
    pub expected: Option<Category>,
}

impl SampleOutcome {
    /// Whether the result matches the expected category.
    ///
    /// `None` when the sample declares no expectation.
    pub fn matched(&self) -> Option<bool> {
        self.expected
            .map(|expected| self.result.as_ref().ok() == Some(&expected))
    }

    /// The category label, or `None` on error.
    pub fn label(&self) -> Option<&'static str> {
        self.result.as_ref().ok().map(Category::as_str)
    }
}

/// Classifies one sample.
pub fn run_sample<O>(sample: &SamplePackage, observer: &O) -> SampleOutcome
where
    O: ClassificationObserver + ?Sized,
{
    let measurement = sample.measurement();
    SampleOutcome {
        description: sample.description.clone(),
        volume: measurement.volume(),
        result: classify_observed(&measurement, observer),
        expected: sample.expected,
    }
}

/// Classifies every sample in order, emitting start/end events for each.
pub fn run_catalog<O>(samples: &[SamplePackage], observer: &O) -> Vec<SampleOutcome>
where
    O: ClassificationObserver + ?Sized,
{
    let total = samples.len() as u64;

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            info!(
                event = "sample_start",
                description = sample.description.as_str(),
                index = i as u64 + 1,
                total = total
            );

            let outcome = run_sample(sample, observer);

            match (&outcome.result, outcome.matched()) {
                (Ok(category), Some(matched)) => info!(
                    event = "sample_end",
                    description = outcome.description.as_str(),
                    category = category.as_str(),
                    matched = matched
                ),
                (Ok(category), None) => info!(
                    event = "sample_end",
                    description = outcome.description.as_str(),
                    category = category.as_str()
                ),
                (Err(error), _) => info!(
                    event = "sample_end",
                    description = outcome.description.as_str(),
                    error = %error
                ),
            }

            outcome
        })
        .collect()
}
