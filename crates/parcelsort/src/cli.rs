//! Command-line operations behind the `parcelsort` binary.

use std::io::ErrorKind;
use std::path::Path;

use parcelsort_config::{ConfigError, SorterConfig};
use parcelsort_core::{
    classify_observed, Category, ClassificationObserver, Field, Measurement, SortError,
};
use thiserror::Error;
use tracing::warn;

use crate::catalog::{run_catalog, SampleOutcome};
use crate::form::{submit, FormError, FormInput};

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG: &str = "parcelsort.toml";

/// Errors that make the binary exit with a failure code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{field} must be a number, got '{text}'")]
    NotANumber { field: Field, text: String },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("{failed} of {total} samples failed")]
    SamplesFailed { failed: usize, total: usize },
}

/// Loads the configuration.
///
/// An explicit path must load. Without one, `default_path` is tried and only a
/// missing file falls back to the built-in settings.
pub fn load_config(
    explicit: Option<&Path>,
    default_path: impl AsRef<Path>,
) -> Result<SorterConfig, CliError> {
    if let Some(path) = explicit {
        return Ok(SorterConfig::load(path)?);
    }
    match SorterConfig::load(default_path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(SorterConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Classifies one package from its four text arguments.
///
/// With `strict`, values are parsed leniently and the form pre-check runs
/// first. Otherwise every value must parse as a number.
pub fn classify_args<O>(values: [&str; 4], strict: bool, observer: &O) -> Result<Category, CliError>
where
    O: ClassificationObserver + ?Sized,
{
    if strict {
        let [width, height, length, mass] = values;
        let input = FormInput::parse(width, height, length, mass);
        return Ok(submit(&input, observer)?);
    }

    let mut builder = Measurement::builder();
    for (field, text) in Field::ALL.into_iter().zip(values) {
        let value: f64 = text.trim().parse().map_err(|_| CliError::NotANumber {
            field,
            text: text.to_string(),
        })?;
        builder = builder.set(field, value);
    }

    let result = builder
        .build()
        .and_then(|measurement| classify_observed(&measurement, observer));
    if let Err(ref error) = result {
        warn!(event = "rejected_input", error = %error);
    }
    Ok(result?)
}

/// Report lines and failure count for a catalog run.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplesReport {
    pub lines: Vec<String>,
    pub outcomes: Vec<SampleOutcome>,
    /// Samples that errored or did not match their expected category.
    pub failed: usize,
}

impl SamplesReport {
    /// Converts the report into an error when any sample failed.
    pub fn into_result(self) -> Result<Self, CliError> {
        if self.failed > 0 {
            Err(CliError::SamplesFailed {
                failed: self.failed,
                total: self.outcomes.len(),
            })
        } else {
            Ok(self)
        }
    }
}

/// Runs the configured catalog and renders one line per sample.
pub fn run_samples<O>(config: &SorterConfig, observer: &O) -> SamplesReport
where
    O: ClassificationObserver + ?Sized,
{
    let outcomes = run_catalog(&config.samples, observer);

    let mut failed = 0;
    let lines = outcomes
        .iter()
        .map(|outcome| match (&outcome.result, outcome.matched()) {
            (Ok(category), Some(false)) => {
                failed += 1;
                format!(
                    "{}: {} (expected {})",
                    outcome.description,
                    category,
                    outcome.expected.map(|c| c.as_str()).unwrap_or("-")
                )
            }
            (Ok(category), _) => format!("{}: {}", outcome.description, category),
            (Err(e), _) => {
                failed += 1;
                format!("{}: {}", outcome.description, e)
            }
        })
        .collect();

    SamplesReport {
        lines,
        outcomes,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Arc, Mutex};

    use parcelsort_config::SamplePackage;
    use tracing::field::{Field as EventField, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;

    #[test]
    fn test_missing_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(None, dir.path().join(DEFAULT_CONFIG)).unwrap();
        assert_eq!(config, SorterConfig::default());
    }

    #[test]
    fn test_malformed_default_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG);
        fs::write(&path, "[[samples]]\ndescription = \"A\"\nwidth = \"oops\"\n").unwrap();

        let err = load_config(None, &path).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_default_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG);
        let sample = "[[samples]]\ndescription = \"A\"\nwidth = 1\nheight = 1\nlength = 1\nmass = 1\n";
        fs::write(&path, format!("{sample}{sample}")).unwrap();

        let err = load_config(None, &path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: duplicate sample description 'A'"
        );
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = load_config(Some(missing.as_path()), DEFAULT_CONFIG).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn test_plain_mode_needs_numbers() {
        let err = classify_args(["10", "10cm", "10", "1"], false, &()).unwrap_err();
        assert_eq!(err.to_string(), "height must be a number, got '10cm'");
    }

    #[test]
    fn test_plain_mode_allows_zero() {
        let category = classify_args(["10", "10", "10", "0"], false, &()).unwrap();
        assert_eq!(category, Category::Standard);
    }

    #[test]
    fn test_plain_mode_refuses_negative() {
        let err = classify_args(["-1", "10", "10", "5"], false, &()).unwrap_err();
        assert!(matches!(err, CliError::Sort(SortError::InvalidInput { field: Field::Width, .. })));
    }

    #[derive(Clone, Default)]
    struct RejectedInputs(Arc<Mutex<Vec<(Level, String)>>>);

    #[derive(Default)]
    struct EventFields {
        event: Option<String>,
        error: Option<String>,
    }

    impl Visit for EventFields {
        fn record_debug(&mut self, field: &EventField, value: &dyn std::fmt::Debug) {
            let value = format!("{:?}", value).trim_matches('"').to_string();
            match field.name() {
                "event" => self.event = Some(value),
                "error" => self.error = Some(value),
                _ => {}
            }
        }
    }

    impl<S: Subscriber> Layer<S> for RejectedInputs {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = EventFields::default();
            event.record(&mut fields);
            if fields.event.as_deref() == Some("rejected_input") {
                let error = fields.error.unwrap_or_default();
                self.0.lock().unwrap().push((*event.metadata().level(), error));
            }
        }
    }

    #[test]
    fn test_plain_mode_failure_emits_rejected_input() {
        let layer = RejectedInputs::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        tracing::subscriber::with_default(subscriber, || {
            assert!(classify_args(["-1", "10", "10", "5"], false, &()).is_err());
            assert!(classify_args(["1", "1", "1", "1"], false, &()).is_ok());
        });

        let seen = layer.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Level::WARN);
        assert!(seen[0].1.starts_with("Invalid input: width is negative"));
    }

    #[test]
    fn test_strict_mode_is_lenient_then_strict() {
        let category = classify_args(["200cm", "50", "50", "15kg"], true, &()).unwrap();
        assert_eq!(category, Category::Special);

        let err = classify_args(["10", "10", "10", "0"], true, &()).unwrap_err();
        assert!(matches!(err, CliError::Form(FormError::NotPositive { field: Field::Mass, .. })));
    }

    #[test]
    fn test_samples_count_mismatches_and_errors() {
        let config = SorterConfig::empty()
            .with_sample(SamplePackage::new("ok", 1.0, 1.0, 1.0, 1.0).expecting(Category::Standard))
            .with_sample(SamplePackage::new("heavy", 1.0, 1.0, 1.0, 30.0).expecting(Category::Standard))
            .with_sample(SamplePackage::new("broken", -1.0, 1.0, 1.0, 1.0));

        let report = run_samples(&config, &());
        assert_eq!(report.failed, 2);
        assert_eq!(report.lines[0], "ok: STANDARD");
        assert_eq!(report.lines[1], "heavy: SPECIAL (expected STANDARD)");

        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "2 of 3 samples failed");
    }
}
