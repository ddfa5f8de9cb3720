//! Instrumentation hook for classification.
//!
//! The classifier never logs on its own. Callers that want the intermediate
//! values pass an observer to [`classify_observed`](crate::classify_observed).

use tracing::debug;

use crate::classifier::Assessment;
use crate::measurement::Measurement;

/// Receives the measurement and its assessment after a successful classification.
///
/// Not called when the input is invalid.
pub trait ClassificationObserver {
    fn on_classified(&self, measurement: &Measurement, assessment: &Assessment);
}

impl ClassificationObserver for () {
    fn on_classified(&self, _measurement: &Measurement, _assessment: &Assessment) {}
}

impl<F> ClassificationObserver for F
where
    F: Fn(&Measurement, &Assessment),
{
    fn on_classified(&self, measurement: &Measurement, assessment: &Assessment) {
        self(measurement, assessment)
    }
}

/// Observer that emits one `tracing` DEBUG event per classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ClassificationObserver for TracingObserver {
    fn on_classified(&self, m: &Measurement, a: &Assessment) {
        debug!(
            target: "parcelsort_core",
            event = "classified",
            width = m.width,
            height = m.height,
            length = m.length,
            mass = m.mass,
            volume = a.volume,
            is_bulky = a.is_bulky,
            is_heavy = a.is_heavy,
            category = a.category.as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;
    use crate::{classify, classify_observed};

    type Record = (String, Level, BTreeMap<String, String>);

    #[derive(Clone, Default)]
    struct CaptureLayer(Arc<Mutex<Vec<Record>>>);

    #[derive(Default)]
    struct Fields(BTreeMap<String, String>);

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            let metadata = event.metadata();
            self.0.lock().unwrap().push((
                metadata.target().to_string(),
                *metadata.level(),
                fields.0,
            ));
        }
    }

    #[test]
    fn test_tracing_observer_emits_one_debug_event() {
        let capture = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let m = Measurement::new(100.0, 100.0, 100.0, 20.0);
            classify_observed(&m, &TracingObserver).unwrap();
            // Plain classification stays silent.
            classify(1.0, 1.0, 1.0, 1.0).unwrap();
        });

        let records = capture.0.lock().unwrap();
        assert_eq!(records.len(), 1);

        let (target, level, fields) = &records[0];
        assert_eq!(target, "parcelsort_core");
        assert_eq!(*level, Level::DEBUG);

        let expected = [
            ("event", "classified"),
            ("width", "100.0"),
            ("height", "100.0"),
            ("length", "100.0"),
            ("mass", "20.0"),
            ("volume", "1000000.0"),
            ("is_bulky", "true"),
            ("is_heavy", "true"),
            ("category", "REJECTED"),
        ];
        assert_eq!(fields.len(), expected.len());
        for (name, value) in expected {
            assert_eq!(fields.get(name).map(String::as_str), Some(value), "{name}");
        }
    }
}
