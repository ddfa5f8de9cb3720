//! End-to-end checks through the public facade.

use parcelsort::prelude::*;
use parcelsort::{class_for_label, FormError};
use parcelsort_test::scenarios::{self, Expected};

#[test]
fn reference_scenarios_through_facade() {
    for s in scenarios::REFERENCE {
        let [w, h, l, m] = s.values();
        let result = classify(w, h, l, m);
        match s.expected {
            Expected::Category(label) => {
                let category = result.unwrap();
                assert_eq!(category.to_string(), label, "{}", s.name);
                assert!(!class_for_label(label).is_empty());
            }
            Expected::InvalidInput => assert!(
                matches!(result, Err(SortError::InvalidInput { .. })),
                "{}",
                s.name
            ),
        }
    }
}

#[test]
fn zero_is_split_between_policies() {
    let m = Measurement::new(10.0, 10.0, 10.0, 0.0);
    assert_eq!(classify_measurement(&m), Ok(Category::Standard));
    assert!(matches!(check_form(&m), Err(FormError::NotPositive { .. })));
}

#[test]
fn form_text_round_trip() {
    let input = FormInput::parse("200", "50", "50", "15");
    assert_eq!(submit(&input, &()), Ok(Category::Special));

    let blank = FormInput::parse("", "50", "50", "15");
    assert_eq!(blank.width, 0.0);
    assert!(submit(&blank, &()).is_err());
}
