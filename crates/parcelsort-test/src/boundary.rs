//! Threshold boundary fixtures.
//!
//! Each "on" case sits exactly on a threshold and each "below" case sits just
//! under it, with every other quantity kept clear of its own threshold.

use crate::scenarios::{Expected, Scenario};

const SPECIAL: Expected = Expected::Category("SPECIAL");
const STANDARD: Expected = Expected::Category("STANDARD");

fn case(
    name: &'static str,
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
    expected: Expected,
) -> Scenario {
    Scenario {
        name,
        width,
        height,
        length,
        mass,
        expected,
    }
}

/// Cases exactly on one threshold.
pub fn on_threshold() -> Vec<Scenario> {
    vec![
        case("volume exactly 1,000,000", 100.0, 100.0, 100.0, 1.0, SPECIAL),
        case("width exactly 150", 150.0, 1.0, 1.0, 1.0, SPECIAL),
        case("height exactly 150", 1.0, 150.0, 1.0, 1.0, SPECIAL),
        case("length exactly 150", 1.0, 1.0, 150.0, 1.0, SPECIAL),
        case("mass exactly 20", 10.0, 10.0, 10.0, 20.0, SPECIAL),
    ]
}

/// Cases just below one threshold.
pub fn below_threshold() -> Vec<Scenario> {
    vec![
        case("volume just below 1,000,000", 100.0, 100.0, 99.99, 1.0, STANDARD),
        case("width just below 150", 149.99, 1.0, 1.0, 1.0, STANDARD),
        case("height just below 150", 1.0, 149.99, 1.0, 1.0, STANDARD),
        case("length just below 150", 1.0, 1.0, 149.99, 1.0, STANDARD),
        case("mass just below 20", 10.0, 10.0, 10.0, 19.99, STANDARD),
    ]
}
