//! Reference scenarios with their expected outcomes.

/// Expected outcome of classifying a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A category label (`STANDARD`, `SPECIAL` or `REJECTED`).
    Category(&'static str),
    /// The classifier must refuse the input.
    InvalidInput,
}

/// A named package measurement and the outcome the classifier must produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
    pub expected: Expected,
}

impl Scenario {
    const fn new(
        name: &'static str,
        values: [f64; 4],
        expected: Expected,
    ) -> Self {
        Self {
            name,
            width: values[0],
            height: values[1],
            length: values[2],
            mass: values[3],
            expected,
        }
    }

    /// Returns the four values in width/height/length/mass order.
    pub fn values(&self) -> [f64; 4] {
        [self.width, self.height, self.length, self.mass]
    }

    /// Returns the expected label, if the scenario is valid.
    pub fn expected_label(&self) -> Option<&'static str> {
        match self.expected {
            Expected::Category(label) => Some(label),
            Expected::InvalidInput => None,
        }
    }
}

/// The six reference scenarios.
pub const REFERENCE: [Scenario; 6] = [
    Scenario::new("standard", [90.0, 90.0, 90.0, 10.0], Expected::Category("STANDARD")),
    Scenario::new("bulky by width", [200.0, 50.0, 50.0, 15.0], Expected::Category("SPECIAL")),
    Scenario::new("bulky and heavy", [150.0, 150.0, 150.0, 25.0], Expected::Category("REJECTED")),
    Scenario::new("zero mass", [10.0, 10.0, 10.0, 0.0], Expected::Category("STANDARD")),
    Scenario::new("negative width", [-1.0, 10.0, 10.0, 5.0], Expected::InvalidInput),
    Scenario::new("both thresholds exact", [100.0, 100.0, 100.0, 20.0], Expected::Category("REJECTED")),
];

/// The built-in sample catalog as `(description, [w, h, l, m], label)`.
pub const CATALOG: [(&str, [f64; 4], &str); 3] = [
    ("Standard Package", [90.0, 90.0, 90.0, 10.0], "STANDARD"),
    ("Special Package (Bulky)", [200.0, 50.0, 50.0, 15.0], "SPECIAL"),
    ("Rejected Package (Both Bulky & Heavy)", [150.0, 150.0, 150.0, 25.0], "REJECTED"),
];

/// Inputs the classifier must refuse, one per failure mode and position.
pub fn invalid() -> Vec<Scenario> {
    let bad = [-1.0, -0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
    let mut out = Vec::new();
    for position in 0..4 {
        for value in bad {
            let mut values = [10.0, 10.0, 10.0, 5.0];
            values[position] = value;
            out.push(Scenario::new("invalid", values, Expected::InvalidInput));
        }
    }
    out
}
