//! Handling categories produced by the classifier.

use std::fmt;
use std::str::FromStr;

/// Handling category for a package.
///
/// Severity increases from [`Category::Standard`] to [`Category::Rejected`];
/// the derived ordering follows that severity.
///
/// # Example
///
/// ```
/// use parcelsort_core::Category;
///
/// let c: Category = "SPECIAL".parse().unwrap();
/// assert_eq!(c, Category::Special);
/// assert_eq!(c.to_string(), "SPECIAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Category {
    /// Neither bulky nor heavy.
    Standard,
    /// Bulky or heavy, but not both.
    Special,
    /// Bulky and heavy.
    Rejected,
}

impl Category {
    /// All categories in severity order.
    pub const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    /// Combines the bulky and heavy flags into a category.
    pub fn from_flags(is_bulky: bool, is_heavy: bool) -> Self {
        match (is_bulky, is_heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }

    /// Returns the external label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    pub label: String,
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}': expected STANDARD, SPECIAL or REJECTED",
            self.label
        )
    }
}

impl std::error::Error for CategoryParseError {}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError {
                label: s.to_string(),
            })
    }
}
