//! Small bundled datasets for demos and tests.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::primitives::{FeatureCode, FeatureMatrix};
use crate::schema::FeatureSchema;

/// Labeled categorical data with display names.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Feature codes, one row per sample
    pub features: FeatureMatrix,
    /// Label per row
    pub labels: Vec<bool>,
    /// Names of features and levels
    pub schema: FeatureSchema,
}

const BUYS_COMPUTER: [([FeatureCode; 4], bool); 14] = [
    ([0, 2, 0, 1], false),
    ([0, 2, 0, 0], false),
    ([1, 2, 0, 1], true),
    ([2, 1, 0, 1], true),
    ([2, 0, 1, 1], true),
    ([2, 0, 1, 0], false),
    ([1, 0, 1, 0], true),
    ([0, 1, 0, 1], false),
    ([0, 0, 1, 1], true),
    ([2, 1, 1, 1], true),
    ([0, 1, 1, 0], true),
    ([1, 1, 0, 0], true),
    ([1, 1, 1, 1], true),
    ([2, 1, 0, 0], false),
];

/// The classic 14-row "buys computer" table.
///
/// Features and levels:
/// - Age: Youth=0, Middle-Age=1, Senior=2
/// - Income: Low=0, Medium=1, High=2
/// - Student: Not Student=0, Student=1
/// - Credit Rating: Excellent=0, Fair=1
///
/// # Errors
///
/// Never fails for the bundled data; the `Result` comes from the
/// validating constructors.
///
/// # Examples
///
/// ```
/// use categorical_nb::datasets::buys_computer;
///
/// let data = buys_computer().expect("bundled data is valid");
/// assert_eq!(data.features.shape(), (14, 4));
/// assert_eq!(data.labels.iter().filter(|&&y| y).count(), 9);
/// ```
pub fn buys_computer() -> Result<Dataset> {
    let rows: Vec<[FeatureCode; 4]> = BUYS_COMPUTER.iter().map(|(row, _)| *row).collect();
    let labels = BUYS_COMPUTER.iter().map(|&(_, label)| label).collect();

    let schema = FeatureSchema::new(
        ["Age", "Income", "Student", "Credit Rating"]
            .iter()
            .map(|name| (*name).to_string())
            .collect(),
        vec![
            levels(&["Youth", "Middle-Age", "Senior"]),
            levels(&["Low", "Medium", "High"]),
            levels(&["Not Student", "Student"]),
            levels(&["Excellent", "Fair"]),
        ],
    )?;

    Ok(Dataset {
        features: FeatureMatrix::from_rows(&rows)?,
        labels,
        schema,
    })
}

fn levels(names: &[&str]) -> BTreeMap<FeatureCode, String> {
    (0..)
        .zip(names)
        .map(|(code, name)| (code, (*name).to_string()))
        .collect()
}
