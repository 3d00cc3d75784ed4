use crate::common::*;

/// Rectangle as percentages of the image size, rounded to two decimals.
///
/// This is the labeling-tool convention. The rounding mode is half-even,
/// pinned so that converted artifacts are byte-for-byte reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentLTWH {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rounds to two decimal digits, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
