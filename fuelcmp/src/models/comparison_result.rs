// src/models/comparison_result.rs
use crate::models::Fuel;

/// Ratios strictly below this favour ethanol.
pub const ALCOHOL_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub ratio: f64,
    pub recommended: Fuel,
}

impl ComparisonResult {
    #[inline]
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let recommended = if ratio < ALCOHOL_THRESHOLD {
            Fuel::Alcohol
        } else {
            Fuel::Gasoline
        };
        Self { ratio, recommended }
    }

    /// Ratio rounded to two decimal places, e.g. `0.70`.
    #[inline]
    #[must_use]
    pub fn ratio_text(&self) -> String {
        format!("{:.2}", self.ratio)
    }

    /// Share of the indicator bar to fill, within `[0, 1]`.
    ///
    /// Ratios above 1 (including infinity) fill the whole bar.
    #[inline]
    #[must_use]
    pub fn bar_fraction(&self) -> f64 {
        if self.ratio.is_nan() {
            return 1.0;
        }
        self.ratio.clamp(0.0, 1.0)
    }
}
