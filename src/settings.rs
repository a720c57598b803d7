use bon::Builder;

#[derive(Builder, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[builder(derive(Clone, Debug))]
pub struct Settings {
    /// Relative tolerance for the sum check, scaled by `max(|sum|, 1)`.
    #[builder(default = default::relative_tolerance())]
    #[cfg_attr(
        feature = "serde",
        serde(alias = "reltol", default = "default::relative_tolerance")
    )]
    pub relative_tolerance: f64,

    /// Absolute floor for the sum check.
    #[builder(default = default::absolute_tolerance())]
    #[cfg_attr(
        feature = "serde",
        serde(alias = "abstol", default = "default::absolute_tolerance")
    )]
    pub absolute_tolerance: f64,

    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    pub search: Search,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    /// Whether `sum` is close enough to 1 for the table to be accepted.
    ///
    /// `epsilon` is the machine epsilon of the type the probabilities were
    /// given in; the absolute tolerance never drops below it. Negative or NaN
    /// tolerances count as zero.
    pub fn sums_to_one(&self, sum: f64, epsilon: f64) -> bool {
        let relative = self.relative_tolerance.max(0.0) * sum.abs().max(1.0);
        let absolute = self.absolute_tolerance.max(0.0).max(epsilon);
        (sum - 1.0).abs() <= relative.max(absolute)
    }
}

/// How a draw is mapped onto the cumulative table.
///
/// Both strategies pick the first entry whose cumulative probability strictly
/// exceeds the draw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Search {
    #[default]
    Linear,
    Binary,
}

#[rustfmt::skip]
mod default {
    pub(super) fn relative_tolerance() -> f64 { 1e-9 }
    pub(super) fn absolute_tolerance() -> f64 { f64::EPSILON }
}
