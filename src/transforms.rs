//! Lagged Transforms
//!
//! This module provides the four stateless lagged transforms: differences,
//! proportional differences, percent changes and ratios. They operate on raw
//! f64 slices and always return a freshly allocated vector of `len - lag`
//! values.

pub mod lag;
pub mod primitives;
pub mod registry;

use crate::error::TransformError;
use lag::{apply_lagged, Lag};
use primitives::{lagged_difference, percent_change, proportional_difference, ratio};

/// Lag used when a caller does not specify one.
pub const DEFAULT_LAG: usize = 1;

/// The four lagged transforms, addressable by a stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Diffs,
    PDiffs,
    PChanges,
    Ratios,
}

impl Transform {
    /// Stable name used for lookup.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Diffs => "diffs",
            Transform::PDiffs => "pdiffs",
            Transform::PChanges => "pchanges",
            Transform::Ratios => "ratios",
        }
    }

    /// Parses a stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "diffs" => Some(Transform::Diffs),
            "pdiffs" => Some(Transform::PDiffs),
            "pchanges" => Some(Transform::PChanges),
            "ratios" => Some(Transform::Ratios),
            _ => None,
        }
    }

    /// Whether the caller chooses the lag. `Ratios` always uses a lag of 1.
    pub fn takes_lag(self) -> bool {
        !matches!(self, Transform::Ratios)
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Transform::Diffs => "Lagged differences x[i+lag] - x[i]",
            Transform::PDiffs => "Proportional differences (x[i+lag] - x[i]) / x[i]",
            Transform::PChanges => "Percent changes 100 * (x[i+lag] - x[i]) / x[i]",
            Transform::Ratios => "Ratios of consecutive values x[i+1] / x[i]",
        }
    }

    /// Applies the transform to `x`. The lag is ignored for `Ratios`.
    pub fn apply(self, x: &[f64], lag: usize) -> Result<Vec<f64>, TransformError> {
        match self {
            Transform::Diffs => diffs(x, lag),
            Transform::PDiffs => pdiffs(x, lag),
            Transform::PChanges => pchanges(x, lag),
            Transform::Ratios => ratios(x),
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculates lagged differences of a series.
///
/// Uses the formula: x[i+lag] - x[i]
///
/// # Arguments
/// * `x` - Slice of values
/// * `lag` - Distance between compared elements (>= 1)
///
/// # Returns
/// Vector of `x.len() - lag` differences
///
/// # Errors
/// `TransformError::InvalidArgument` when `lag` is 0 or `lag >= x.len()`.
///
/// # Examples
/// ```
/// use stocks::transforms::diffs;
///
/// let values = vec![1.0, 2.0, 4.0, 8.0];
/// assert_eq!(diffs(&values, 1).unwrap(), vec![1.0, 2.0, 4.0]);
/// assert!(diffs(&values, 4).is_err());
/// ```
pub fn diffs(x: &[f64], lag: usize) -> Result<Vec<f64>, TransformError> {
    let lag = Lag::new(lag, x.len())?;
    Ok(apply_lagged(x, lag, lagged_difference))
}

/// Calculates proportional differences of a series.
///
/// Uses the formula: (x[i+lag] - x[i]) / x[i]
///
/// # Behavior
/// - A zero earlier value yields `Inf` or `NaN`, not an error
/// - NaN values in input propagate to the output
///
/// # Examples
/// ```
/// use stocks::transforms::pdiffs;
///
/// let result = pdiffs(&[5.0, 0.0, 5.0], 1).unwrap();
/// assert_eq!(result, vec![-1.0, f64::INFINITY]);
/// ```
pub fn pdiffs(x: &[f64], lag: usize) -> Result<Vec<f64>, TransformError> {
    let lag = Lag::new(lag, x.len())?;
    Ok(apply_lagged(x, lag, proportional_difference))
}

/// Calculates percent changes of a series.
///
/// Uses the formula: 100 * (x[i+lag] - x[i]) / x[i]
///
/// # Examples
/// ```
/// use stocks::transforms::pchanges;
///
/// assert_eq!(pchanges(&[10.0, 5.0, 20.0], 2).unwrap(), vec![100.0]);
/// ```
pub fn pchanges(x: &[f64], lag: usize) -> Result<Vec<f64>, TransformError> {
    let lag = Lag::new(lag, x.len())?;
    Ok(apply_lagged(x, lag, percent_change))
}

/// Calculates ratios of consecutive values, x[i+1] / x[i].
///
/// # Errors
/// `TransformError::InvalidArgument` when `x` has fewer than two values.
pub fn ratios(x: &[f64]) -> Result<Vec<f64>, TransformError> {
    let lag = Lag::new(1, x.len())?;
    Ok(apply_lagged(x, lag, ratio))
}
