//! Stateless pair primitives used by the lagged transforms.
//!
//! Each primitive combines the current value with the value `lag` positions
//! earlier. Non-finite inputs and zero denominators are not special-cased:
//! the result follows IEEE-754 arithmetic.

/// Difference between the current and the lagged value.
pub fn lagged_difference(current: f64, lagged: f64) -> f64 {
    current - lagged
}

/// Difference normalized by the lagged value.
pub fn proportional_difference(current: f64, lagged: f64) -> f64 {
    (current - lagged) / lagged
}

/// Proportional difference expressed in percent.
pub fn percent_change(current: f64, lagged: f64) -> f64 {
    100.0 * (current - lagged) / lagged
}

/// Current value divided by the lagged value.
pub fn ratio(current: f64, lagged: f64) -> f64 {
    current / lagged
}
