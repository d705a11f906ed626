use crate::error::TransformError;

/// Validated lag distance for a series of known length.
///
/// A `Lag` only exists when `1 <= lag < len`, so a transform holding one can
/// always produce exactly `len - lag` outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lag(usize);

impl Lag {
    /// Validates `lag` against a series of `len` values.
    pub fn new(lag: usize, len: usize) -> Result<Self, TransformError> {
        if lag == 0 || lag >= len {
            return Err(TransformError::InvalidArgument {
                lag: i64::try_from(lag).unwrap_or(i64::MAX),
                len,
            });
        }
        Ok(Lag(lag))
    }

    /// Validates a host-side signed lag, rejecting zero and negative values.
    pub fn from_signed(lag: i64, len: usize) -> Result<Self, TransformError> {
        let unsigned =
            usize::try_from(lag).map_err(|_| TransformError::InvalidArgument { lag, len })?;
        Lag::new(unsigned, len)
    }

    /// Lag distance (e.g., 5 for a 5-period lag).
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of outputs produced for a series of `len` values.
    pub fn output_len(self, len: usize) -> usize {
        len - self.0
    }
}

/// Applies `primitive(current, lagged)` to every pair `(x[i + lag], x[i])`.
pub fn apply_lagged<F>(x: &[f64], lag: Lag, primitive: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut result = Vec::with_capacity(lag.output_len(x.len()));
    for (&lagged, &current) in x.iter().zip(x.iter().skip(lag.get())) {
        result.push(primitive(current, lagged));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lag_must_be_smaller_than_length() {
        assert!(Lag::new(3, 4).is_ok());
        assert_eq!(
            Lag::new(4, 4),
            Err(TransformError::InvalidArgument { lag: 4, len: 4 })
        );
    }

    #[test]
    fn zero_lag_is_rejected() {
        assert_eq!(
            Lag::new(0, 10),
            Err(TransformError::InvalidArgument { lag: 0, len: 10 })
        );
    }

    #[test]
    fn negative_signed_lag_is_rejected() {
        assert_eq!(
            Lag::from_signed(-2, 10),
            Err(TransformError::InvalidArgument { lag: -2, len: 10 })
        );
        assert_eq!(Lag::from_signed(2, 10).map(Lag::get), Ok(2));
    }

    #[test]
    fn apply_lagged_pairs_current_with_earlier_value() {
        let data = [1.0, 2.0, 4.0, 8.0, 16.0];
        let lag = Lag::new(2, data.len()).unwrap();
        let result = apply_lagged(&data, lag, |current, lagged| current - lagged);
        assert_eq!(result, vec![3.0, 6.0, 12.0]);
        assert_eq!(result.len(), lag.output_len(data.len()));
    }
}
