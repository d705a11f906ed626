use stocks::transforms::{diffs, pchanges, pdiffs, ratios};
use stocks::TransformError;

fn series() -> Vec<f64> {
    vec![150.0, 151.5, 149.0, 152.25, 155.0, 154.0, 158.5, 160.0]
}

#[test]
fn output_length_is_input_length_minus_lag() {
    let data = series();
    for lag in 1..data.len() {
        assert_eq!(diffs(&data, lag).unwrap().len(), data.len() - lag);
        assert_eq!(pdiffs(&data, lag).unwrap().len(), data.len() - lag);
        assert_eq!(pchanges(&data, lag).unwrap().len(), data.len() - lag);
    }
    assert_eq!(ratios(&data).unwrap().len(), data.len() - 1);
}

#[test]
fn diffs_compare_each_value_to_earlier_one() {
    let data = series();
    let lag = 3;
    let result = diffs(&data, lag).unwrap();
    for (i, value) in result.iter().enumerate() {
        assert_eq!(*value, data[i + lag] - data[i]);
    }
}

#[test]
fn ratios_equal_pdiffs_plus_one_without_zeros() {
    let data = series();
    let ratio_values = ratios(&data).unwrap();
    let pdiff_values = pdiffs(&data, 1).unwrap();
    for (i, (ratio, pdiff)) in ratio_values.iter().zip(pdiff_values.iter()).enumerate() {
        assert_eq!(*ratio, data[i + 1] / data[i]);
        assert!((ratio - (pdiff + 1.0)).abs() < 1e-12);
    }
}

#[test]
fn pchanges_are_hundred_times_pdiffs() {
    let data = series();
    for lag in 1..4 {
        let changes = pchanges(&data, lag).unwrap();
        let proportional = pdiffs(&data, lag).unwrap();
        for (change, pdiff) in changes.iter().zip(proportional.iter()) {
            assert!((change - 100.0 * pdiff).abs() < 1e-9);
        }
    }
}

#[test]
fn lag_equal_to_length_is_invalid() {
    let data = series();
    let lag = data.len();
    let expected = TransformError::InvalidArgument {
        lag: lag as i64,
        len: lag,
    };
    assert_eq!(diffs(&data, lag).unwrap_err(), expected);
    assert_eq!(pdiffs(&data, lag).unwrap_err(), expected);
    assert_eq!(pchanges(&data, lag).unwrap_err(), expected);
}

#[test]
fn empty_input_is_invalid_for_any_lag() {
    for lag in [1, 2, 10] {
        assert!(matches!(
            diffs(&[], lag),
            Err(TransformError::InvalidArgument { len: 0, .. })
        ));
    }
}

#[test]
fn zero_denominator_yields_infinity() {
    let result = pdiffs(&[5.0, 0.0, 5.0], 1).unwrap();
    assert_eq!(result, vec![-1.0, f64::INFINITY]);

    let changes = pchanges(&[0.0, 0.0], 1).unwrap();
    assert!(changes[0].is_nan());
}
