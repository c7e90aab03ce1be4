//! Regression evaluation metrics.
//!
//! Thin collaborators over [`Vector`]: they only read entries and never
//! touch solver internals.

use crate::error::{LinAlgError, Result};
use crate::vector::Vector;

fn check_same_len(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(LinAlgError::SizeMismatch(format!(
            "vector lengths {} and {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    Ok(())
}

/// Mean of the squared residuals.
pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    let diff = &y_true.data - &y_pred.data;
    Ok(diff.mapv(|x| x * x).mean().unwrap_or(0.0))
}

/// Square root of the mean squared error.
pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

/// Mean of the absolute residuals.
pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_same_len(y_true, y_pred)?;
    let diff = &y_true.data - &y_pred.data;
    Ok(diff.mapv(f64::abs).mean().unwrap_or(0.0))
}

/// Coefficient of determination.
///
/// Returns `1.0` when the target variance is zero (perfect prediction of a
/// constant).
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_same_len(y_true, y_pred)?;

    let y_mean = y_true.data.mean().unwrap_or(0.0);
    let ss_res = (&y_true.data - &y_pred.data).mapv(|x| x * x).sum();
    let ss_tot = y_true.data.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_squared_error() {
        let y_true = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let y_pred = Vector::from_vec(vec![1.0, 2.0, 5.0]);

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_root_mean_squared_error() {
        let y_true = Vector::from_vec(vec![0.0, 0.0]);
        let y_pred = Vector::from_vec(vec![3.0, 4.0]);

        let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((rmse - (12.5f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = Vector::from_vec(vec![1.0, -1.0]);
        let y_pred = Vector::from_vec(vec![2.0, 1.0]);

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mae - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_r2_score_perfect_prediction() {
        let y = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let r2 = r2_score(&y, &y).unwrap();
        assert!((r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r2_score_constant_target() {
        let y_true = Vector::from_vec(vec![2.0, 2.0]);
        let y_pred = Vector::from_vec(vec![2.0, 2.0]);
        assert_eq!(r2_score(&y_true, &y_pred).unwrap(), 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let a = Vector::new(2);
        let b = Vector::new(3);
        assert!(matches!(
            mean_squared_error(&a, &b),
            Err(LinAlgError::SizeMismatch(_))
        ));
        assert!(matches!(
            r2_score(&a, &b),
            Err(LinAlgError::SizeMismatch(_))
        ));
    }
}
