//! CSV ingestion and train/test splitting.
//!
//! A thin collaborator around the core types: it only builds
//! [`Matrix`]/[`Vector`] values and never reaches into solver internals.

use crate::matrix::Matrix;
use crate::vector::Vector;
use log::debug;
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::Path;
use thiserror::Error;

/// Failures while loading or splitting tabular data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The CSV file could not be opened or read.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The data does not describe a usable dataset.
    #[error("invalid data: {0}")]
    Shape(String),
}

/// A feature matrix paired with a target vector, one sample per row.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Matrix,
    pub targets: Vector,
}

impl Dataset {
    /// Pairs features with targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of feature rows differs from the
    /// number of targets.
    pub fn new(features: Matrix, targets: Vector) -> Result<Self, DataError> {
        if features.n_rows() != targets.len() {
            return Err(DataError::Shape(format!(
                "{} feature rows but {} targets",
                features.n_rows(),
                targets.len()
            )));
        }
        Ok(Self { features, targets })
    }

    /// Loads a dataset from a CSV file with a header row.
    ///
    /// `feature_cols` selects the zero-based columns used as features and
    /// `target_col` the column used as the target. Rows that are too short
    /// or contain non-numeric values in the selected columns are skipped,
    /// matching tolerant ingestion of real-world files; the skip count is
    /// logged at debug level.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or no row parses.
    pub fn from_csv(
        path: impl AsRef<Path>,
        feature_cols: &[usize],
        target_col: usize,
    ) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let mut features: Vec<f64> = Vec::new();
        let mut targets: Vec<f64> = Vec::new();
        let mut skipped = 0usize;

        for record in reader.records() {
            let record = record?;
            let mut row = Vec::with_capacity(feature_cols.len());
            for &col in feature_cols {
                match record.get(col).and_then(|s| s.trim().parse::<f64>().ok()) {
                    Some(v) => row.push(v),
                    None => break,
                }
            }
            let target = record
                .get(target_col)
                .and_then(|s| s.trim().parse::<f64>().ok());

            match target {
                Some(t) if row.len() == feature_cols.len() => {
                    features.extend_from_slice(&row);
                    targets.push(t);
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("skipped {skipped} unparseable csv rows");
        }
        if targets.is_empty() {
            return Err(DataError::Shape("no parseable rows in file".to_string()));
        }

        let n_samples = targets.len();
        let features = Matrix::from_vec(n_samples, feature_cols.len(), features)
            .map_err(|e| DataError::Shape(e.to_string()))?;
        Self::new(features, Vector::from_vec(targets))
    }

    /// Returns the number of samples.
    pub fn n_samples(&self) -> usize {
        self.features.n_rows()
    }

    /// Returns the number of features per sample.
    pub fn n_features(&self) -> usize {
        self.features.n_cols()
    }

    /// Shuffles the samples and splits them into train and test subsets.
    ///
    /// `test_size` is the fraction held out for testing, strictly between
    /// 0 and 1. Passing a seed makes the shuffle reproducible; `None` draws
    /// fresh entropy.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range `test_size` or if either split
    /// would be empty.
    pub fn train_test_split(
        &self,
        test_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), DataError> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(DataError::Shape(format!(
                "test_size must be between 0 and 1, got {test_size}"
            )));
        }

        let n = self.n_samples();
        let n_test = (n as f64 * test_size).round() as usize;
        let n_train = n - n_test;
        if n_train == 0 || n_test == 0 {
            return Err(DataError::Shape(format!(
                "cannot split {n} samples into {n_train} train and {n_test} test"
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        indices.shuffle(&mut rng);

        let train = self.subset(&indices[..n_train]);
        let test = self.subset(&indices[n_train..]);
        Ok((train, test))
    }

    fn subset(&self, indices: &[usize]) -> Self {
        let k = self.n_features();
        let features = Array2::from_shape_fn((indices.len(), k), |(i, j)| {
            self.features.data[[indices[i], j]]
        });
        let targets = indices
            .iter()
            .map(|&i| self.targets.data[i])
            .collect::<Array1<f64>>();
        Self {
            features: Matrix::from(features),
            targets: Vector::from(targets),
        }
    }
}
