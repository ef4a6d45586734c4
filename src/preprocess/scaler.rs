//! Reversible min-max normalization.
//!
//! Fitting is split from transforming: [`MinMaxScaler::fit_transform`]
//! produces an immutable [`FittedMinMax`] parameter set, and the actual
//! mapping lives on that struct as pure functions. The stateful wrapper
//! exists for the ergonomics of the fit-then-transform call pattern; the
//! persisted artifact is always the parameter struct.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    /// `transform` or `inverse_transform` called before `fit_transform`.
    #[error("scaler has not been fitted; call fit_transform first")]
    NotFitted,

    /// A row's feature count does not match the fitted parameters.
    #[error("expected {expected} feature column(s), got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Fitting requires at least one row with at least one column.
    #[error("cannot fit scaler on empty data")]
    EmptyFit,
}

/// Immutable parameters of a fitted min-max mapping.
///
/// Holds the observed per-column minimum and maximum of the fit data plus
/// the target range. Serialized as the scaler artifact so a later run can
/// reconstruct the identical mapping for inverse-transforming predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedMinMax {
    /// Target range `(low, high)` the fit data maps onto.
    pub feature_range: (f64, f64),
    /// Observed minimum per fitted column.
    pub data_min: Vec<f64>,
    /// Observed maximum per fitted column.
    pub data_max: Vec<f64>,
}

impl FittedMinMax {
    /// Computes per-column min/max over row-major `data`.
    ///
    /// Every row must have the same number of columns as the first one;
    /// ragged input yields `ShapeMismatch`.
    pub fn fit(data: &[Vec<f64>], feature_range: (f64, f64)) -> Result<Self, ScaleError> {
        let num_features = data.first().map(|row| row.len()).unwrap_or(0);
        if num_features == 0 {
            return Err(ScaleError::EmptyFit);
        }

        let mut data_min = vec![f64::INFINITY; num_features];
        let mut data_max = vec![f64::NEG_INFINITY; num_features];

        for row in data {
            if row.len() != num_features {
                return Err(ScaleError::ShapeMismatch {
                    expected: num_features,
                    got: row.len(),
                });
            }
            for (j, &x) in row.iter().enumerate() {
                data_min[j] = data_min[j].min(x);
                data_max[j] = data_max[j].max(x);
            }
        }

        Ok(Self {
            feature_range,
            data_min,
            data_max,
        })
    }

    pub fn num_features(&self) -> usize {
        self.data_min.len()
    }

    /// Applies `(x - min) / (max - min) * (high - low) + low` element-wise.
    ///
    /// A zero-variance column (`max == min`) maps every value to `low`;
    /// the division-by-zero case is defined away rather than left to
    /// produce NaN.
    pub fn transform(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ScaleError> {
        let (low, high) = self.feature_range;
        self.map_rows(data, |x, min, max| {
            if max == min {
                low
            } else {
                (x - min) / (max - min) * (high - low) + low
            }
        })
    }

    /// Exact algebraic inverse of [`transform`](Self::transform).
    ///
    /// For a zero-variance column every scaled value maps back to the
    /// fitted minimum, the only original value the column ever held.
    pub fn inverse_transform(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ScaleError> {
        let (low, high) = self.feature_range;
        self.map_rows(data, |y, min, max| {
            if max == min {
                min
            } else {
                (y - low) / (high - low) * (max - min) + min
            }
        })
    }

    fn map_rows(
        &self,
        data: &[Vec<f64>],
        f: impl Fn(f64, f64, f64) -> f64,
    ) -> Result<Vec<Vec<f64>>, ScaleError> {
        let expected = self.num_features();
        data.iter()
            .map(|row| {
                if row.len() != expected {
                    return Err(ScaleError::ShapeMismatch {
                        expected,
                        got: row.len(),
                    });
                }
                Ok(row
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| f(x, self.data_min[j], self.data_max[j]))
                    .collect())
            })
            .collect()
    }
}

/// Stateful fit-then-transform wrapper around [`FittedMinMax`].
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    feature_range: (f64, f64),
    fitted: Option<FittedMinMax>,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new((0.0, 1.0))
    }
}

impl MinMaxScaler {
    pub fn new(feature_range: (f64, f64)) -> Self {
        Self {
            feature_range,
            fitted: None,
        }
    }

    /// Fits on `data` and returns its scaled form.
    pub fn fit_transform(&mut self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ScaleError> {
        let fitted = FittedMinMax::fit(data, self.feature_range)?;
        let scaled = fitted.transform(data)?;
        self.fitted = Some(fitted);
        Ok(scaled)
    }

    /// Applies the previously fitted mapping to new data.
    pub fn transform(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ScaleError> {
        self.fitted
            .as_ref()
            .ok_or(ScaleError::NotFitted)?
            .transform(data)
    }

    /// Recovers original-scale values from scaled data.
    pub fn inverse_transform(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ScaleError> {
        self.fitted
            .as_ref()
            .ok_or(ScaleError::NotFitted)?
            .inverse_transform(data)
    }

    /// The fitted parameters, if `fit_transform` has been called.
    pub fn fitted(&self) -> Option<&FittedMinMax> {
        self.fitted.as_ref()
    }
}
