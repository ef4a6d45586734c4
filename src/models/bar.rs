//! Canonical in-memory representation of a daily price bar (OHLCV).
//!
//! Two shapes exist on purpose. [`RawBar`] is what a
//! [`DataProvider`](crate::providers::DataProvider) hands back: the source
//! can return nulls for any numeric column, so every column is an `Option`.
//! [`Bar`] is the fully-populated record that the preprocessing stages
//! operate on; the only way to get one is through cleaning, which drops
//! incomplete rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily bar as ingested from the source, before cleaning.
///
/// Column names in the serialized (CSV) form follow the conventional
/// market-data header: `Date,Open,High,Low,Close,Adj Close,Volume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    /// Calendar date of the bar. Dates are strictly increasing within a
    /// series; weekend/holiday gaps are expected and never filled.
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Open")]
    pub open: Option<f64>,

    #[serde(rename = "High")]
    pub high: Option<f64>,

    #[serde(rename = "Low")]
    pub low: Option<f64>,

    #[serde(rename = "Close")]
    pub close: Option<f64>,

    /// Split/dividend adjusted close. Not all sources supply this, and a
    /// raw file without the column is still readable.
    #[serde(rename = "Adj Close", default)]
    pub adj_close: Option<f64>,

    #[serde(rename = "Volume")]
    pub volume: Option<f64>,
}

impl RawBar {
    /// True when every price column and the volume column hold a value.
    ///
    /// `adj_close` is deliberately excluded: sources that never supply it
    /// would otherwise empty the whole series.
    pub fn is_complete(&self) -> bool {
        self.open.is_some()
            && self.high.is_some()
            && self.low.is_some()
            && self.close.is_some()
            && self.volume.is_some()
    }
}

/// A fully-populated daily bar, produced by cleaning a [`RawBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: Option<f64>,
    pub volume: f64,
}

impl Bar {
    /// Converts a raw row into a clean bar, or `None` if any required
    /// column is missing.
    pub fn from_raw(raw: &RawBar) -> Option<Self> {
        Some(Self {
            date: raw.date,
            open: raw.open?,
            high: raw.high?,
            low: raw.low?,
            close: raw.close?,
            adj_close: raw.adj_close,
            volume: raw.volume?,
        })
    }
}

/// Named numeric column of a [`Bar`], selected for scaling.
///
/// Column selection is decided once, here, at the typed boundary; there is
/// no string-keyed column lookup anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl PriceField {
    pub fn value(&self, bar: &Bar) -> f64 {
        match self {
            PriceField::Open => bar.open,
            PriceField::High => bar.high,
            PriceField::Low => bar.low,
            PriceField::Close => bar.close,
            PriceField::Volume => bar.volume,
        }
    }
}

/// Extracts the selected columns from a slice of bars as a row-major
/// matrix, the input shape the scaler works on.
pub fn column_matrix(bars: &[Bar], fields: &[PriceField]) -> Vec<Vec<f64>> {
    bars.iter()
        .map(|bar| fields.iter().map(|f| f.value(bar)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(close: Option<f64>) -> RawBar {
        RawBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: Some(1.0),
            high: Some(2.0),
            low: Some(0.5),
            close,
            adj_close: None,
            volume: Some(1000.0),
        }
    }

    #[test]
    fn complete_raw_bar_converts() {
        let bar = Bar::from_raw(&raw(Some(1.5))).unwrap();
        assert_eq!(bar.close, 1.5);
        assert_eq!(bar.adj_close, None);
    }

    #[test]
    fn missing_close_is_incomplete() {
        let r = raw(None);
        assert!(!r.is_complete());
        assert!(Bar::from_raw(&r).is_none());
    }

    #[test]
    fn missing_adj_close_is_still_complete() {
        assert!(raw(Some(1.5)).is_complete());
    }

    #[test]
    fn column_matrix_shape() {
        let bar = Bar::from_raw(&raw(Some(1.5))).unwrap();
        let matrix = column_matrix(
            &[bar.clone(), bar],
            &[PriceField::Close, PriceField::Volume],
        );
        assert_eq!(matrix, vec![vec![1.5, 1000.0], vec![1.5, 1000.0]]);
    }
}
