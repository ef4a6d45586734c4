//! A collection of daily bars for a single ticker.

use crate::models::bar::{Bar, RawBar};

/// Represents a complete set of daily bars for a single ticker.
///
/// This struct groups the raw rows with their ticker, making the data set
/// self-describing. An empty `bars` vector is the soft-failure signal for
/// "no data was available"; callers must check [`BarSeries::is_empty`]
/// before handing the series to preprocessing.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The ticker this data represents (e.g. "AAPL").
    pub ticker: String,
    /// The raw, possibly-incomplete daily rows, in ascending date order.
    pub bars: Vec<RawBar>,
}

impl BarSeries {
    /// An empty series for the given ticker, the no-data soft-failure value.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            bars: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Drops every row with a missing value in any required column.
    ///
    /// No imputation. Surviving rows keep their original order, so the
    /// cleaned series stays index-aligned with the dates it retains.
    pub fn drop_missing(&self) -> Vec<Bar> {
        self.bars.iter().filter_map(Bar::from_raw).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn raw(day: u32, close: Option<f64>) -> RawBar {
        RawBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: Some(1.0),
            high: Some(2.0),
            low: Some(0.5),
            close,
            adj_close: Some(1.4),
            volume: Some(100.0),
        }
    }

    #[test]
    fn empty_series_is_empty() {
        let series = BarSeries::empty("AAPL");
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.drop_missing().is_empty());
    }

    #[test]
    fn drop_missing_removes_incomplete_rows_only() {
        let series = BarSeries {
            ticker: "AAPL".to_string(),
            bars: vec![raw(2, Some(1.5)), raw(3, None), raw(4, Some(1.6))],
        };
        let clean = series.drop_missing();
        assert_eq!(clean.len(), 2);
        assert_eq!(clean[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(clean[1].close, 1.6);
    }
}
