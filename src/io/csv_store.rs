//! CSV persistence for raw and processed series.
//!
//! The raw format mirrors the conventional market-data export: first column
//! `Date` (ISO 8601), then `Open,High,Low,Close,Adj Close,Volume`. The
//! processed format is `date,Close_Scaled`, one row per retained sample.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Error,
    models::{bar::RawBar, bar_series::BarSeries, request_params::DailyBarsParams},
};

/// Columns a raw file must carry to be usable downstream. `Adj Close` is
/// tolerated but not required.
const REQUIRED_RAW_COLUMNS: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

/// One row of the processed output: the retained date and its scaled close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRow {
    pub date: NaiveDate,
    #[serde(rename = "Close_Scaled")]
    pub close_scaled: f64,
}

/// Deterministic raw-file path: `{dir}/{ticker}_{start}_{end}.csv`.
pub fn raw_path(dir: &Path, params: &DailyBarsParams) -> PathBuf {
    dir.join(format!("{}.csv", params.file_stem()))
}

/// Processed-series path: `{dir}/{ticker}_scaled.csv`.
pub fn processed_path(dir: &Path, ticker: &str) -> PathBuf {
    dir.join(format!("{ticker}_scaled.csv"))
}

/// Scaler-artifact path: `{dir}/{ticker}_scaler.json`.
pub fn scaler_path(dir: &Path, ticker: &str) -> PathBuf {
    dir.join(format!("{ticker}_scaler.json"))
}

pub fn write_raw(path: &Path, series: &BarSeries) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for bar in &series.bars {
        writer.serialize(bar)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a previously persisted raw file back into a [`BarSeries`].
///
/// A file missing any required column is a configuration error, reported
/// with the offending column name rather than a row-level decode failure.
pub fn read_raw(path: &Path, ticker: &str) -> Result<BarSeries, Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_RAW_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::Config(format!(
                "raw file {} is missing required column '{column}'",
                path.display()
            )));
        }
    }

    let mut bars = Vec::new();
    for record in reader.deserialize::<RawBar>() {
        bars.push(record?);
    }

    Ok(BarSeries {
        ticker: ticker.to_string(),
        bars,
    })
}

pub fn write_processed(path: &Path, rows: &[ScaledRow]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> BarSeries {
        BarSeries {
            ticker: "AAPL".to_string(),
            bars: vec![
                RawBar {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    open: Some(184.2),
                    high: Some(185.9),
                    low: Some(183.4),
                    close: Some(185.6),
                    adj_close: Some(184.9),
                    volume: Some(58_414_500.0),
                },
                RawBar {
                    date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                    open: None,
                    high: Some(185.0),
                    low: Some(182.7),
                    close: Some(184.2),
                    adj_close: None,
                    volume: Some(58_000_000.0),
                },
            ],
        }
    }

    #[test]
    fn raw_round_trip_preserves_rows_and_nulls() {
        let tmp = tempfile::tempdir().unwrap();
        let series = sample_series();
        let params = DailyBarsParams {
            ticker: "AAPL".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };

        let path = raw_path(tmp.path(), &params);
        write_raw(&path, &series).unwrap();

        let loaded = read_raw(&path, "AAPL").unwrap();
        assert_eq!(loaded, series);
        assert_eq!(loaded.bars[1].open, None);
    }

    #[test]
    fn raw_header_starts_with_date() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        write_raw(&path, &sample_series()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, "Date,Open,High,Low,Close,Adj Close,Volume");
    }

    #[test]
    fn read_raw_rejects_missing_close_column() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.csv");
        std::fs::write(&path, "Date,Open,High,Low,Volume\n2024-01-02,1,2,0.5,100\n").unwrap();

        match read_raw(&path, "AAPL") {
            Err(Error::Config(message)) => assert!(message.contains("'Close'")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn processed_rows_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = processed_path(tmp.path(), "AAPL");
        let rows = vec![
            ScaledRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                close_scaled: 0.0,
            },
            ScaledRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                close_scaled: 1.0,
            },
        ];

        write_processed(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("date,Close_Scaled\n"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let loaded: Vec<ScaledRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(loaded, rows);
    }
}
