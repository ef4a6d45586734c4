//! End-to-end orchestration: load-or-fetch, clean, scale, persist.
//!
//! A run is sequential and independent of any other run. The raw layer is
//! idempotent (an existing raw file short-circuits the download); the
//! processed CSV and the scaler artifact are always recomputed and
//! overwritten.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{error, info, warn};
use serde::Deserialize;

use crate::{
    errors::Error,
    io::{
        artifact,
        csv_store::{self, ScaledRow},
        sink::{CsvSink, DataSink},
    },
    models::{
        bar::{PriceField, column_matrix},
        bar_series::BarSeries,
        request_params::DailyBarsParams,
    },
    preprocess::{
        scaler::{MinMaxScaler, ScaleError},
        window::make_sequences,
    },
    providers::DataProvider,
};

fn default_raw_dir() -> PathBuf {
    PathBuf::from("data/raw")
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("data/processed")
}

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// Run configuration, deserialized from a TOML file.
///
/// ```toml
/// ticker = "AAPL"
/// start = "2015-01-01"
/// end = "2025-11-29"
/// raw_dir = "data/raw"
/// processed_dir = "data/processed"
/// feature_range = [0.0, 1.0]
/// window_length = 30
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,

    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,

    /// Target range for the scaled close column.
    #[serde(default = "default_feature_range")]
    pub feature_range: (f64, f64),

    /// When set, the run also reports how many training sequences of this
    /// length the scaled series yields.
    #[serde(default)]
    pub window_length: Option<usize>,
}

impl RunConfig {
    pub fn from_path(path: &str) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config {path}: {e}")))
    }

    pub fn params(&self) -> DailyBarsParams {
        DailyBarsParams {
            ticker: self.ticker.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// What a pipeline run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Nothing to do: the fetch returned no rows, or cleaning removed all
    /// of them. No processed output was written.
    NoData,
    Completed {
        rows_raw: usize,
        rows_clean: usize,
        processed_path: PathBuf,
        scaler_path: PathBuf,
        num_sequences: Option<usize>,
    },
}

/// Fetches daily bars and persists them as a raw CSV.
///
/// Ensures `destination_dir` exists, requests `[start, end]` from the
/// provider, and writes `{ticker}_{start}_{end}.csv` on success. Provider
/// failures and empty results both degrade to an empty series (logged,
/// never raised); callers must check emptiness before proceeding. Only
/// local I/O failures surface as errors.
pub async fn fetch(
    provider: &dyn DataProvider,
    params: &DailyBarsParams,
    destination_dir: &Path,
) -> Result<BarSeries, Error> {
    std::fs::create_dir_all(destination_dir)?;

    info!(
        "fetching daily bars for {} from {} to {}",
        params.ticker, params.start, params.end
    );

    let series = match provider.fetch_daily_bars(params).await {
        Ok(series) => series,
        Err(e) => {
            error!("fetch for {} failed: {e}", params.ticker);
            return Ok(BarSeries::empty(params.ticker.clone()));
        }
    };

    if series.is_empty() {
        warn!(
            "no data for {} in {}..={}",
            params.ticker, params.start, params.end
        );
        return Ok(series);
    }

    let sink = CsvSink::new(destination_dir, params.clone());
    let path = sink.write(&series).await?;
    info!("wrote {} raw rows to {}", series.len(), path.display());

    Ok(series)
}

/// Runs the full pipeline for one ticker.
pub async fn run(config: &RunConfig, provider: &dyn DataProvider) -> Result<RunOutcome, Error> {
    let params = config.params();
    let raw_file = csv_store::raw_path(&config.raw_dir, &params);

    let series = if raw_file.exists() {
        info!("loading raw data from {}", raw_file.display());
        csv_store::read_raw(&raw_file, &params.ticker)?
    } else {
        fetch(provider, &params, &config.raw_dir).await?
    };

    if series.is_empty() {
        warn!(
            "no rows available for {}; stopping before preprocessing",
            params.ticker
        );
        return Ok(RunOutcome::NoData);
    }

    let rows_raw = series.len();
    let bars = series.drop_missing();
    if bars.is_empty() {
        warn!(
            "cleaning dropped all {rows_raw} rows for {}; stopping",
            params.ticker
        );
        return Ok(RunOutcome::NoData);
    }

    let mut scaler = MinMaxScaler::new(config.feature_range);
    let matrix = column_matrix(&bars, &[PriceField::Close]);
    let scaled = scaler.fit_transform(&matrix)?;

    let rows: Vec<ScaledRow> = bars
        .iter()
        .zip(&scaled)
        .map(|(bar, row)| ScaledRow {
            date: bar.date,
            close_scaled: row[0],
        })
        .collect();

    std::fs::create_dir_all(&config.processed_dir)?;
    let processed_path = csv_store::processed_path(&config.processed_dir, &params.ticker);
    csv_store::write_processed(&processed_path, &rows)?;

    let scaler_path = csv_store::scaler_path(&config.processed_dir, &params.ticker);
    let fitted = scaler.fitted().ok_or(ScaleError::NotFitted)?;
    artifact::save_scaler(&scaler_path, fitted)?;

    let num_sequences = config
        .window_length
        .map(|len| make_sequences(&scaled, len).len());
    if let (Some(len), Some(count)) = (config.window_length, num_sequences) {
        info!("scaled series yields {count} sequences of length {len}");
    }

    info!(
        "run complete for {}: {rows_raw} raw rows, {} after cleaning; outputs {} and {}",
        params.ticker,
        bars.len(),
        processed_path.display(),
        scaler_path.display()
    );

    Ok(RunOutcome::Completed {
        rows_raw,
        rows_clean: bars.len(),
        processed_path,
        scaler_path,
        num_sequences,
    })
}
