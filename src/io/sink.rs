use std::path::{Path, PathBuf};

use async_trait::async_trait;
use snafu::{Backtrace, ResultExt, Snafu};

use crate::{
    io::csv_store,
    models::{bar_series::BarSeries, request_params::DailyBarsParams},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// An error occurred while trying to write the data (e.g., file I/O error).
    #[snafu(display("Failed to write data: {message}"))]
    WriteError {
        message: String,
        backtrace: Backtrace,
    },

    /// An error occurred while converting the canonical `BarSeries` model
    /// into the destination format.
    #[snafu(display("Data conversion error: {message}"))]
    ConversionError {
        message: String,
        backtrace: Backtrace,
    },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait DataSink {
    /// The type of output returned after a successful write operation.
    ///
    /// A file sink returns the path it created; a database sink would
    /// return the number of rows inserted.
    type Output;

    /// Writes a `BarSeries` to the destination.
    async fn write(&self, series: &BarSeries) -> Result<Self::Output, SinkError>;
}

/// File sink for raw bar data.
///
/// Writes one CSV per request under `dir`, named by the deterministic
/// `{ticker}_{start}_{end}.csv` convention, creating the directory if it
/// does not exist. A second run with the same parameters overwrites the
/// file (last writer wins; no locking).
pub struct CsvSink {
    dir: PathBuf,
    params: DailyBarsParams,
}

impl CsvSink {
    pub fn new(dir: impl AsRef<Path>, params: DailyBarsParams) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            params,
        }
    }

    /// The path this sink will write to.
    pub fn target_path(&self) -> PathBuf {
        csv_store::raw_path(&self.dir, &self.params)
    }
}

#[async_trait]
impl DataSink for CsvSink {
    type Output = PathBuf;

    async fn write(&self, series: &BarSeries) -> Result<PathBuf, SinkError> {
        std::fs::create_dir_all(&self.dir).context(IoSnafu)?;

        let path = self.target_path();
        csv_store::write_raw(&path, series).map_err(|e| {
            WriteSnafu {
                message: format!("{}: {e}", path.display()),
            }
            .build()
        })?;

        Ok(path)
    }
}
