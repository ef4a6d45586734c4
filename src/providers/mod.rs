//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, which serves as a unified
//! interface for fetching daily bar data from any market data vendor.
//!
//! Each concrete provider implementation (such as the Yahoo chart API
//! provider in [`yahoo`]) implements [`DataProvider`] to handle
//! vendor-specific API logic and validation.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.

pub mod errors;
pub mod yahoo;

use async_trait::async_trait;

pub use errors::ProviderError;

use crate::models::{bar_series::BarSeries, request_params::DailyBarsParams};

#[async_trait]
pub trait DataProvider {
    /// Fetches daily bars for the requested ticker and date range.
    ///
    /// A range with no data (unknown ticker, market holidays only) is not
    /// an error: implementations return an empty [`BarSeries`] and leave
    /// the emptiness check to the caller.
    async fn fetch_daily_bars(&self, params: &DailyBarsParams) -> Result<BarSeries, ProviderError>;
}
