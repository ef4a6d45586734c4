use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters for requesting daily bar data from a market data provider.
///
/// Vendor-agnostic: every [`DataProvider`](crate::providers::DataProvider)
/// implementation takes this as its input. The pipeline works on calendar
/// dates; conversion to provider-specific timestamps happens inside each
/// provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBarsParams {
    /// The ticker symbol to request (e.g. `"AAPL"`).
    pub ticker: String,

    /// Start of the requested date range (inclusive).
    pub start: NaiveDate,

    /// End of the requested date range (inclusive).
    ///
    /// Providers whose APIs treat the upper bound as exclusive must widen
    /// it themselves so the caller-visible contract stays inclusive.
    pub end: NaiveDate,
}

impl DailyBarsParams {
    /// Deterministic file stem for this request, shared by the raw CSV
    /// writer and the load-or-fetch check: `{ticker}_{start}_{end}`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}_{}", self.ticker, self.start, self.end)
    }
}
