use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate};
use reqwest::Client;

use crate::{
    models::{bar::RawBar, bar_series::BarSeries, request_params::DailyBarsParams},
    providers::{
        DataProvider, ProviderError,
        yahoo::response::{ChartResponse, ChartResult},
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = "stock_data_prep/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Daily bar provider backed by the public Yahoo Finance chart endpoint.
///
/// No credentials are required; the endpoint rejects requests without a
/// user agent, so the client pins one.
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    fn chart_url(&self, params: &DailyBarsParams) -> Result<String, ProviderError> {
        let period1 = midnight_utc(params.start)?;
        // The chart API treats period2 as exclusive; widen by one day so the
        // caller-visible range stays inclusive of `end`.
        let end_exclusive = params
            .end
            .checked_add_days(Days::new(1))
            .ok_or_else(|| ProviderError::Validation("end date out of range".to_string()))?;
        let period2 = midnight_utc(end_exclusive)?;

        Ok(format!(
            "{BASE_URL}/{}?period1={period1}&period2={period2}&interval=1d&events=div%2Csplit",
            params.ticker
        ))
    }
}

fn midnight_utc(date: NaiveDate) -> Result<i64, ProviderError> {
    let dt = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ProviderError::Internal(format!("invalid date: {date}")))?;
    Ok(dt.and_utc().timestamp())
}

/// Zips the column-oriented chart arrays into row-oriented raw bars.
///
/// Index gaps (nulls, or arrays shorter than the timestamp vector) become
/// `None` columns; dropping such rows is the cleaner's job, not ours.
fn bars_from_result(result: &ChartResult) -> Result<Vec<RawBar>, ProviderError> {
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| ProviderError::Internal("chart result without quote block".to_string()))?;
    let adjclose = result.indicators.adjclose.first();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let date = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| ProviderError::Internal(format!("invalid bar timestamp: {ts}")))?
            .date_naive();

        bars.push(RawBar {
            date,
            open: quote.open.get(i).copied().flatten(),
            high: quote.high.get(i).copied().flatten(),
            low: quote.low.get(i).copied().flatten(),
            close: quote.close.get(i).copied().flatten(),
            adj_close: adjclose.and_then(|a| a.adjclose.get(i).copied().flatten()),
            volume: quote.volume.get(i).copied().flatten().map(|v| v as f64),
        });
    }

    Ok(bars)
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_daily_bars(&self, params: &DailyBarsParams) -> Result<BarSeries, ProviderError> {
        if params.start > params.end {
            return Err(ProviderError::Validation(format!(
                "start date {} is after end date {}",
                params.start, params.end
            )));
        }

        let url = self.chart_url(params)?;
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(format!("{status}: {body}")));
        }

        let chart = response.json::<ChartResponse>().await?.chart;

        if let Some(error) = chart.error {
            return Err(ProviderError::Api(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        // An absent or empty result set is not an error: the caller decides
        // what an empty series means.
        let bars = match chart.result.as_ref().and_then(|r| r.first()) {
            Some(result) => bars_from_result(result)?,
            None => Vec::new(),
        };

        Ok(BarSeries {
            ticker: params.ticker.clone(),
            bars,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::providers::yahoo::response::{AdjClose, Indicators, Quote};

    use super::*;

    #[test]
    fn chart_url_widens_end_by_one_day() {
        let provider = YahooProvider::new().unwrap();
        let params = DailyBarsParams {
            ticker: "AAPL".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };

        let url = provider.chart_url(&params).unwrap();
        // 2024-01-01T00:00:00Z and 2024-02-01T00:00:00Z
        assert!(url.contains("/AAPL?"));
        assert!(url.contains("period1=1704067200"));
        assert!(url.contains("period2=1706745600"));
        assert!(url.contains("interval=1d"));
    }

    #[test]
    fn bars_from_result_zips_columns_and_keeps_nulls() {
        let result = ChartResult {
            timestamp: vec![1704207600, 1704294000],
            indicators: Indicators {
                quote: vec![Quote {
                    open: vec![Some(184.2), None],
                    high: vec![Some(185.9), Some(185.0)],
                    low: vec![Some(183.4), Some(182.7)],
                    close: vec![Some(185.6), Some(184.2)],
                    volume: vec![Some(58_414_500), None],
                }],
                adjclose: vec![AdjClose {
                    adjclose: vec![Some(184.9), Some(183.5)],
                }],
            },
        };

        let bars = bars_from_result(&result).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(bars[0].volume, Some(58_414_500.0));
        assert!(bars[0].is_complete());
        assert!(!bars[1].is_complete());
        assert_eq!(bars[1].adj_close, Some(183.5));
    }

    #[test]
    fn missing_quote_block_is_internal_error() {
        let result = ChartResult {
            timestamp: vec![1704207600],
            indicators: Indicators {
                quote: vec![],
                adjclose: vec![],
            },
        };
        assert!(matches!(
            bars_from_result(&result),
            Err(ProviderError::Internal(_))
        ));
    }
}
