//! Serde DTOs for the Yahoo Finance v8 chart endpoint.
//!
//! Only the fields the ingestion path needs are modeled. Every numeric
//! array entry is nullable on the wire, which is where the pipeline's
//! missing-value rows come from.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Deserialize, Debug)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    /// Unix timestamps (seconds, UTC), one per bar.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
    #[serde(default)]
    pub adjclose: Vec<AdjClose>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AdjClose {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_chart_payload_with_nulls() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "AAPL"},
                    "timestamp": [1704207600, 1704294000],
                    "indicators": {
                        "quote": [{
                            "open": [184.2, null],
                            "high": [185.9, 185.0],
                            "low": [183.4, 182.7],
                            "close": [185.6, 184.2],
                            "volume": [58414500, null]
                        }],
                        "adjclose": [{"adjclose": [184.9, 183.5]}]
                    }
                }],
                "error": null
            }
        }"#;

        let parsed: ChartResponse = serde_json::from_str(body).unwrap();
        let result = parsed.chart.result.unwrap();
        assert_eq!(result[0].timestamp.len(), 2);
        assert_eq!(result[0].indicators.quote[0].open[1], None);
        assert_eq!(result[0].indicators.quote[0].volume[1], None);
        assert_eq!(result[0].indicators.adjclose[0].adjclose[0], Some(184.9));
    }

    #[test]
    fn deserializes_error_payload() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;

        let parsed: ChartResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.chart.result.is_none());
        assert_eq!(parsed.chart.error.unwrap().code, "Not Found");
    }
}
