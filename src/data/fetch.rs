use anyhow::{Context, Result};
use reqwest::{StatusCode, blocking::Client};

use crate::data::response::{TimeseriesRequest, TimeseriesResponse};
use crate::error::DashboardError;

pub const BLS_TIMESERIES_URL: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data/";

/// Thin blocking client for the BLS bulk timeseries endpoint. One call per
/// fetch action, no retries, no pagination, transport-default timeout.
pub struct BlsClient {
    http: Client,
}

impl BlsClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// One POST with the requested ids and year range. Returns the parsed
    /// body on HTTP 200; any other status becomes `DashboardError::Fetch`
    /// carrying the raw body, and nothing is assumed to be retrieved.
    pub fn fetch_timeseries(
        &self,
        series_ids: &[&str],
        start_year: &str,
        end_year: &str,
    ) -> Result<TimeseriesResponse> {
        debug_assert!(!series_ids.is_empty(), "at least one series id required");

        let request = TimeseriesRequest {
            seriesid: series_ids,
            startyear: start_year,
            endyear: end_year,
        };

        log::info!(
            "fetching {} series for {}-{}",
            series_ids.len(),
            start_year,
            end_year
        );

        let response = self
            .http
            .post(BLS_TIMESERIES_URL)
            .json(&request)
            .send()
            .context("BLS API request failed to send")?;

        let status = response.status();
        let body = response
            .text()
            .context("failed to read BLS response body")?;

        parse_body(status, body)
    }
}

impl Default for BlsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_body(status: StatusCode, body: String) -> Result<TimeseriesResponse> {
    if !status.is_success() {
        log::error!("BLS API returned {}: {}", status, body);
        return Err(DashboardError::Fetch {
            status: status.as_u16(),
            body,
        }
        .into());
    }
    serde_json::from_str(&body).context("BLS response was not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_200_becomes_fetch_error_with_raw_body() {
        let err = parse_body(StatusCode::NOT_FOUND, "not found".to_string()).unwrap_err();
        match err.downcast_ref::<DashboardError>() {
            Some(DashboardError::Fetch { status, body }) => {
                assert_eq!(*status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn http_200_parses_the_body() {
        let body = r#"{"Results": {"series": []}}"#.to_string();
        let resp = parse_body(StatusCode::OK, body).unwrap();
        assert!(resp.results.unwrap().series.is_empty());
    }

    #[test]
    fn http_200_with_garbage_body_is_an_error() {
        assert!(parse_body(StatusCode::OK, "<html>".to_string()).is_err());
    }
}
