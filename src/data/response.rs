//! Wire types for the BLS v2 timeseries endpoint. Field names follow the API
//! exactly; everything the dashboard does not consume is ignored.

use serde::{Deserialize, Serialize};

/// Request body for `POST /publicAPI/v2/timeseries/data/`. Years travel as
/// strings, exactly as entered, the API does its own coercion.
#[derive(Debug, Serialize)]
pub struct TimeseriesRequest<'a> {
    pub seriesid: &'a [&'a str],
    pub startyear: &'a str,
    pub endyear: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TimeseriesResponse {
    /// Absent when the API rejected the query, e.g. a bad year range.
    #[serde(rename = "Results")]
    pub results: Option<ResultsEnvelope>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope {
    #[serde(default)]
    pub series: Vec<SeriesBlock>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesBlock {
    #[serde(rename = "seriesID")]
    pub series_id: String,
    #[serde(default)]
    pub data: Vec<SeriesPoint>,
}

/// One raw data point. Year and value are strings on the wire; the table
/// builder owns the numeric coercion.
#[derive(Debug, Deserialize)]
pub struct SeriesPoint {
    pub year: String,
    pub period: String,
    pub value: String,
}
