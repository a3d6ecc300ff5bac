mod fetch;
mod response;

pub use {
    fetch::{BLS_TIMESERIES_URL, BlsClient},
    response::{ResultsEnvelope, SeriesBlock, SeriesPoint, TimeseriesRequest, TimeseriesResponse},
};
