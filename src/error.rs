use std::{error::Error, fmt};

/// Everything that can terminate a fetch-and-render cycle. Each variant is
/// terminal for the current action; nothing is retried.
#[derive(Debug, PartialEq)]
pub enum DashboardError {
    /// Non-200 response from the BLS endpoint. Carries the raw body so the
    /// user sees exactly what the API said.
    Fetch { status: u16, body: String },
    /// Body parsed as JSON but the `Results` envelope is missing.
    EmptyResult,
    /// A numeric field in the response could not be parsed. The whole table
    /// build is abandoned; a partial table is never surfaced.
    Parse { field: &'static str, raw: String },
    /// Response contained a series identifier the catalog does not know.
    UnknownSeries(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DashboardError::Fetch { status, body } => {
                write!(f, "Error fetching data (HTTP {}): {}", status, body)
            }
            DashboardError::EmptyResult => {
                write!(f, "Failed to retrieve data. Please check your inputs.")
            }
            DashboardError::Parse { field, raw } => {
                write!(f, "Could not parse {} value {:?}", field, raw)
            }
            DashboardError::UnknownSeries(id) => {
                write!(f, "Series {} is not in the catalog", id)
            }
        }
    }
}

impl Error for DashboardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_surfaces_the_raw_body() {
        let err = DashboardError::Fetch {
            status: 404,
            body: "not found".to_string(),
        };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("404"));
    }
}
