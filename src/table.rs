//! The response-to-table reshaping step: flattens the nested per-series,
//! per-period BLS payload into ordered rows of (series, year, month, value),
//! keeping only monthly periods and relabeling identifiers to display names.

use crate::catalog;
use crate::data::TimeseriesResponse;
use crate::error::DashboardError;

/// One monthly data point after flattening and relabeling. No identity
/// beyond its fields; upstream duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub series_name: String,
    pub year: i32,
    /// Always in 1..=12, derived from the `M01`..`M12` period codes.
    pub month: u32,
    pub value: f64,
}

/// Ordered rows in response order (series order, then data-point order
/// within a series). Rebuilt from scratch on every fetch, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<Observation>,
}

impl ResultTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Distinct series names in first-appearance order, one chart line each.
    pub fn series_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !names.contains(&row.series_name.as_str()) {
                names.push(&row.series_name);
            }
        }
        names
    }
}

/// Pure function from a parsed response to the flat relabeled table.
///
/// Periods lexically outside `"M01"..="M12"` (annual averages, quarterly
/// codes) contribute no row. A malformed numeric field aborts the whole
/// build: the caller gets no table rather than a partial one. A missing
/// `Results` envelope is the API telling us the query failed; an envelope
/// with zero series is a legitimate empty table.
pub fn build_table(response: &TimeseriesResponse) -> Result<ResultTable, DashboardError> {
    let Some(results) = &response.results else {
        return Err(DashboardError::EmptyResult);
    };

    let mut rows = Vec::new();
    for series in &results.series {
        let display_name = catalog::display_name_for(&series.series_id)
            .ok_or_else(|| DashboardError::UnknownSeries(series.series_id.clone()))?;

        for point in &series.data {
            // Same lexical window the provider documents: "M01" <= p <= "M12".
            let period = point.period.as_str();
            if period < "M01" || period > "M12" {
                continue;
            }
            let month = parse_month(period)?;
            let year = point
                .year
                .parse::<i32>()
                .map_err(|_| DashboardError::Parse {
                    field: "year",
                    raw: point.year.clone(),
                })?;
            let value = point
                .value
                .parse::<f64>()
                .map_err(|_| DashboardError::Parse {
                    field: "value",
                    raw: point.value.clone(),
                })?;

            rows.push(Observation {
                series_name: display_name.to_string(),
                year,
                month,
                value,
            });
        }
    }

    Ok(ResultTable { rows })
}

fn parse_month(period: &str) -> Result<u32, DashboardError> {
    period
        .trim_start_matches('M')
        .parse::<u32>()
        .map_err(|_| DashboardError::Parse {
            field: "period",
            raw: period.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> TimeseriesResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn monthly_codes_only() {
        let resp = response(json!({
            "Results": {"series": [{
                "seriesID": "LNS14000000",
                "data": [
                    {"year": "2023", "period": "M13", "value": "99.9"},
                    {"year": "2023", "period": "Q01", "value": "99.9"},
                    {"year": "2023", "period": "A01", "value": "99.9"},
                    {"year": "2023", "period": "M06", "value": "3.6"},
                    {"year": "2023", "period": "M12", "value": "3.7"}
                ]
            }]}
        }));
        let table = build_table(&resp).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.rows.iter().all(|o| (1..=12).contains(&o.month)));
        assert_eq!(table.rows[0].month, 6);
        assert_eq!(table.rows[1].month, 12);
    }

    #[test]
    fn single_series_scenario_from_the_upstream_contract() {
        // LNS14000000, 2023-2023, M01=3.4 kept, M13 annual average dropped.
        let resp = response(json!({
            "Results": {"series": [{
                "seriesID": "LNS14000000",
                "data": [
                    {"year": "2023", "period": "M01", "value": "3.4"},
                    {"year": "2023", "period": "M13", "value": "99.9"}
                ]
            }]}
        }));
        let table = build_table(&resp).unwrap();
        assert_eq!(
            table.rows,
            vec![Observation {
                series_name: "Unemployment Rate (Seasonally Adjusted)".to_string(),
                year: 2023,
                month: 1,
                value: 3.4,
            }]
        );
    }

    #[test]
    fn zero_series_is_an_empty_table_not_an_error() {
        let resp = response(json!({"Results": {"series": []}}));
        let table = build_table(&resp).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_results_envelope_is_empty_result_error() {
        let resp = response(json!({"status": "REQUEST_NOT_PROCESSED"}));
        assert_eq!(build_table(&resp).unwrap_err(), DashboardError::EmptyResult);
    }

    #[test]
    fn malformed_value_aborts_the_whole_build() {
        let resp = response(json!({
            "Results": {"series": [{
                "seriesID": "LNS14000000",
                "data": [
                    {"year": "2023", "period": "M01", "value": "3.4"},
                    {"year": "2023", "period": "M02", "value": "n/a"}
                ]
            }]}
        }));
        match build_table(&resp) {
            Err(DashboardError::Parse { field, raw }) => {
                assert_eq!(field, "value");
                assert_eq!(raw, "n/a");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_year_aborts_the_whole_build() {
        let resp = response(json!({
            "Results": {"series": [{
                "seriesID": "LNS14000000",
                "data": [{"year": "20x3", "period": "M01", "value": "3.4"}]
            }]}
        }));
        assert!(matches!(
            build_table(&resp),
            Err(DashboardError::Parse { field: "year", .. })
        ));
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let resp = response(json!({
            "Results": {"series": [{
                "seriesID": "XXX0000000",
                "data": [{"year": "2023", "period": "M01", "value": "1.0"}]
            }]}
        }));
        assert_eq!(
            build_table(&resp).unwrap_err(),
            DashboardError::UnknownSeries("XXX0000000".to_string())
        );
    }

    #[test]
    fn ordering_follows_the_response() {
        let resp = response(json!({
            "Results": {"series": [
                {
                    "seriesID": "LNS12000000",
                    "data": [
                        {"year": "2023", "period": "M02", "value": "2.0"},
                        {"year": "2023", "period": "M01", "value": "1.0"}
                    ]
                },
                {
                    "seriesID": "LNS11000000",
                    "data": [{"year": "2023", "period": "M01", "value": "3.0"}]
                }
            ]}
        }));
        let table = build_table(&resp).unwrap();
        let got: Vec<(u32, f64)> = table.rows.iter().map(|o| (o.month, o.value)).collect();
        // Series order, then data-point order within a series. No sorting.
        assert_eq!(got, vec![(2, 2.0), (1, 1.0), (1, 3.0)]);
        assert_eq!(
            table.series_names(),
            vec![
                "Civilian Employment (Seasonally Adjusted)",
                "Civilian Labor Force (Seasonally Adjusted)"
            ]
        );
    }

    #[test]
    fn upstream_duplicates_are_kept() {
        let resp = response(json!({
            "Results": {"series": [{
                "seriesID": "LNS14000000",
                "data": [
                    {"year": "2023", "period": "M01", "value": "3.4"},
                    {"year": "2023", "period": "M01", "value": "3.4"}
                ]
            }]}
        }));
        assert_eq!(build_table(&resp).unwrap().len(), 2);
    }
}
