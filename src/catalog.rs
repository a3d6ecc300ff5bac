//! Static mapping between human-readable series names and their BLS series
//! identifiers. The table is fixed at startup and forms a bijection: no
//! duplicate identifiers, no duplicate names.

/// One labor-statistics time series as the dashboard knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesDescriptor {
    pub display_name: &'static str,
    pub id: &'static str,
}

pub static SERIES_CATALOG: &[SeriesDescriptor] = &[
    SeriesDescriptor {
        display_name: "Civilian Labor Force (Seasonally Adjusted)",
        id: "LNS11000000",
    },
    SeriesDescriptor {
        display_name: "Civilian Employment (Seasonally Adjusted)",
        id: "LNS12000000",
    },
    SeriesDescriptor {
        display_name: "Civilian Unemployment (Seasonally Adjusted)",
        id: "LNS13000000",
    },
    SeriesDescriptor {
        display_name: "Unemployment Rate (Seasonally Adjusted)",
        id: "LNS14000000",
    },
    SeriesDescriptor {
        display_name: "Total Nonfarm Employment (Seasonally Adjusted)",
        id: "CES0000000001",
    },
    SeriesDescriptor {
        display_name: "Total Private Avg Weekly Hours (All Employees, Seasonally Adjusted)",
        id: "CES0500000002",
    },
    SeriesDescriptor {
        display_name:
            "Total Private Avg Weekly Hours (Prod. & Nonsup. Employees, Seasonally Adjusted)",
        id: "CES0500000007",
    },
    SeriesDescriptor {
        display_name: "Total Private Avg Hourly Earnings (All Employees, Seasonally Adjusted)",
        id: "CES0500000003",
    },
    SeriesDescriptor {
        display_name:
            "Total Private Avg Hourly Earnings (Prod. & Nonsup. Employees, Seasonally Adjusted)",
        id: "CES0500000008",
    },
];

pub fn identifier_for(display_name: &str) -> Option<&'static str> {
    SERIES_CATALOG
        .iter()
        .find(|s| s.display_name == display_name)
        .map(|s| s.id)
}

pub fn display_name_for(id: &str) -> Option<&'static str> {
    SERIES_CATALOG
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn round_trip_is_identity_for_every_entry() {
        for entry in SERIES_CATALOG {
            let id = identifier_for(entry.display_name).unwrap();
            assert_eq!(id, entry.id);
            assert_eq!(display_name_for(id).unwrap(), entry.display_name);
        }
    }

    #[test]
    fn catalog_is_a_bijection() {
        let ids: HashSet<_> = SERIES_CATALOG.iter().map(|s| s.id).collect();
        let names: HashSet<_> = SERIES_CATALOG.iter().map(|s| s.display_name).collect();
        assert_eq!(ids.len(), SERIES_CATALOG.len());
        assert_eq!(names.len(), SERIES_CATALOG.len());
    }

    #[test]
    fn unknown_lookups_return_none() {
        assert!(identifier_for("No Such Series").is_none());
        assert!(display_name_for("LNS99999999").is_none());
    }
}
