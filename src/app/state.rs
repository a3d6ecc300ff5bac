// src/app/state.rs

use crate::table::ResultTable;

/// Outcome of the most recent fetch action. Exactly one of these is live at
/// a time; a new fetch fully supersedes whatever was displayed before.
#[derive(Debug, Default)]
pub(crate) enum FetchState {
    #[default]
    Idle,
    Loaded(ResultTable),
    Failed(String),
}

impl FetchState {
    pub(crate) fn table(&self) -> Option<&ResultTable> {
        match self {
            FetchState::Loaded(table) => Some(table),
            _ => None,
        }
    }
}
