use crate::core::models::SearchTicket;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Submitting(SearchTicket),
    Rendered {
        ticket: SearchTicket,
        node_count: usize,
    },
    ErrorShown {
        ticket: SearchTicket,
        message: String,
    },
}

impl SearchState {
    pub fn status_line(&self) -> String {
        match self {
            SearchState::Idle => global_constants::STATUS_READY.to_string(),
            SearchState::Submitting(_) => global_constants::STATUS_SEARCHING.to_string(),
            SearchState::Rendered { node_count: 1, .. } => "1 result".to_string(),
            SearchState::Rendered { node_count, .. } => format!("{} results", node_count),
            SearchState::ErrorShown { .. } => "Search failed".to_string(),
        }
    }
}
