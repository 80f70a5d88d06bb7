use std::sync::Arc;

use crate::core::errors::SearchError;
use crate::core::interfaces::adapters::SearchEndpoint;
use crate::core::interfaces::ports::ResultsSurface;
use crate::core::models::{SearchMode, SearchQuery, SearchSequencer, SearchState, SearchTicket};
use crate::core::services::{render_payload, report_error};

#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub query: SearchQuery,
    pub mode: SearchMode,
}

impl PendingSearch {
    pub async fn execute(self, endpoint: Arc<dyn SearchEndpoint>) -> SearchOutcome {
        log::info!(
            "[SEARCH] Submitting {} search {}",
            self.mode,
            self.ticket
        );
        log::debug!("[SEARCH] Query: {}", self.query);

        let result = endpoint.submit(&self.query, self.mode).await;

        SearchOutcome {
            ticket: self.ticket,
            mode: self.mode,
            result,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub ticket: SearchTicket,
    pub mode: SearchMode,
    pub result: Result<String, SearchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Drives one search at a time through Idle -> Submitting -> Rendered | ErrorShown.
///
/// Overlapping submissions are not cancelled. The latest submission wins: any
/// outcome carrying an older ticket is dropped without touching the surface.
pub struct SearchSession {
    endpoint: Arc<dyn SearchEndpoint>,
    sequencer: SearchSequencer,
    state: SearchState,
}

impl SearchSession {
    pub fn new(endpoint: Arc<dyn SearchEndpoint>) -> Self {
        Self {
            endpoint,
            sequencer: SearchSequencer::new(),
            state: SearchState::Idle,
        }
    }

    pub fn endpoint(&self) -> Arc<dyn SearchEndpoint> {
        Arc::clone(&self.endpoint)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.sequencer.is_current(ticket)
    }

    pub fn begin(&mut self, raw_query: &str, mode: SearchMode) -> Option<PendingSearch> {
        let Some(query) = SearchQuery::parse(raw_query) else {
            log::debug!("[SEARCH] Ignoring empty query");
            return None;
        };

        let ticket = self.sequencer.issue();
        self.state = SearchState::Submitting(ticket);

        Some(PendingSearch {
            ticket,
            query,
            mode,
        })
    }

    pub fn complete(
        &mut self,
        outcome: SearchOutcome,
        surface: &mut dyn ResultsSurface,
    ) -> Completion {
        if !self.sequencer.is_current(outcome.ticket) {
            log::info!(
                "[SEARCH] Discarding stale response for search {}",
                outcome.ticket
            );
            return Completion::Stale;
        }

        self.state = match outcome.result {
            Ok(body) => {
                let node_count = render_payload(&body, outcome.mode, surface);
                log::info!(
                    "[SEARCH] Search {} rendered {} result(s)",
                    outcome.ticket,
                    node_count
                );
                SearchState::Rendered {
                    ticket: outcome.ticket,
                    node_count,
                }
            }
            Err(error) => {
                let message = error.to_string();
                log::error!("[SEARCH] Search {} failed: {}", outcome.ticket, message);
                report_error(&message, surface);
                SearchState::ErrorShown {
                    ticket: outcome.ticket,
                    message,
                }
            }
        };

        Completion::Applied
    }

    pub async fn search(
        &mut self,
        raw_query: &str,
        mode: SearchMode,
        surface: &mut dyn ResultsSurface,
    ) -> Option<Completion> {
        let pending = self.begin(raw_query, mode)?;
        let outcome = pending.execute(self.endpoint()).await;
        Some(self.complete(outcome, surface))
    }
}
