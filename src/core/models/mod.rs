mod client_config;
mod rendered_node;
mod result_payload;
mod search_mode;
mod search_query;
mod search_state;
mod search_ticket;
mod user_settings;

pub use client_config::ClientConfig;
pub use rendered_node::{LinkTarget, RenderedNode};
pub use result_payload::ResultPayload;
pub use search_mode::SearchMode;
pub use search_query::SearchQuery;
pub use search_state::SearchState;
pub use search_ticket::{SearchSequencer, SearchTicket};
pub use user_settings::{EndpointLayout, ThemeMode, UserSettings};
