mod error_reporter;
mod result_renderer;
mod search_session;

#[cfg(test)]
pub(crate) mod testing;

pub use error_reporter::report_error;
pub use result_renderer::render_payload;
pub use search_session::{Completion, PendingSearch, SearchOutcome, SearchSession};
