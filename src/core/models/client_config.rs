use crate::core::models::{EndpointLayout, SearchMode, UserSettings};
use crate::global_constants;

/// Connection details for the search API, handed to the HTTP endpoint at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_address: String,
    pub endpoint_layout: EndpointLayout,
    pub form_field: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            global_constants::DEFAULT_SERVER_ADDRESS,
            EndpointLayout::default(),
        )
    }
}

impl ClientConfig {
    pub fn new(server_address: impl Into<String>, endpoint_layout: EndpointLayout) -> Self {
        Self {
            server_address: server_address.into(),
            endpoint_layout,
            form_field: global_constants::QUERY_FORM_FIELD.to_string(),
        }
    }

    pub fn local_development() -> Self {
        Self::new(
            global_constants::LOCAL_SERVER_ADDRESS,
            EndpointLayout::default(),
        )
    }

    pub fn from_settings(settings: &UserSettings) -> Self {
        Self::new(
            settings.server_address.clone(),
            settings.endpoint_layout.clone(),
        )
    }

    pub fn endpoint_for(&self, mode: SearchMode) -> String {
        let path = match (&self.endpoint_layout, mode) {
            (EndpointLayout::Split { links_path, .. }, SearchMode::Links) => links_path,
            (EndpointLayout::Split { images_path, .. }, SearchMode::Images) => images_path,
            (EndpointLayout::Echo { path }, _) => path,
        };

        format!("{}{}", self.server_address.trim_end_matches('/'), path)
    }

    pub fn available_modes(&self) -> Vec<SearchMode> {
        match self.endpoint_layout {
            EndpointLayout::Split { .. } => SearchMode::ALL.to_vec(),
            EndpointLayout::Echo { .. } => vec![SearchMode::Links],
        }
    }

    /// Echo servers only answer with links, so any other mode is rendered as links.
    pub fn effective_mode(&self, requested: SearchMode) -> SearchMode {
        if self.available_modes().contains(&requested) {
            requested
        } else {
            SearchMode::Links
        }
    }
}
