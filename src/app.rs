use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{HttpImageLoader, HttpSearchEndpoint, SystemBrowserLinkOpener};
use crate::core::models::{ClientConfig, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

pub struct SearchApp {
    orchestrator: AppOrchestrator,
}

impl SearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let config = ClientConfig::from_settings(&settings);
        log::info!(
            "[APP] Search server: {} ({:?})",
            config.server_address,
            config.endpoint_layout
        );

        let orchestrator = AppOrchestrator::build(
            Arc::new(HttpSearchEndpoint::new(config.clone())),
            Arc::new(HttpImageLoader::new()),
            Arc::new(SystemBrowserLinkOpener::new()),
            config,
            settings,
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }
}
