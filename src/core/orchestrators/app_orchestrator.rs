use std::sync::Arc;

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Background, Element, Length, Task};

use crate::core::interfaces::adapters::{ImageLoader, SearchEndpoint};
use crate::core::interfaces::ports::LinkOpener;
use crate::core::models::{ClientConfig, SearchMode, SearchTicket, UserSettings};
use crate::core::services::{Completion, SearchOutcome, SearchSession};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::{ResultsPane, ResultsPaneMessage};

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    QueryChanged(String),
    ModeSelected(SearchMode),
    SubmitSearch,
    SearchFinished(SearchOutcome),
    ImageLoaded {
        ticket: SearchTicket,
        index: usize,
        result: Result<Vec<u8>, String>,
    },
    Results(ResultsPaneMessage),
}

pub struct AppOrchestrator {
    session: SearchSession,
    config: ClientConfig,
    image_loader: Arc<dyn ImageLoader>,
    link_opener: Arc<dyn LinkOpener>,
    results: ResultsPane,
    query_input: String,
    selected_mode: SearchMode,
    settings: UserSettings,
}

impl AppOrchestrator {
    pub fn build(
        search_endpoint: Arc<dyn SearchEndpoint>,
        image_loader: Arc<dyn ImageLoader>,
        link_opener: Arc<dyn LinkOpener>,
        config: ClientConfig,
        settings: UserSettings,
    ) -> Self {
        let selected_mode = config.effective_mode(settings.default_mode);

        Self {
            session: SearchSession::new(search_endpoint),
            config,
            image_loader,
            link_opener,
            results: ResultsPane::new(),
            query_input: String::new(),
            selected_mode,
            settings,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match message {
            OrchestratorMessage::QueryChanged(query) => {
                self.query_input = query;
            }
            OrchestratorMessage::ModeSelected(mode) => {
                log::debug!("[ORCHESTRATOR] Mode selected: {}", mode);
                self.selected_mode = self.config.effective_mode(mode);
            }
            OrchestratorMessage::SubmitSearch => {
                return self.handle_submit_search();
            }
            OrchestratorMessage::SearchFinished(outcome) => {
                return self.handle_search_finished(outcome);
            }
            OrchestratorMessage::ImageLoaded {
                ticket,
                index,
                result,
            } => {
                self.handle_image_loaded(ticket, index, result);
            }
            OrchestratorMessage::Results(ResultsPaneMessage::OpenLink(url)) => {
                if let Err(e) = self.link_opener.open_in_new_window(&url) {
                    log::error!("[ORCHESTRATOR] Failed to open link {}: {}", url, e);
                }
            }
        }

        Task::none()
    }

    fn handle_submit_search(&mut self) -> Task<OrchestratorMessage> {
        let mode = self.config.effective_mode(self.selected_mode);

        let Some(pending) = self.session.begin(&self.query_input, mode) else {
            return Task::none();
        };

        log::info!(
            "[ORCHESTRATOR] Starting {} search {}",
            pending.mode,
            pending.ticket
        );

        let endpoint = self.session.endpoint();
        Task::future(async move {
            OrchestratorMessage::SearchFinished(pending.execute(endpoint).await)
        })
    }

    fn handle_search_finished(&mut self, outcome: SearchOutcome) -> Task<OrchestratorMessage> {
        let ticket = outcome.ticket;

        if self.session.complete(outcome, &mut self.results) == Completion::Stale {
            return Task::none();
        }

        let image_tasks: Vec<Task<OrchestratorMessage>> = self
            .results
            .take_unloaded_images()
            .into_iter()
            .map(|(index, url)| {
                let image_loader = Arc::clone(&self.image_loader);
                Task::future(async move {
                    let result = image_loader
                        .load_image_bytes(&url)
                        .await
                        .map_err(|e| e.to_string());
                    OrchestratorMessage::ImageLoaded {
                        ticket,
                        index,
                        result,
                    }
                })
            })
            .collect();

        if !image_tasks.is_empty() {
            log::info!(
                "[ORCHESTRATOR] Loading {} image(s) for search {}",
                image_tasks.len(),
                ticket
            );
        }

        Task::batch(image_tasks)
    }

    fn handle_image_loaded(
        &mut self,
        ticket: SearchTicket,
        index: usize,
        result: Result<Vec<u8>, String>,
    ) {
        if !self.session.is_current(ticket) {
            log::debug!(
                "[ORCHESTRATOR] Dropping image {} from stale search {}",
                index,
                ticket
            );
            return;
        }

        self.results.apply_image_bytes(index, result);
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);

        let title = text(global_constants::APPLICATION_TITLE).size(28);

        let search_input = text_input(global_constants::SEARCH_PLACEHOLDER, &self.query_input)
            .on_input(OrchestratorMessage::QueryChanged)
            .on_submit(OrchestratorMessage::SubmitSearch)
            .padding(12)
            .size(16)
            .width(Length::Fill);

        let search_btn = button(text("Search").size(15))
            .padding([12, 24])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press(OrchestratorMessage::SubmitSearch);

        let available_modes = self.config.available_modes();
        let form_row = if available_modes.len() > 1 {
            row![
                search_input,
                pick_list(
                    available_modes,
                    Some(self.selected_mode),
                    OrchestratorMessage::ModeSelected,
                )
                .padding(12),
                search_btn,
            ]
        } else {
            row![search_input, search_btn]
        };
        let form = form_row.spacing(10).align_y(Alignment::Center);

        let status_text = text(self.session.state().status_line())
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::muted_text_color()),
            });

        let results = scrollable(
            container(
                self.results
                    .render_ui(&theme)
                    .map(OrchestratorMessage::Results),
            )
            .padding(8)
            .width(Length::Fill),
        )
        .height(Length::Fill);

        let content = column![
            title,
            Space::new().height(Length::Fixed(8.0)),
            form,
            status_text,
            results,
        ]
        .spacing(12)
        .padding(24)
        .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    #[cfg(test)]
    fn results(&self) -> &ResultsPane {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SearchError;
    use crate::core::interfaces::ports::ResultsSurface;
    use crate::core::models::{EndpointLayout, SearchState};
    use crate::core::services::testing::MockSearchEndpoint;
    use crate::presentation::ImageSlot;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct NoopImageLoader;

    #[async_trait]
    impl ImageLoader for NoopImageLoader {
        async fn load_image_bytes(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
            anyhow::bail!("image loading disabled in tests")
        }
    }

    #[derive(Default)]
    struct RecordingLinkOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingLinkOpener {
        fn open_in_new_window(&self, url: &str) -> anyhow::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn build_orchestrator(
        config: ClientConfig,
        link_opener: Arc<RecordingLinkOpener>,
    ) -> AppOrchestrator {
        AppOrchestrator::build(
            Arc::new(MockSearchEndpoint::responding_with("")),
            Arc::new(NoopImageLoader),
            link_opener,
            config,
            UserSettings::default(),
        )
    }

    fn submit(orchestrator: &mut AppOrchestrator, query: &str) -> Option<SearchTicket> {
        let _ = orchestrator.update(OrchestratorMessage::QueryChanged(query.to_string()));
        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);
        match orchestrator.session.state() {
            SearchState::Submitting(ticket) => Some(*ticket),
            _ => None,
        }
    }

    #[test]
    fn test_blank_query_does_not_start_search() {
        let mut orchestrator =
            build_orchestrator(ClientConfig::default(), Arc::new(RecordingLinkOpener::default()));

        assert!(submit(&mut orchestrator, "   ").is_none());
        assert_eq!(orchestrator.session.state(), &SearchState::Idle);
    }

    #[test]
    fn test_finished_search_renders_into_results_pane() {
        let mut orchestrator =
            build_orchestrator(ClientConfig::default(), Arc::new(RecordingLinkOpener::default()));
        let ticket = submit(&mut orchestrator, "rust").unwrap();

        let _ = orchestrator.update(OrchestratorMessage::SearchFinished(SearchOutcome {
            ticket,
            mode: SearchMode::Links,
            result: Ok("http://a.com http://b.com".to_string()),
        }));

        let hrefs: Vec<&str> = orchestrator
            .results()
            .nodes()
            .into_iter()
            .map(|node| node.url())
            .collect();
        assert_eq!(hrefs, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_stale_search_does_not_overwrite_newer_results() {
        let mut orchestrator =
            build_orchestrator(ClientConfig::default(), Arc::new(RecordingLinkOpener::default()));
        let first = submit(&mut orchestrator, "first").unwrap();
        let second = submit(&mut orchestrator, "second").unwrap();

        let _ = orchestrator.update(OrchestratorMessage::SearchFinished(SearchOutcome {
            ticket: second,
            mode: SearchMode::Links,
            result: Err(SearchError::Server),
        }));
        let _ = orchestrator.update(OrchestratorMessage::SearchFinished(SearchOutcome {
            ticket: first,
            mode: SearchMode::Links,
            result: Ok("http://late.com".to_string()),
        }));

        assert_eq!(orchestrator.results().text_content(), "Error: Server error");
        assert!(orchestrator.results().nodes().is_empty());
    }

    #[test]
    fn test_image_bytes_from_stale_search_are_dropped() {
        let mut orchestrator =
            build_orchestrator(ClientConfig::default(), Arc::new(RecordingLinkOpener::default()));
        let _ = orchestrator.update(OrchestratorMessage::ModeSelected(SearchMode::Images));
        let first = submit(&mut orchestrator, "cats").unwrap();
        let _ = orchestrator.update(OrchestratorMessage::SearchFinished(SearchOutcome {
            ticket: first,
            mode: SearchMode::Images,
            result: Ok("http://cat.png".to_string()),
        }));

        let _second = submit(&mut orchestrator, "dogs").unwrap();
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded {
            ticket: first,
            index: 0,
            result: Ok(vec![1, 2, 3]),
        });

        assert!(matches!(
            orchestrator.results().image_slot(0),
            Some(ImageSlot::Loading)
        ));
    }

    #[test]
    fn test_echo_layout_keeps_links_mode() {
        let mut orchestrator = build_orchestrator(
            ClientConfig::new("http://127.0.0.1:8080", EndpointLayout::echo()),
            Arc::new(RecordingLinkOpener::default()),
        );

        let _ = orchestrator.update(OrchestratorMessage::ModeSelected(SearchMode::Images));

        assert_eq!(orchestrator.selected_mode, SearchMode::Links);
    }

    #[test]
    fn test_open_link_goes_through_link_opener() {
        let link_opener = Arc::new(RecordingLinkOpener::default());
        let mut orchestrator = build_orchestrator(ClientConfig::default(), Arc::clone(&link_opener));

        let _ = orchestrator.update(OrchestratorMessage::Results(ResultsPaneMessage::OpenLink(
            "http://a.com".to_string(),
        )));

        assert_eq!(
            link_opener.opened.lock().unwrap().clone(),
            vec!["http://a.com".to_string()]
        );
    }
}
