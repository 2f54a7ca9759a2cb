use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::window::{self, Id};
use iced::{Element, Task};

use crate::adapters::HttpSearchBackend;
use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::SearchController;
use crate::global_constants::{self, LOG_TAG_APP};

pub fn build_http_search_backend(settings: &UserSettings) -> anyhow::Result<Arc<dyn SearchBackend>> {
    let request_timeout = settings.request_timeout_secs.map(Duration::from_secs);
    let backend = HttpSearchBackend::build(&settings.backend_base_url, request_timeout)?;
    Ok(Arc::new(backend))
}

pub fn load_user_settings() -> (UserSettings, PathBuf) {
    let settings_path = UserSettings::settings_file_path().unwrap_or_else(|e| {
        log::warn!("{} No config directory ({}), using temp dir", LOG_TAG_APP, e);
        std::env::temp_dir()
            .join(global_constants::CONFIG_DIRECTORY_NAME)
            .join(global_constants::SETTINGS_FILE_NAME)
    });

    let settings = UserSettings::load_from_path(&settings_path).unwrap_or_else(|e| {
        log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
        UserSettings::default()
    });

    (settings, settings_path)
}

pub struct SearchApp {
    orchestrator: AppOrchestrator,
}

impl SearchApp {
    pub fn build(
        settings: UserSettings,
        settings_path: PathBuf,
        search_backend: Arc<dyn SearchBackend>,
    ) -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);
        log::info!(
            "{} Search backend: {}",
            LOG_TAG_APP,
            settings.backend_base_url
        );

        let orchestrator = AppOrchestrator::build(
            SearchController::build(search_backend),
            build_http_search_backend,
            settings,
            settings_path,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        let mut subscriptions = vec![iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })];

        if self.orchestrator.is_search_in_flight() {
            subscriptions.push(
                iced::time::every(Duration::from_millis(global_constants::SPINNER_TICK_MILLIS))
                    .map(|_| OrchestratorMessage::SpinnerTick),
            );
        }

        iced::Subscription::batch(subscriptions)
    }
}
