use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::text;
use iced::window::{self, Id};
use iced::{Element, Size, Task};

use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::UserSettings;
use crate::core::orchestrators::{SearchController, SearchOutcome};
use crate::presentation::{SearchView, SearchViewMessage, SettingsView, SettingsViewMessage};

pub type SearchBackendFactory = fn(&UserSettings) -> anyhow::Result<Arc<dyn SearchBackend>>;

pub enum AppWindow {
    Main,
    Settings(SettingsView),
}

pub struct AppOrchestrator {
    search_controller: SearchController,
    backend_factory: SearchBackendFactory,
    search_view: SearchView,
    windows: HashMap<Id, AppWindow>,
    main_window_id: Option<Id>,
    settings_window_id: Option<Id>,
    settings: UserSettings,
    settings_path: PathBuf,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    Search(SearchViewMessage),
    SearchCompleted(SearchOutcome),
    Settings(SettingsViewMessage),
    SpinnerTick,
    WindowClosed(Id),
}

impl AppOrchestrator {
    pub fn build(
        search_controller: SearchController,
        backend_factory: SearchBackendFactory,
        settings: UserSettings,
        settings_path: PathBuf,
    ) -> Self {
        Self {
            search_controller,
            backend_factory,
            search_view: SearchView::build(settings.theme_mode.clone()),
            windows: HashMap::new(),
            main_window_id: None,
            settings_window_id: None,
            settings,
            settings_path,
        }
    }

    pub fn is_search_in_flight(&self) -> bool {
        self.search_view.is_loading_visible()
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        if !matches!(message, OrchestratorMessage::SpinnerTick) {
            log::debug!("[ORCHESTRATOR] Received message: {:?}", message);
        }

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::Search(SearchViewMessage::SearchTriggered) => {
                self.handle_search_triggered()
            }
            OrchestratorMessage::Search(SearchViewMessage::OpenSettings) => {
                self.handle_open_settings()
            }
            OrchestratorMessage::Search(view_message) => {
                self.search_view.update(view_message);
                Task::none()
            }
            OrchestratorMessage::SearchCompleted(outcome) => {
                self.search_controller
                    .complete_search(&mut self.search_view, outcome);
                Task::none()
            }
            OrchestratorMessage::Settings(SettingsViewMessage::Save) => {
                self.handle_save_settings()
            }
            OrchestratorMessage::Settings(settings_message) => {
                if let Some(id) = self.settings_window_id {
                    if let Some(AppWindow::Settings(view)) = self.windows.get_mut(&id) {
                        view.update(settings_message);
                    }
                }
                Task::none()
            }
            OrchestratorMessage::SpinnerTick => {
                self.search_view.advance_spinner();
                Task::none()
            }
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        match self.windows.get(&window_id) {
            Some(AppWindow::Main) => self
                .search_view
                .render_ui()
                .map(OrchestratorMessage::Search),
            Some(AppWindow::Settings(settings_view)) => settings_view
                .render_ui()
                .map(OrchestratorMessage::Settings),
            None => text("Loading...").into(),
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if let Some(id) = self.main_window_id {
            if self.windows.contains_key(&id) {
                log::warn!("[ORCHESTRATOR] Main window already exists and is open");
                return Task::none();
            }
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(760.0, 720.0),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        self.windows.insert(id, AppWindow::Main);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_search_triggered(&mut self) -> Task<OrchestratorMessage> {
        match self.search_controller.begin_search(&mut self.search_view) {
            Some(request) => Task::perform(
                self.search_controller.fetch_results(request),
                OrchestratorMessage::SearchCompleted,
            ),
            None => Task::none(),
        }
    }

    fn handle_open_settings(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Opening settings window");
        if self.settings_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Settings window already open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(560.0, 380.0),
            position: window::Position::Centered,
            resizable: false,
            ..Default::default()
        });

        self.settings_window_id = Some(id);
        self.windows
            .insert(id, AppWindow::Settings(SettingsView::build(&self.settings)));
        log::info!("[ORCHESTRATOR] Settings window created with ID: {:?}", id);

        task.discard()
    }

    fn handle_save_settings(&mut self) -> Task<OrchestratorMessage> {
        let Some(id) = self.settings_window_id else {
            return Task::none();
        };
        let Some(AppWindow::Settings(view)) = self.windows.get(&id) else {
            return Task::none();
        };

        let draft = view.draft().clone();
        let backend_changed = draft.backend_base_url != self.settings.backend_base_url
            || draft.request_timeout_secs != self.settings.request_timeout_secs;

        if backend_changed {
            match (self.backend_factory)(&draft) {
                Ok(backend) => {
                    log::info!(
                        "[ORCHESTRATOR] Search backend now points at {}",
                        draft.backend_base_url
                    );
                    self.search_controller.replace_backend(backend);
                }
                Err(e) => {
                    log::error!("[ORCHESTRATOR] Failed to rebuild search backend: {}", e);
                    return Task::none();
                }
            }
        }

        self.search_view.set_theme_mode(draft.theme_mode.clone());
        self.settings = draft;

        if let Err(e) = self.settings.save_to_path(&self.settings_path) {
            log::error!("[ORCHESTRATOR] Failed to save settings: {}", e);
        } else {
            log::info!("[ORCHESTRATOR] Settings saved successfully");
        }

        window::close(id)
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);
        self.windows.remove(&id);

        if Some(id) == self.settings_window_id {
            self.settings_window_id = None;
            return Task::none();
        }

        if Some(id) == self.main_window_id {
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            self.main_window_id = None;
            return iced::exit();
        }

        Task::none()
    }
}
