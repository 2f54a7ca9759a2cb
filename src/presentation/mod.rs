pub mod app_theme;
mod search_view;
mod settings_view;

pub use search_view::{SearchView, SearchViewMessage};
pub use settings_view::{SettingsView, SettingsViewMessage};
