mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

#[cfg(test)]
mod http_test_server;

use std::sync::Arc;

use clap::Parser;
use iced::daemon;

use crate::adapters::MarkupDocument;
use crate::core::models::UserSettings;
use crate::core::orchestrators::SearchController;
use crate::global_constants::LOG_TAG_APP;

/// Camp site search client
///
/// Opens the search window, or runs a single search and prints the rendered
/// results when --query is given.
#[derive(Parser)]
#[command(name = "camp-search")]
#[command(version)]
#[command(about = "Camp site search client", long_about = None)]
struct Cli {
    /// Run one search without opening a window and print the results markup
    #[arg(short, long)]
    query: Option<String>,

    /// Search backend base URL (overrides the saved setting)
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "{} Starting {}",
        LOG_TAG_APP,
        global_constants::APPLICATION_NAME
    );

    let cli = Cli::parse();

    let (mut settings, settings_path) = app::load_user_settings();
    if let Some(base_url) = cli.base_url {
        log::info!("{} Backend overridden from command line: {}", LOG_TAG_APP, base_url);
        settings.backend_base_url = base_url;
    }

    if let Some(query) = cli.query {
        return run_headless_search(&settings, &query);
    }

    let search_backend = app::build_http_search_backend(&settings)?;

    daemon(
        move || {
            app::SearchApp::build(
                settings.clone(),
                settings_path.clone(),
                Arc::clone(&search_backend),
            )
        },
        app::SearchApp::handle_update,
        app::SearchApp::render_view,
    )
    .subscription(app::SearchApp::handle_subscription)
    .run()?;

    Ok(())
}

fn run_headless_search(settings: &UserSettings, query: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let controller = SearchController::build(app::build_http_search_backend(settings)?);
    let mut document = MarkupDocument::with_query(query);

    runtime.block_on(controller.perform_search(&mut document));

    if let Some(alert) = document.alerts().first() {
        anyhow::bail!("{}", alert);
    }

    log::debug!(
        "{} Headless search finished, loading indicator visible: {}",
        LOG_TAG_APP,
        document.is_loading_visible()
    );
    print!("{}", document.results_markup());
    Ok(())
}
