// Main entry point - Configuration, catalog loading and one sizing pass
use anyhow::Context;
use board_sizing::application::sizing_service::{SizingOutcome, SizingService};
use board_sizing::application::validator::Warning;
use board_sizing::infrastructure::catalog_loader::load_catalog;
use board_sizing::infrastructure::config::{load_app_config, OutputFormat};
use board_sizing::presentation::form_session::FormSession;
use board_sizing::presentation::presenter::{JsonPresenter, ResultPresenter, TextPresenter};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the rendered result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Load the board catalog (infrastructure layer)
    let catalog = load_catalog(&app_config.catalog.path)
        .with_context(|| format!("Failed to load board catalog from {}", app_config.catalog.path))?;

    // Create service (application layer)
    let service = SizingService::new(Arc::new(catalog));

    // Size the configured scenario (presentation layer)
    let mut session = FormSession::new(app_config.scenario.clone(), app_config.output.settle_interval());
    tracing::info!(
        "Sizing {} camera(s) at {} on board {:?}",
        session.input().camera_count,
        session.input().resolution,
        session.input().board_id
    );
    let outcome = session
        .recompute(&service)
        .context("Error during calculations")?
        .clone();

    let stdout = std::io::stdout().lock();
    match app_config.output.format {
        OutputFormat::Text => {
            let mut presenter = TextPresenter::new(stdout);
            presenter.render(&outcome)?;

            if let SizingOutcome::Rejected(warnings) = &outcome {
                if warnings.contains(&Warning::MissingBoard) {
                    presenter.render_boards(&service.boards())?;
                }
            }
        }
        OutputFormat::Json => JsonPresenter::new(stdout).render(&outcome)?,
    }

    Ok(())
}
