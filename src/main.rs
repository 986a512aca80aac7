// Main entry point - Dependency injection, command dispatch and server setup
mod application;
mod cli;
mod domain;
mod infrastructure;
mod presentation;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::case_study_service::CaseStudyService;
use crate::cli::{Cli, Commands};
use crate::domain::images::ImageResolver;
use crate::infrastructure::config::{load_settings, ServerSettings};
use crate::infrastructure::error::SiteError;
use crate::infrastructure::site_writer::write_page;
use crate::infrastructure::svg_charts::SvgChartRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut settings = load_settings()?;
    if cli.local_images {
        settings.images.use_local = true;
    }

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create services (application layer)
    let charts = Arc::new(SvgChartRenderer::default());
    let service = CaseStudyService::new(charts, ImageResolver::new(settings.images.use_local));

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Serve { host, port } => {
            let server = ServerSettings {
                host: host.unwrap_or(settings.server.host),
                port: port.unwrap_or(settings.server.port),
            };
            serve(service, server).await
        }
        Commands::Render { out } => render(service, out.unwrap_or(settings.output.path)).await,
    }
}

async fn serve(service: CaseStudyService, server: ServerSettings) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        case_study_service: service,
    });
    let router = build_router(state);

    let addr = server.socket_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;
    tracing::info!("Starting lakehouse-case-study on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}

async fn render(service: CaseStudyService, out: PathBuf) -> anyhow::Result<()> {
    let page = service.render_page().into_string();
    write_page(&out, &page).await?;
    Ok(())
}
