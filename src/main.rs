//! Digital Maturity Assessment server.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use maturity_assessment::adapters::chart::SvgRadarRenderer;
use maturity_assessment::adapters::history::CsvHistoryStore;
use maturity_assessment::adapters::http::{app_router, AssessmentAppState};
use maturity_assessment::adapters::pdf::PdfReportExporter;
use maturity_assessment::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server.log_level, config.server.log_json);

    let questionnaire = config.questionnaire.load()?;
    info!(
        dimensions = questionnaire.dimension_count(),
        questions = questionnaire.question_count(),
        "Loaded questionnaire"
    );

    let state = AssessmentAppState {
        questionnaire: Arc::new(questionnaire),
        history_store: Arc::new(CsvHistoryStore::new(&config.storage.history_path)),
        report_exporter: Arc::new(PdfReportExporter::new()),
        chart_renderer: Arc::new(SvgRadarRenderer::new()),
    };
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        history = %config.storage.history_path.display(),
        "Digital maturity assessment server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
