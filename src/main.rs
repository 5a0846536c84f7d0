use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voice_minutes::application::services::{JobDispatcher, JobOrchestrator};
use voice_minutes::infrastructure::audio::WhisperTranscriber;
use voice_minutes::infrastructure::documents::DocxRenderer;
use voice_minutes::infrastructure::llm::SummarizerClient;
use voice_minutes::infrastructure::observability::{TracingConfig, init_tracing};
use voice_minutes::infrastructure::telegram::{BotApiFileLocator, TelegramNotifier};
use voice_minutes::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let json_logs = settings.logging.json
        || std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let mut tracing_config = TracingConfig::new(environment.as_str(), json_logs);
    if let Some(filter) = &settings.logging.filter {
        tracing_config = tracing_config.with_default_filter(filter.clone());
    }
    init_tracing(&tracing_config);

    if settings.services.bot_token.is_empty() {
        tracing::warn!("Bot token is not configured; file lookups will fail");
    }

    let services = &settings.services;
    let timeouts = &settings.timeouts;

    let orchestrator = JobOrchestrator::new(
        Arc::new(BotApiFileLocator::new(
            &services.telegram_api_url,
            &services.bot_token,
            timeouts.lookup(),
        )),
        Arc::new(WhisperTranscriber::new(
            &services.whisper_url,
            timeouts.transcription(),
        )),
        Arc::new(SummarizerClient::new(
            &services.summarizer_url,
            timeouts.summarization(),
        )),
        Arc::new(DocxRenderer::new(&services.docx_url, timeouts.render())),
        Arc::new(TelegramNotifier::new(
            &services.telegram_url,
            timeouts.send_text(),
            timeouts.send_file(),
        )),
    )
    .with_template_name(settings.document.template_name.clone());

    let dispatcher = Arc::new(JobDispatcher::new(Arc::new(orchestrator)));
    let router = create_router(AppState::new(dispatcher));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        addr = %addr,
        telegram_url = %services.telegram_url,
        whisper_url = %services.whisper_url,
        summarizer_url = %services.summarizer_url,
        docx_url = %services.docx_url,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM. Jobs still in flight are abandoned.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        _ = terminate => tracing::info!("Received terminate signal"),
    }

    tracing::info!("Shutting down gracefully");
}
