//! Survey Chat server entry point.
//!
//! Loads configuration, builds the adapters and handlers, and serves the
//! HTTP API until Ctrl-C. The idle-session sweeper runs alongside and is
//! stopped once the server has drained.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use survey_chat::adapters::ai::{OpenAIConfig, OpenAIProvider};
use survey_chat::adapters::catalog::FileCatalogSource;
use survey_chat::adapters::classifier::LlmTextClassifier;
use survey_chat::adapters::composer::{LlmAcknowledgementComposer, StaticAcknowledgementComposer};
use survey_chat::adapters::http::{api_router, AdminHandlers, SurveyHandlers};
use survey_chat::adapters::registry::{spawn_sweeper, InMemorySessionRegistry, RegistryConfig};
use survey_chat::adapters::results::JsonFileResultSink;
use survey_chat::application::handlers::survey::{
    ListCatalogHandler, ReloadCatalogHandler, ResultFinalizer, StartSessionHandler,
    SubmitUtteranceHandler,
};
use survey_chat::application::ActiveCatalog;
use survey_chat::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use survey_chat::domain::catalog::CatalogError;
use survey_chat::ports::{AIError, AIProvider, AcknowledgementComposer};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to load question catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to initialise AI provider: {0}")]
    Ai(#[from] AIError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        StartupError::Config(ConfigError::from(err))
    }
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        catalog = %config.survey.catalog_path.display(),
        "Starting survey chat"
    );

    // Catalog errors are fatal at startup.
    let source = Arc::new(FileCatalogSource::new(&config.survey.catalog_path));
    let catalog = Arc::new(ActiveCatalog::load(source).await?);

    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
    let provider: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(
        OpenAIConfig::from_secret(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?);

    let classifier = Arc::new(LlmTextClassifier::new(
        provider.clone(),
        config.ai.classification_timeout(),
    ));
    let composer: Arc<dyn AcknowledgementComposer> = if config.features.llm_acknowledgements {
        Arc::new(LlmAcknowledgementComposer::new(provider, config.ai.timeout()))
    } else {
        Arc::new(StaticAcknowledgementComposer::new())
    };

    let registry = Arc::new(InMemorySessionRegistry::new(RegistryConfig {
        ttl: config.survey.session_ttl(),
        tombstone_retention: config.survey.expired_retention(),
    }));
    let sink = Arc::new(JsonFileResultSink::new(&config.survey.results_dir));
    let finalizer = Arc::new(ResultFinalizer::new(sink));

    let verbose = config.features.verbose_errors;
    let survey = SurveyHandlers::new(
        Arc::new(StartSessionHandler::new(registry.clone(), catalog.clone())),
        Arc::new(SubmitUtteranceHandler::new(
            registry.clone(),
            classifier,
            composer,
            finalizer,
        )),
        Arc::new(ListCatalogHandler::new(catalog.clone())),
    )
    .with_verbose_errors(verbose);
    let admin = AdminHandlers::new(
        Arc::new(ReloadCatalogHandler::new(catalog)),
        config.admin.admin_token.clone(),
    )
    .with_verbose_errors(verbose);

    let app = api_router(survey, admin, &config.server);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = spawn_sweeper(registry, config.survey.sweep_interval(), shutdown_rx);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Survey chat listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Err(e) = sweeper.await {
        tracing::warn!(error = %e, "Session sweeper ended abnormally");
    }
    tracing::info!("Survey chat stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
