use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tailor::config::Config;
use tailor::db::create_pool;
use tailor::llm_client::LlmClient;
use tailor::refinement::llm::{LlmCoverLetterGenerator, LlmResumeOptimizer};
use tailor::refinement::{CoverLetterComposer, RefinementClient, ResumeService};
use tailor::routes::build_router;
use tailor::state::AppState;
use tailor::storage::drafts::RedisDraftStore;
use tailor::storage::generated::PgResumeRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_config())?;
    info!("LLM client initialized (model: {})", llm.model());

    let refinement_config = config.refinement_config();
    info!(
        "Refinement: {} attempts, {:?} per attempt, {:?} backoff unit",
        refinement_config.max_attempts,
        refinement_config.attempt_timeout,
        refinement_config.backoff_unit
    );

    // Build app state
    let repository = Arc::new(PgResumeRepository::new(db));
    let resumes = ResumeService::new(
        RefinementClient::new(Arc::new(LlmResumeOptimizer(llm.clone())), refinement_config),
        CoverLetterComposer::new(Arc::new(LlmCoverLetterGenerator(llm)))
            .with_timeout(config.cover_letter_timeout()),
        repository.clone(),
    );
    let state = AppState {
        resumes: Arc::new(resumes),
        repository,
        drafts: Arc::new(RedisDraftStore::new(redis)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
