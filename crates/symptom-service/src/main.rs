//! Symptom diagnosis HTTP server binary.

use symptom_kb::{InferenceEngine, KnowledgeBase};
use symptom_service::{DiagnosisServer, ServiceConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();

    // A malformed knowledge base aborts start-up
    let kb = match &config.kb_path {
        Some(path) => {
            tracing::info!("Loading knowledge base from: {}", path.display());
            KnowledgeBase::load_dir(path)?
        }
        None => {
            tracing::info!("Using built-in knowledge base");
            KnowledgeBase::builtin()?
        }
    };

    tracing::info!(
        "Loaded {} symptoms, {} rules, {} conditions",
        kb.vocabulary().len(),
        kb.rules().len(),
        kb.rules().conditions().len()
    );

    let server = DiagnosisServer::new(InferenceEngine::new(kb));

    // Bind resolves host names such as "localhost"
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Starting diagnosis server on {}", listener.local_addr()?);
    tracing::info!("Endpoints: GET /health, GET /symptoms, GET /conditions, POST /diagnose");

    axum::serve(listener, server.router()).await?;

    Ok(())
}
