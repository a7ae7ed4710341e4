use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codepix::api::{create_router, AppState};
use codepix::config::Config;
use codepix::providers::ProviderSet;

#[derive(Parser)]
#[command(name = "codepix")]
#[command(about = "AI assistant service for the CodePix snippet editor")]
struct Args {
    /// Bind address (overrides CODEPIX_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides CODEPIX_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codepix=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    match &config.gemini {
        Some(gemini) => tracing::info!("Gemini client configured (model: {})", gemini.model),
        None => tracing::warn!("GEMINI_API_KEY not set - Gemini requests will be rejected"),
    }
    match &config.groq {
        Some(groq) => tracing::info!("Groq client configured (model: {})", groq.model),
        None => tracing::warn!("GROQ_API_KEY not set - Groq requests will be rejected"),
    }

    let providers = ProviderSet::new(&config)?;
    let state = AppState::new(config.clone(), providers);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("CodePix AI service starting on http://{}", addr);
    tracing::info!("  Status:   http://{}/api/status", addr);
    tracing::info!("  API docs: http://{}/api/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
