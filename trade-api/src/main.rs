//! HTTP entry point for the mock trading service

use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use mock_market::{ExchangeService, RandomQuoteSource};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use trade_api::config::AppConfig;
use trade_api::{api, AppState};

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        trade_api::api::stock::check_stock,
        trade_api::api::stock::buy_stock,
        trade_api::api::stock::sell_stock,
        trade_api::api::stock::preflight,
        trade_api::api::health::health_check,
    ),
    components(
        schemas(
            common::model::quote::CheckRequest,
            common::model::quote::StockQuote,
            common::model::trade::TradeAction,
            common::model::trade::TradeRequest,
            common::model::trade::TradeResult,
            trade_api::error::ErrorBody,
        )
    ),
    tags(
        (name = "stock", description = "Mock stock trading endpoints"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Papertrade API",
        version = "0.1.0",
        description = "Mock stock trading endpoints returning synthesized quotes and trade confirmations"
    )
)]
struct ApiDoc;

/// Mock trading API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address (defaults to 127.0.0.1 on the configured port)
    #[clap(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging with debug level when DEBUG=1 env var is set
    let env = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env == "1" { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse("tower_http=debug,trade_api=debug")
        .unwrap();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    debug!("Debug logging enabled");

    let config = AppConfig::new();
    let addr = args
        .addr
        .unwrap_or_else(|| format!("127.0.0.1:{}", config.port));

    api::health::mark_started();

    // Initialize the mock exchange
    let exchange = ExchangeService::new(Box::new(RandomQuoteSource::new()));
    let state = Arc::new(AppState { exchange });

    // Set up Swagger UI
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    // Combine all routes
    let app = trade_api::router(state).merge(swagger_ui).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(log_level))
            .on_request(DefaultOnRequest::new().level(log_level))
            .on_response(DefaultOnResponse::new().level(log_level)),
    );

    // Start the server
    let addr: std::net::SocketAddr = addr.parse().expect("Invalid address");
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
