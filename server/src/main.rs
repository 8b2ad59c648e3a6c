use std::sync::Arc;

use mediator::Mediator;
use tokio_util::sync::CancellationToken;

use quotable_server::config;
use quotable_server::persistence::{Database, SqliteQuoteRepository};
use quotable_server::quotes::{
    CreateQuote, CreateQuoteHandler, GetQuoteById, GetQuoteByIdHandler,
};
use quotable_server::service::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with span durations
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!("Starting quotable HTTP server");

    let data_dir = config::get_data_dir();
    tracing::info!("Using data directory: {}", data_dir.display());

    let db = Database::open(&data_dir.join("quotes.db")).await?;
    let store = SqliteQuoteRepository::new(db.pool().clone());

    // One handler per envelope type. A duplicate registration aborts
    // startup here instead of misrouting at request time.
    let mediator = Mediator::builder()
        .register::<CreateQuote, _>(CreateQuoteHandler::new(store.clone()))?
        .register::<GetQuoteById, _>(GetQuoteByIdHandler::new(store))?
        .build();

    let shutdown = CancellationToken::new();
    let state = AppState::new(Arc::new(mediator), shutdown.clone());

    let addr = config::get_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                shutdown.cancel();
            }
        }
    });

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    Ok(())
}
