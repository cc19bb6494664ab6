pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{AppError, AppResult};
pub use routes::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use newswire_core::storage::Database;
use newswire_core::AppConfig;

/// Bind and serve the store until the process is stopped.
pub async fn run_server(addr: SocketAddr, config: Arc<AppConfig>) -> anyhow::Result<()> {
    let db = Database::new(&config).await?;
    let state = AppState::new(db, config);
    let app = create_router(state);

    tracing::info!("Store listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
