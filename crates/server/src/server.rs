use axum::{
    Router,
    routing::{get, post},
};

use crate::balances;

async fn root() -> &'static str {
    "server is up and running"
}

async fn check() -> &'static str {
    "server is running healthy"
}

/// Routes of the HTTP layer. Stateless: every request carries the whole
/// group history it needs.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/check", get(check))
        .route("/api/balances", post(balances::compute))
}

pub async fn run_with_listener(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router()).await
}
