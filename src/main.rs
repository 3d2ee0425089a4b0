//! Shift Scheduling — Axum Server
//!
//! Run with: cargo run
//! Then open: http://localhost:7860

use std::net::SocketAddr;

use tower_http::cors::{Any, CorsLayer};

use shift_scheduling::api;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router().layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], 7860));

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await.unwrap();
}
