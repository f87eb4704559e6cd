mod config;
mod providers;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let state = state::AppState::from_config(&config).expect("provider client init failed");
    tracing::info!(
        serpapi = %config.shopping.url,
        embeddings = %config.embeddings.url,
        model = %config.embeddings.model,
        threshold = config.grouping.similarity_threshold,
        "comparison providers configured"
    );

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dealdeck listening");
    axum::serve(listener, app).await.expect("server failed");
}
