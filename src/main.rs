mod config;
mod prerender;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is normal; the environment may already be set.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match config::ServerConfig::from_env().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    let port = config.port;
    tracing::info!(
        htdocs = %config.htdocs_dir.display(),
        prerender = config.prerender,
        "serving web shell pages"
    );

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bash-c-web-shell listening");
    axum::serve(listener, app).await.expect("server failed");
}
