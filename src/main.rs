use dotenvy::dotenv;
use tracing::info;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = config::settings::AppConfig::new()?;
    let pool = infrastructure::db::pool::connect_to_db(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = state::AppState::new(config, pool);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
