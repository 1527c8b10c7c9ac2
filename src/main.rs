use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::config::Config;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::memory_repo::InMemoryTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let service = TodoServiceImpl::new(InMemoryTodoRepository::new());
    let todos_router = todos::router(todos::AppState { service });
    let router = routing::app(todos_router, &config.static_dir);

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, static_dir = %config.static_dir.display(), "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
