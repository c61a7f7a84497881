use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use moodscan_backend::logging::{init_logging, LoggingConfig};
use moodscan_backend::state::AppState;
use moodscan_backend::store::SnapshotStore;
use moodscan_backend::{app, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env());

    let store: Arc<dyn SnapshotStore> = Arc::new(store::resolve_store());
    let state = AppState { store };
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Moodscan backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
