mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use services::photos::DiskPhotoStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let photo_dir = std::env::var("PHOTO_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./photos"));

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let photos = Arc::new(DiskPhotoStore::new(photo_dir.clone()));
    let state = state::AppState::new(pool, photos);

    let app = routes::app(state, &photo_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "casefile listening");
    axum::serve(listener, app).await.expect("server failed");
}
