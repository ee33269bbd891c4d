use axum::{
    Router,
    extract::Extension,
    middleware,
    routing::{get, post},
};
use hero_store::service::cors;
use hero_store::service::handlers::{handle_daily_hero, handle_list_heroes, handle_save_heroes};
use hero_store::service::protocol::{ENDPOINT_DAILY_HERO, ENDPOINT_HEROES, ENDPOINT_SAVE_HEROES};
use hero_store::storage::store::HeroStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_FILE: &str = "heroes.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut port = DEFAULT_PORT;
    let mut data_path = PathBuf::from(DEFAULT_DATA_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                port = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--port requires a value"))?
                    .parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(
                    args.get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--data requires a value"))?,
                );
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--port <port>] [--data <file>]", args[0]);
                eprintln!("Example: {} --port 5000 --data heroes.json", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Guarded store over the backing file (loaded lazily on first read):
    let store = Arc::new(HeroStore::new(&data_path));
    tracing::info!("Backing file: {}", store.path().display());

    // 2. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_DAILY_HERO, get(handle_daily_hero))
        .route(ENDPOINT_HEROES, get(handle_list_heroes))
        .route(ENDPOINT_SAVE_HEROES, post(handle_save_heroes))
        .layer(Extension(store))
        .layer(middleware::from_fn(cors::allow_any_origin));

    // 3. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Serving hero store on http://{}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
