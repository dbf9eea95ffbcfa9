use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cover_composer::domain::ports::FavoritesPort;
use cover_composer::infrastructure::filesystem::scan_fonts;
use cover_composer::infrastructure::{
    AppConfig, CliArgs, DiskImageCache, HoyoClient, ImageLoader, ImageLoaderConfig,
    SnapshotStore, StorageManager,
};
use cover_composer::presentation::{AppState, serve};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, Arc<StorageManager>)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, Arc::new(storage)))
}

async fn build_state(config: &AppConfig, storage: Arc<StorageManager>) -> Result<AppState> {
    let cache_dir = config.effective_cache_dir();
    let fonts_dir = config.effective_fonts_dir();
    let static_dir = config.effective_static_dir();

    tokio::fs::create_dir_all(&fonts_dir)
        .await
        .wrap_err_with(|| format!("failed to create {}", fonts_dir.display()))?;

    let client = Arc::new(HoyoClient::new(config.resources.request_timeout())?);
    let snapshots = Arc::new(SnapshotStore::new(cache_dir.clone(), config.resources.snapshot_ttl()).await?);
    let images = Arc::new(ImageLoader::new(
        ImageLoaderConfig {
            max_concurrent_downloads: config.resources.max_concurrent_downloads,
        },
        Arc::new(DiskImageCache::new(cache_dir.clone())),
        client.clone(),
    ));

    info!(path = %cache_dir.display(), "Resource cache ready");

    Ok(AppState::new(
        client,
        snapshots,
        images,
        storage,
        fonts_dir,
        static_dir,
    ))
}

async fn log_banner(config: &AppConfig, storage: &StorageManager) {
    let fonts_dir = config.effective_fonts_dir();
    let fonts = scan_fonts(&fonts_dir).await;
    info!(
        path = %fonts_dir.display(),
        count = fonts.len(),
        "Fonts directory"
    );

    match storage.load_favorites() {
        Ok(favorites) if favorites.is_empty() => info!("No favorite folders"),
        Ok(favorites) => {
            for favorite in favorites {
                info!(name = %favorite.name, path = %favorite.path, "Favorite folder");
            }
        }
        Err(e) => warn!(error = %e, "Failed to read favorites"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let (config, storage) = load_config()?;

    init_logging(&config)?;

    info!(version = cover_composer::VERSION, "Starting {}", cover_composer::NAME);

    let state = build_state(&config, storage.clone()).await?;
    log_banner(&config, &storage).await;

    let address = config.bind_address();
    info!("Open http://{address} in a browser");

    serve(state, &address, shutdown_signal())
        .await
        .wrap_err_with(|| format!("failed to serve on {address}"))?;

    Ok(())
}
