//! Tienda Online backend
//!
//! REST API over SQLite for products, users and orders.
//! Reads configuration from TOML (`~/.config/tienda-online/config.toml`,
//! or the path in `TIENDA_CONFIG`).

use tracing::{error, info};

use tienda::config::{config_path_from_env, AppConfig};
use tienda::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path_from_env();
    let (config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    let handle = match ServerHandle::start(ServerOptions::from(config)).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");
    handle.wait().await;
    Ok(())
}
