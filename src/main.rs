use tracing::{error, info};

use inkwell::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = inkwell::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("Inkwell blog server");

    if let Err(e) = run(config).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> inkwell::Result<()> {
    config.validate()?;

    let db = Database::open(&config.database.path, config.database.max_connections).await?;
    info!("Database opened at {}", config.database.path);
    info!("Server configured on {}", config.bind_addr());

    let server = WebServer::new(&config.web, db.clone())?;
    server.run(shutdown_signal()).await?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
