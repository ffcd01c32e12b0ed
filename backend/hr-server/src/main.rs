use hr_server::{AppState, bootstrap, build_router, error::ServerError, logger};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = hr_config::Config::load()?;
    config.validate()?;

    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = hr_config::Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = hr_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let hasher = bootstrap::password_hasher(&config)?;
    bootstrap::seed(&config, &pool, &hasher).await?;

    let limiter = bootstrap::login_rate_limiter(&config);
    if let Some(ref limiter) = limiter {
        let limiter = Arc::clone(limiter);
        let every = Duration::from_secs(config.rate_limit.login_window_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                limiter.prune();
            }
        });
    }

    let auth = bootstrap::auth_service(&config, pool.clone(), hasher, limiter)?;
    info!(
        "Auth ready: {} tokens valid for {}s",
        auth.codec().algorithm(),
        auth.codec().ttl_secs()
    );

    let state = AppState::new(pool.clone(), Arc::new(auth), config.auth.password_min_length);
    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
