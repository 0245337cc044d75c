use ident_auth::{CredentialHasher, TokenService};
use ident_config::Config;
use ident_db::SqliteUserRepository;
use ident_server::error::{Result as ServerErrorResult, ServerError};
use ident_server::{AppState, build_router, logger};
use ident_service::IdentityService;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ident-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = ident_db::create_pool(&config.database_path()?).await?;
    info!("Database ready");

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ServerError::MissingSecret {
            message: "auth.jwt_secret is not set".to_string(),
        })?;
    let tokens = Arc::new(TokenService::with_hs256(
        secret.as_bytes(),
        config.auth.token_ttl(),
    ));

    let hasher = CredentialHasher::default();
    info!("Password hashing: bcrypt cost {}", hasher.cost());

    let service = IdentityService::new(
        Arc::new(SqliteUserRepository::new(pool)),
        tokens,
        hasher,
    );

    let app = build_router(AppState::new(service));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
