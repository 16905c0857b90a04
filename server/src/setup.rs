use anyhow::{Context, Result};
use database::SqliteTaskRepository;
use rest_api::ApiServer;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;

/// Create a task repository based on the complete configuration
///
/// The pool connects lazily, so an unreachable database does not abort
/// startup. The migration run doubles as a connectivity probe; its failure
/// is logged and the server starts anyway, surfacing store errors per
/// request instead.
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTaskRepository>> {
    info!("Creating task repository");

    let database_url = config.database_url();
    info!("Initializing SQLite repository at: {}", database_url);

    let repo = SqliteTaskRepository::new(&database_url, config.database.max_connections)
        .context("Failed to create SQLite repository")?;

    match repo.migrate().await {
        Ok(()) => {
            info!("Database is connected");
        }
        Err(e) => {
            error!(error = %e, "Database connection failed; continuing without it");
        }
    }

    Ok(Arc::new(repo))
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<ApiServer<SqliteTaskRepository>> {
    info!("Initializing application");

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    let server = ApiServer::new(repository);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the database directory exists using config
pub fn ensure_database_directory_from_config(config: &Config) -> Result<()> {
    let database_url = config.database_url();
    ensure_database_directory(&database_url)
}

/// Ensure the database directory exists and set secure permissions
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        if db_path.contains(":memory:") {
            return Ok(());
        }
        let db_path = Path::new(db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                info!("Creating database directory: {}", parent.display());
                std::fs::create_dir_all(parent).context("Failed to create database directory")?;

                // Owner-only access on Unix
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    let permissions = std::fs::Permissions::from_mode(0o700);
                    std::fs::set_permissions(parent, permissions)
                        .context("Failed to set directory permissions")?;
                }
            }
        }
    }
    Ok(())
}
