use diesel_migrations::{ embed_migrations, EmbeddedMigrations, MigrationHarness };
use tracing::info;

use crate::config::{ ConfigError, DatabaseConfig, PgPool };

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Builds the pool and brings the schema up to date.
pub fn establish_pool(config: &DatabaseConfig) -> Result<PgPool, ConfigError> {
    let pool = config.build_pool()?;
    run_migrations(&pool)?;

    Ok(pool)
}

pub fn run_migrations(pool: &PgPool) -> Result<(), ConfigError> {
    let mut conn = pool.get()?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ConfigError::Migration(e.to_string()))?;

    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
