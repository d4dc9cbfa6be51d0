//! Database initialization
//!
//! Opens (creating if needed) the embedded SQLite file and ensures the
//! `music_library` table exists.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Name of the library table
pub const LIBRARY_TABLE: &str = "music_library";

/// Column definitions of the library table
pub const LIBRARY_COLUMNS: &str = "id INTEGER PRIMARY KEY, \
     alphabetizing_letter TEXT, \
     full_path_to_folder TEXT, \
     original_filename TEXT, \
     song_title TEXT, \
     voicing TEXT, \
     composer_or_arranger TEXT, \
     file_type TEXT, \
     file_create_date TEXT, \
     library_type TEXT";

/// Initialize database connection and create the library table if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Loading is strictly sequential, one connection is enough
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_library_table(&pool).await?;

    Ok(pool)
}

async fn create_library_table(pool: &SqlitePool) -> Result<()> {
    let query = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        LIBRARY_TABLE, LIBRARY_COLUMNS
    );
    sqlx::query(&query).execute(pool).await?;

    Ok(())
}
