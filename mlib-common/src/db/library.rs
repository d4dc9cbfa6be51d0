//! Queries against the `music_library` table

use crate::db::models::{FileRecord, StoredRecord};
use crate::Result;
use sqlx::SqlitePool;

/// Insert one record under the given surrogate key
pub async fn insert_record(pool: &SqlitePool, id: i64, record: &FileRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO music_library (
            id, alphabetizing_letter, full_path_to_folder, original_filename,
            song_title, voicing, composer_or_arranger, file_type,
            file_create_date, library_type
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&record.alphabetizing_letter)
    .bind(&record.full_path_to_folder)
    .bind(&record.original_filename)
    .bind(&record.song_title)
    .bind(&record.voicing)
    .bind(&record.composer_or_arranger)
    .bind(&record.file_type)
    .bind(&record.file_create_date)
    .bind(&record.library_type)
    .execute(pool)
    .await?;

    tracing::debug!(id, file = %record.original_filename, "Inserted library row");

    Ok(())
}

/// Fetch every row, ordered by id
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<StoredRecord>> {
    let rows = sqlx::query_as::<_, StoredRecord>(
        r#"
        SELECT id, alphabetizing_letter, full_path_to_folder, original_filename,
               song_title, voicing, composer_or_arranger, file_type,
               file_create_date, library_type
        FROM music_library
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
