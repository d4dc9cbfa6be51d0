//! End-to-end pipeline tests: scan → CSV → database → JSON

use mlib_common::config::{LoggingConfig, ResolvedConfig};
use mlib_common::db::{fetch_all, init_database};
use mlib_ingest::services::{assemble_records, FileScanner};
use mlib_ingest::sinks::read_json;
use mlib_ingest::{IngestError, Pipeline};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tracing::Dispatch;

fn library_tree(root: &Path) {
    fs::create_dir_all(root.join("Christmas")).unwrap();
    fs::create_dir_all(root.join("Sacred")).unwrap();
    fs::write(root.join("Christmas/O_OCanada_SATB_Lavallee.pdf"), b"%PDF").unwrap();
    fs::write(root.join("Christmas/S_SilentNight_TTBB_Gruber, arr. Shaw.pdf"), b"%PDF").unwrap();
    fs::write(root.join("Sacred/A_AveMaria_SSA_Biebl.pdf"), b"%PDF").unwrap();
    fs::write(root.join("Sacred/rehearsal.mp3"), b"").unwrap();
}

fn test_config(library: &Path, out: &Path) -> ResolvedConfig {
    ResolvedConfig {
        music_library_path: library.to_path_buf(),
        extension: ".pdf".to_string(),
        csv_filename: out.join("library.csv"),
        json_filename: out.join("library.json"),
        database_filename: out.join("library.db"),
        logging: LoggingConfig::default(),
    }
}

#[tokio::test]
async fn test_full_run_writes_all_outputs() {
    let library = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    library_tree(library.path());
    let config = test_config(library.path(), out.path());

    let summary = Pipeline::new(config.clone(), Dispatch::none())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.files_matched, 3);
    assert!(summary.csv_written);
    assert!(summary.json_written);
    let load = summary.load.expect("database load should have run");
    assert_eq!(load.rows_read, 3);
    assert_eq!(load.rows_inserted, 3);
    assert_eq!(load.rows_failed, 0);
    assert_eq!(load.table_rows, 3);

    assert!(config.csv_filename.exists());
    assert!(config.json_filename.exists());
    assert!(config.database_filename.exists());
}

#[tokio::test]
async fn test_csv_to_database_round_trip() {
    let library = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    library_tree(library.path());
    let config = test_config(library.path(), out.path());

    Pipeline::new(config.clone(), Dispatch::none())
        .run()
        .await
        .unwrap();

    let paths = FileScanner::new(".pdf").scan(library.path()).unwrap();
    let expected = assemble_records(&paths);

    let pool = init_database(&config.database_filename).await.unwrap();
    let rows = fetch_all(&pool).await.unwrap();

    assert_eq!(rows.len(), expected.files.len());
    for (index, (row, record)) in rows.iter().zip(expected.files.iter()).enumerate() {
        assert_eq!(row.id, index as i64 + 1);
        assert_eq!(&row.record, record);
    }

    // The comma in the composer field survives CSV quoting
    assert!(rows
        .iter()
        .any(|r| r.record.composer_or_arranger.contains("Gruber,")));

    assert_eq!(read_json(&config.json_filename).unwrap(), expected);
}

#[tokio::test]
async fn test_bad_root_is_fatal() {
    let out = TempDir::new().unwrap();
    let config = test_config(&out.path().join("missing-library"), out.path());

    let result = Pipeline::new(config.clone(), Dispatch::none()).run().await;

    assert!(matches!(result, Err(IngestError::Scan(_))));
    assert!(!config.csv_filename.exists(), "No output after a fatal scan error");
    assert!(!config.json_filename.exists());
}

#[tokio::test]
async fn test_unwritable_csv_still_completes() {
    let library = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    library_tree(library.path());
    let mut config = test_config(library.path(), out.path());
    config.csv_filename = out.path().join("no-such-dir").join("library.csv");

    let summary = Pipeline::new(config.clone(), Dispatch::none())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.files_matched, 3);
    assert!(!summary.csv_written);
    assert!(summary.load.is_none(), "Database load needs the CSV");
    assert!(summary.json_written);
    assert_eq!(read_json(&config.json_filename).unwrap().files.len(), 3);
}

#[tokio::test]
async fn test_rerun_skips_existing_ids() {
    let library = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    library_tree(library.path());
    let config = test_config(library.path(), out.path());

    Pipeline::new(config.clone(), Dispatch::none()).run().await.unwrap();
    let second = Pipeline::new(config, Dispatch::none()).run().await.unwrap();

    let load = second.load.unwrap();
    assert_eq!(load.rows_read, 3);
    assert_eq!(load.rows_inserted, 0);
    assert_eq!(load.rows_failed, 3);
    assert_eq!(load.table_rows, 3);
}

#[tokio::test]
async fn test_empty_library() {
    let library = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = test_config(library.path(), out.path());

    let summary = Pipeline::new(config.clone(), Dispatch::none())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.files_matched, 0);
    let csv = fs::read_to_string(&config.csv_filename).unwrap();
    assert_eq!(csv.lines().count(), 1, "Header only");
    assert_eq!(summary.load.unwrap().table_rows, 0);
}

#[tokio::test]
async fn test_events_go_to_pipeline_log_file() {
    let library = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    library_tree(library.path());
    let config = test_config(library.path(), out.path());
    let log_path = out.path().join("ingest.log");

    let dispatch = mlib_ingest::logging::build_dispatch(&LoggingConfig {
        level: "info".to_string(),
        file: Some(log_path.clone()),
    })
    .unwrap();

    Pipeline::new(config, dispatch).run().await.unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Starting library ingest"));
    assert!(log.contains("Library ingest completed"));
}
