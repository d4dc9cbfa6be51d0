//! mlib-import - load an existing library CSV into the embedded database

use anyhow::Result;
use clap::Parser;
use mlib_common::config::ResolvedConfig;
use mlib_ingest::cli::ImportArgs;
use mlib_ingest::import::run_import;
use mlib_ingest::logging::{bootstrap_dispatch, build_dispatch, load_config_logged};
use tracing::instrument::WithSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ImportArgs::parse();

    let toml_config = load_config_logged(&bootstrap_dispatch(), args.config.as_deref())?;
    let config = ResolvedConfig::resolve(args.overrides(), toml_config);
    let dispatch = build_dispatch(&config.logging)?;

    let result = run_import(&args.csv, args.encoding.as_deref(), &config.database_filename)
        .with_subscriber(dispatch.clone())
        .await;

    match result {
        Ok(summary) => {
            println!(
                "Imported {} of {} rows into {}",
                summary.rows_inserted,
                summary.rows_read,
                config.database_filename.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::dispatcher::with_default(&dispatch, || {
                tracing::error!("Import of {} failed: {}", args.csv.display(), e)
            });
            Err(e.into())
        }
    }
}
