//! mlib-ingest - music library ingest
//!
//! Scans the library folder and writes the catalogue to CSV, the embedded
//! database, and JSON.

use anyhow::Result;
use clap::Parser;
use mlib_common::config::ResolvedConfig;
use mlib_ingest::cli::Args;
use mlib_ingest::logging::{bootstrap_dispatch, build_dispatch, load_config_logged};
use mlib_ingest::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config loading logs before the configured dispatcher exists
    let toml_config = load_config_logged(&bootstrap_dispatch(), args.config.as_deref())?;
    let config = ResolvedConfig::resolve(args.overrides(), toml_config);
    let dispatch = build_dispatch(&config.logging)?;

    tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!(
            "Starting mlib-ingest v{} [{}] built {} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("BUILD_TIMESTAMP"),
            env!("BUILD_PROFILE")
        );
    });

    let pipeline = Pipeline::new(config, dispatch).with_max_depth(args.max_depth);
    let summary = pipeline.run().await?;

    if summary.files_matched == 0 {
        println!("No matching files found");
    } else {
        println!("Catalogued {} files", summary.files_matched);
    }

    Ok(())
}
