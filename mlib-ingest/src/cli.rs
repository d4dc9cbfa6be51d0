//! Command-line arguments for the two binaries

use clap::Parser;
use mlib_common::config::ConfigOverrides;
use std::path::PathBuf;

/// Command-line arguments for mlib-ingest
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mlib-ingest")]
#[command(about = "Catalogue a choir music library from its filenames")]
#[command(version)]
pub struct Args {
    /// Root folder of the music library
    #[arg(short = 'd', long = "dir", env = "MLIB_MUSIC_DIR")]
    pub dir: Option<PathBuf>,

    /// Filename suffix to match (case-sensitive), e.g. ".pdf"
    #[arg(short, long, env = "MLIB_EXTENSION")]
    pub extension: Option<String>,

    /// CSV output file
    #[arg(short = 'o', long)]
    pub output_csv: Option<PathBuf>,

    /// JSON output file
    #[arg(short = 'j', long)]
    pub output_json: Option<PathBuf>,

    /// Embedded database file
    #[arg(short = 'b', long, env = "MLIB_DATABASE")]
    pub database: Option<PathBuf>,

    /// Maximum directory depth below the root (unlimited if omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// TOML config file
    #[arg(short, long, env = "MLIB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level filter (overrides the config file; RUST_LOG overrides both)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Command-line values that take priority over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            music_library_path: self.dir.clone(),
            extension: self.extension.clone(),
            csv_filename: self.output_csv.clone(),
            json_filename: self.output_json.clone(),
            database_filename: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

/// Command-line arguments for mlib-import
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mlib-import")]
#[command(about = "Load an existing library CSV into the embedded database")]
#[command(version)]
pub struct ImportArgs {
    /// CSV file with the nine-column library header
    pub csv: PathBuf,

    /// Embedded database file
    #[arg(short = 'b', long, env = "MLIB_DATABASE")]
    pub database: Option<PathBuf>,

    /// Source encoding of the CSV (e.g. iso-8859-1); converted to UTF-8 first
    #[arg(long)]
    pub encoding: Option<String>,

    /// TOML config file
    #[arg(short, long, env = "MLIB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level filter
    #[arg(long)]
    pub log_level: Option<String>,
}

impl ImportArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            database_filename: self.database.clone(),
            log_level: self.log_level.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_flags_map_to_overrides() {
        let args = Args::try_parse_from([
            "mlib-ingest",
            "-d",
            "/library",
            "-e",
            ".mscz",
            "-o",
            "out.csv",
            "-j",
            "out.json",
            "-b",
            "lib.db",
            "--max-depth",
            "2",
        ])
        .unwrap();

        assert_eq!(args.max_depth, Some(2));
        let overrides = args.overrides();
        assert_eq!(overrides.music_library_path, Some(PathBuf::from("/library")));
        assert_eq!(overrides.extension.as_deref(), Some(".mscz"));
        assert_eq!(overrides.csv_filename, Some(PathBuf::from("out.csv")));
        assert_eq!(overrides.json_filename, Some(PathBuf::from("out.json")));
        assert_eq!(overrides.database_filename, Some(PathBuf::from("lib.db")));
        assert_eq!(overrides.log_level, None);
    }

    #[test]
    fn test_import_requires_csv() {
        assert!(ImportArgs::try_parse_from(["mlib-import"]).is_err());

        let args =
            ImportArgs::try_parse_from(["mlib-import", "legacy.csv", "--encoding", "latin1"]).unwrap();
        assert_eq!(args.csv, PathBuf::from("legacy.csv"));
        assert_eq!(args.encoding.as_deref(), Some("latin1"));
    }
}
