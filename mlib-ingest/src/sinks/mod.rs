//! Output sinks: CSV file, JSON file, embedded table

pub mod csv_sink;
pub mod db_loader;
pub mod json_sink;

pub use csv_sink::write_csv;
pub use db_loader::{load_csv_into_db, LoadSummary};
pub use json_sink::{read_json, write_json};
