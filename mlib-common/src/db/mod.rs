//! Database models and queries

pub mod init;
pub mod library;
pub mod models;

pub use init::*;
pub use library::*;
pub use models::*;
