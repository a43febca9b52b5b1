pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::Shell;
pub use crate::config::CliConfig;
pub use crate::core::{import::load_csv, query, Book, Catalog, ImportSummary};
pub use crate::utils::error::{Result, RowError, ShelfError};
