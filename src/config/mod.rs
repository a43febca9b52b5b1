use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bookshelf")]
#[command(about = "An in-memory book catalog with genre search and recommendations")]
pub struct CliConfig {
    /// CSV file of books to import before the menu starts
    #[arg(long)]
    pub import: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.import {
            validate_non_empty_string("import", path)?;
            validate_file_extension("import", path, &["csv"])?;
        }
        Ok(())
    }
}
