pub mod catalog;
pub mod import;
pub mod query;

pub use crate::domain::model::Book;
pub use crate::utils::error::Result;
pub use catalog::Catalog;
pub use import::ImportSummary;
