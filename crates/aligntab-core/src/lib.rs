// Core modules
pub mod cell;
pub mod config;
pub mod error;
pub mod input;
pub mod row;
pub mod table;

// Re-export commonly used types
pub use cell::Cell;
pub use config::TableConfig;
pub use error::{AligntabError, Result};
pub use row::Row;
pub use table::Table;
