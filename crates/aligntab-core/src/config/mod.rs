mod model;

pub use model::{CONFIG_FILE_NAME, InputSection, TableConfig, TableSection};
