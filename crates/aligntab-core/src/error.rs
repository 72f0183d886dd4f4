use thiserror::Error;

#[derive(Error, Debug)]
pub enum AligntabError {
    // Table errors
    #[error("TABLE_NO_COLUMNS: a table needs at least one column")]
    NoColumns,

    #[error("TABLE_ARITY_MISMATCH: expected {expected} values, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("TABLE_COLUMN_OUT_OF_RANGE: column {column} is outside 0..{columns}")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("CELL_SHRINK: cannot narrow a cell of width {current} to {target}")]
    CellShrink { current: usize, target: usize },

    // Input errors
    #[error("INPUT_LINE_REJECTED: line {line}")]
    InputLine {
        line: usize,
        #[source]
        source: Box<AligntabError>,
    },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl AligntabError {
    /// Attach a 1-based input line number to an error raised while writing that line
    pub fn at_line(self, line: usize) -> Self {
        AligntabError::InputLine {
            line,
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for AligntabError {
    fn from(err: toml::de::Error) -> Self {
        AligntabError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AligntabError>;
