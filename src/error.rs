use std::path::PathBuf;

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {columns}x{rows} (both must be at least 1)")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("no rows given")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol '{symbol}' at column {column}, row {row}")]
    UnknownSymbol {
        symbol: char,
        column: usize,
        row: usize,
    },

    #[error("token at column {column}, row {row} floats above an empty cell")]
    FloatingToken { column: usize, row: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
