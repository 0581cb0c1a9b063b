use thiserror::Error;

/// Zone loading errors
#[derive(Error, Debug, Clone)]
pub enum ZoneError {
    /// IO error reading a master file
    #[error("IO error: {0}")]
    Io(String),

    /// Strict mode only: a token that cannot begin a record
    #[error("syntax error at line {line}: unexpected token {token:?}")]
    Syntax { line: u32, token: String },

    /// Strict mode only: domain omitted before any domain was seen
    #[error("record at line {line} omits its domain and no previous domain is set")]
    MissingDomain { line: u32 },

    /// Record data rejected by the type-specific factory
    #[error("invalid record data: {0}")]
    InvalidRecord(String),
}

impl From<std::io::Error> for ZoneError {
    fn from(err: std::io::Error) -> Self {
        ZoneError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ZoneError>;
