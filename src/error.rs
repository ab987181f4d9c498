use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    /// Embedding model missing or malformed.
    #[error("embedding model error: {0}")]
    Model(String),

    /// Transport failure while downloading the word list.
    #[error("word list request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Word list server answered with something other than 200.
    #[error("word list download from {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The secret sentence contains no significant words.
    #[error("sentence produced no target words")]
    NoTargets,

    /// Invalid run parameters.
    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table file that could not be read back.
    #[error("malformed table payload: {0}")]
    Payload(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
