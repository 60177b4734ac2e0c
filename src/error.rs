use thiserror::Error;

/// Rule trie error types
#[derive(Error, Debug)]
pub enum TrieError {
    /// The trie was torn down and not re-initialized.
    ///
    /// Only `insert` surfaces this; `search` on a torn-down trie fails open
    /// to `false` so the read path stays total.
    #[error("trie has been torn down; call init() before inserting")]
    TornDown,

    #[error("rules path not configured")]
    RulesPathNotConfigured,

    #[error("rules path does not exist or is not a directory: {0}")]
    RulesPathNotFound(String),

    #[error("file include depth exceeds maximum ({max}), possible circular include")]
    IncludeDepthExceeded { max: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrieError>;
