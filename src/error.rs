use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextaugError {
    /// Invalid configuration value (bounds, proportions).
    #[error("config error: {0}")]
    Config(String),

    /// Stopword pattern failed to compile.
    #[error("stopword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file (de)serialization failure.
    #[error("config serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
