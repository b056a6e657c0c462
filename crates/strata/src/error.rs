pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised while building a [`Graph`](crate::Graph), before any layout work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("edge #{edge} references an unknown node id: {id}")]
    UnknownNode { edge: usize, id: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid layout config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
