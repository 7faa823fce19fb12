use thiserror::Error;

/// Errors that abort workflow generation outright. There is no partial output:
/// a recipe that trips one of these produces nothing.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A recipe referenced a block id absent from the registry. This is an
    /// integrity bug in recipe data, not user input.
    #[error("unknown block: {0}")]
    UnknownBlock(String),

    #[error("failed to serialize workflow document: {0}")]
    Serialize(#[from] serde_yaml::Error),
}
