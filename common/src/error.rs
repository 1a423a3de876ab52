use thiserror::Error;

/// Conditions the user can fix by correcting their input.
///
/// Neither is fatal; callers report the message and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("invalid Gmail address: {0}")]
    InvalidAddress(String),
    #[error("missing tag: the plus method needs a non-empty tag")]
    MissingTag,
}
