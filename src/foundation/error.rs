/// Result alias used across the crate.
pub type StoryframeResult<T> = Result<T, StoryframeError>;

/// Errors surfaced by composition validation and frame evaluation.
///
/// Malformed optional parameters never produce an error; they fall back to documented defaults.
#[derive(thiserror::Error, Debug)]
pub enum StoryframeError {
    /// Invalid input (bad fps, bad scene duration, negative frame).
    #[error("validation error: {0}")]
    Validation(String),

    /// The plan has no scenes, so no frame can be resolved against it.
    #[error("empty timeline: plan has no scenes")]
    EmptyTimeline,

    /// Evaluation failed for a reason other than input validation.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryframeError {
    /// Build a [`StoryframeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryframeError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`StoryframeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
