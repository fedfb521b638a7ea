//! Error taxonomy for scene construction and rendering.

/// Errors raised while building or drawing the scene.
///
/// `InvalidPointCount` and `DegenerateVector` are programming errors: they
/// come from bad constants or inputs and are not retried at runtime.
/// `ContextLost` is raised by the front-end when the rendering surface goes
/// away and is recovered by recreating surface state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("invalid point count {count} (need at least {min})")]
    InvalidPointCount { count: usize, min: usize },

    #[error("degenerate vector in {context}")]
    DegenerateVector { context: &'static str },

    #[error("rendering context lost: {0}")]
    ContextLost(String),
}

impl SceneError {
    /// Only a lost context can be recovered from while the page is running.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SceneError::ContextLost(_))
    }
}

pub type SceneResult<T> = Result<T, SceneError>;
