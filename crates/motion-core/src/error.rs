use thiserror::Error;

/// Failures the effect layer can observe. None of them reach the page: callers
/// log and fall back to "no effect".
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("collaborator `{0}` is not loaded")]
    MissingCollaborator(&'static str),
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("audio: {0}")]
    Audio(String),
    #[error("dom: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, MotionError>;
