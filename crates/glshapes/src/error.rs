use thiserror::Error;

/// Errors returned by shape and group operations.
///
/// All of them are caller-logic errors; none is transient and none leaves the
/// scene graph in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A keyed child with this name is already in the group.
    #[error("a shape '{0}' already exists")]
    DuplicateKey(String),

    /// No keyed child with this name.
    #[error("cannot find a shape named '{0}'")]
    NotFound(String),

    #[error("child index {index} out of range for group of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation needs state that has not been set up yet.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Texture coordinates must provide at least one UV pair per vertex.
    #[error("expected at least {expected} texture coordinates, got {got}")]
    TexCoordMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, ShapeError>;
