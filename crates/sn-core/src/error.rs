use thiserror::Error;

pub type SnResult<T> = Result<T, SnError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnError {
    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },

    #[error("Network error: {0}")]
    Network(String),
}

impl SnError {
    pub fn invariant(what: impl Into<String>) -> Self {
        SnError::Invariant { what: what.into() }
    }
}
