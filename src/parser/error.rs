use thiserror::Error;

/// A `#` line whose shape is not one of the known module forms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("incorrect number of fields ({got}, expected 3, 5 or 6)")]
    WrongArity { got: usize },

    #[error("expected '=>' at field {position}, found '{found}'")]
    BadSeparatorToken { position: usize, found: String },

    #[error("field {position} is empty")]
    EmptyToken { position: usize },
}
