use thiserror::Error;

/// A version token that does not fit any shape the RPM translation knows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("unrecognized version '{0}'")]
    UnrecognizedVersion(String),

    #[error("failed to parse date segment '{0}'")]
    BadDateSegment(String),

    #[error("failed to parse commit segment '{0}'")]
    BadCommitSegment(String),

    #[error("malformed pseudo-version '{0}'")]
    Malformed(String),
}
