/// Convenience result type used across Stepdeck.
pub type StepdeckResult<T> = Result<T, StepdeckError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every error is raised synchronously at selection or parsing time and
/// propagates directly to the caller; a malformed subset specifier or
/// malformed markup is an authoring-time error, not a transient condition.
#[derive(thiserror::Error, Debug)]
pub enum StepdeckError {
    /// A subset range resolved to `end <= begin`, or a range term is not a number.
    #[error("malformed range: {0}")]
    MalformedRange(String),

    /// A step was constructed on a node lacking the ancestry its kind requires.
    #[error("structure error: {0}")]
    Structure(String),

    /// An unrecognized Inkscape or text mode value.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    /// Markup or query-string parse failure.
    #[error("markup error: {0}")]
    Markup(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StepdeckError {
    /// Build a [`StepdeckError::MalformedRange`] value.
    pub fn malformed_range(msg: impl Into<String>) -> Self {
        Self::MalformedRange(msg.into())
    }

    /// Build a [`StepdeckError::Structure`] value.
    pub fn structure(msg: impl Into<String>) -> Self {
        Self::Structure(msg.into())
    }

    /// Build a [`StepdeckError::UnsupportedMode`] value.
    pub fn unsupported_mode(msg: impl Into<String>) -> Self {
        Self::UnsupportedMode(msg.into())
    }

    /// Build a [`StepdeckError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
