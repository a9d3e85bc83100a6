/// Convenience result type used across statreel.
pub type StatReelResult<T> = Result<T, StatReelError>;

/// Top-level error taxonomy used by evaluator and scene APIs.
///
/// `InvalidConfig` and `InvalidSpec` are authoring bugs: they are detected when a scene is loaded
/// or an element is evaluated, and are never recovered from at runtime.
#[derive(thiserror::Error, Debug)]
pub enum StatReelError {
    /// Malformed spring or oscillator parameters.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed interpolation breakpoints or easing curve.
    #[error("invalid spec: {0}")]
    InvalidSpec(String),

    /// Invalid scene, frame rate, range or threading settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating a frame (out-of-bounds or non-finite frame input).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing scene or state data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StatReelError {
    /// Build a [`StatReelError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`StatReelError::InvalidSpec`] value.
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }

    /// Build a [`StatReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StatReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`StatReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix the message with `ctx` (usually an element id), keeping the error kind.
    pub fn context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            Self::InvalidConfig(m) => Self::InvalidConfig(format!("{ctx}: {m}")),
            Self::InvalidSpec(m) => Self::InvalidSpec(format!("{ctx}: {m}")),
            Self::Validation(m) => Self::Validation(format!("{ctx}: {m}")),
            Self::Evaluation(m) => Self::Evaluation(format!("{ctx}: {m}")),
            Self::Serde(m) => Self::Serde(format!("{ctx}: {m}")),
            Self::Other(e) => Self::Other(e.context(ctx.to_string())),
        }
    }

    /// `true` for the authoring-bug kinds (`InvalidConfig`, `InvalidSpec`).
    pub fn is_authoring_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::InvalidSpec(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
