pub type MediaResult<T> = Result<T, MediaError>;

/// Failures the clip controller can observe. None of them are fatal: they
/// end up as log lines and the session keeps its optimistic state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("playback blocked by autoplay policy: {0}")]
    PlaybackBlocked(String),

    #[error("playback failed ({name}): {message}")]
    PlaybackFailed { name: String, message: String },

    #[error("media element `{0}` is not available")]
    ElementUnavailable(String),

    #[error("no element `{0}` to observe")]
    ConfigurationMissing(String),

    #[error("bridge error: {0}")]
    Bridge(String),
}

impl MediaError {
    pub fn unavailable(id: impl Into<String>) -> Self {
        Self::ElementUnavailable(id.into())
    }

    pub fn bridge(msg: impl Into<String>) -> Self {
        Self::Bridge(msg.into())
    }

    /// Classify a rejected `play()` promise by its DOMException name.
    pub fn from_rejection(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" => Self::PlaybackBlocked(message.to_string()),
            _ => Self::PlaybackFailed {
                name: if name.is_empty() {
                    "Error".to_string()
                } else {
                    name.to_string()
                },
                message: message.to_string(),
            },
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::PlaybackBlocked(_))
    }
}
