use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("failed to load font face from {origin}")]
    FontLoad {
        origin: String,
        #[source]
        source: BoxError,
    },

    #[error("generator must be initialized with `AvatarGenerator::new` before use")]
    Uninitialized,

    #[error("generator options do not meet requirements")]
    InvalidOptions(#[from] validator::ValidationErrors),

    #[error("invalid hex color `{0}`")]
    InvalidColor(String),

    #[error("failed to encode avatar as png: {0}")]
    Encode(String),

    #[error("`{0}` cannot be used as an output file name")]
    InvalidFileName(String),

    #[error("failed to write avatar to disk")]
    Write(#[from] std::io::Error),
}

impl AvatarError {
    /// Convenient constructor for `AvatarError::FontLoad`.
    pub fn font_load<E>(origin: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::FontLoad {
            origin: origin.into(),
            source: source.into(),
        }
    }
}
