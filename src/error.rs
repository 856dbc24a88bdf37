use thiserror::Error;

/// Result alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Errors reported by the palette extractor and its image loader.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// The image could not be decoded, is empty, or cannot be sampled.
    #[error("invalid image: {message}")]
    InvalidImage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl PaletteError {
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_image_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidImage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
