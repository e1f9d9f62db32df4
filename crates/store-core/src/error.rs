//! Error types for the object-store wrapper

use thiserror::Error;

/// Result type alias using the store Error
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed provider-layer cause carried inside transfer errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for the object-store wrapper
///
/// Every provider failure collapses into one of the two transfer variants.
/// No distinction is made between transient causes (network, throttling)
/// and permanent ones (missing object, bad credentials); all surface
/// identically and immediately to the caller, with the underlying cause
/// preserved as a structured `source`.
#[derive(Error, Debug)]
pub enum Error {
    // Transfer errors
    #[error("there was an error retrieving object from the bucket: {bucket}/{object}: {source}")]
    Retrieval {
        bucket: String,
        object: String,
        #[source]
        source: BoxError,
    },

    #[error("there was an error storing object to the bucket: {bucket}/{object}: {source}")]
    Storage {
        bucket: String,
        object: String,
        #[source]
        source: BoxError,
    },

    // Configuration errors
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    /// Wrap a provider failure raised while downloading an object
    pub fn retrieval(
        bucket: impl Into<String>,
        object: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Error::Retrieval {
            bucket: bucket.into(),
            object: object.into(),
            source: source.into(),
        }
    }

    /// Wrap a provider failure raised while uploading an object
    pub fn storage(
        bucket: impl Into<String>,
        object: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Error::Storage {
            bucket: bucket.into(),
            object: object.into(),
            source: source.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
