//! Store Core - Foundation for the object-store wrapper
//!
//! Provides the error taxonomy and backend configuration types shared by
//! all storage backends and the backend factory.

pub mod config;
pub mod error;

pub use config::{AzureBlobConfig, BackendConfig, BackendKind, MinioConfig, S3Config};
pub use error::{BoxError, Error, Result};
