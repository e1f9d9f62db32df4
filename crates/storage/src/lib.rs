//! Storage - Pluggable cloud object-storage backends
//!
//! Provides a uniform retrieve/store interface over three providers:
//! - Amazon S3 (ambient credentials)
//! - MinIO / S3-compatible self-hosted services (explicit endpoint + keys)
//! - Azure-style blob storage (connection string)
//!
//! Backend selection is deferred to configuration: callers describe the
//! backend with a [`store_core::BackendConfig`] and the factory returns an
//! initialized client behind the [`ObjectStore`] trait.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use storage::StoreFactory;
//! use store_core::{BackendConfig, MinioConfig};
//!
//! # async fn example() -> store_core::Result<()> {
//! let config = BackendConfig::Minio(MinioConfig {
//!     endpoint: "http://127.0.0.1:9000".to_string(),
//!     access_key: "minioadmin".to_string(),
//!     secret_key: "minioadmin".to_string(),
//!     staging_dir: None,
//! });
//!
//! let store = StoreFactory::create(config).await?;
//! store.store_to_bucket("b1", "f.txt", Path::new("/tmp/f.txt")).await?;
//! let local = store.retrieve_from_bucket("b1", "f.txt").await?;
//! # Ok(())
//! # }
//! ```

mod azure;
mod backend;
mod factory;
mod minio;
mod s3;

pub use azure::AzureBlobStore;
pub use backend::ObjectStore;
pub use factory::StoreFactory;
pub use minio::MinioStore;
pub use s3::S3Store;
