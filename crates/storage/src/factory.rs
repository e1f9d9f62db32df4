//! Backend factory
//!
//! Builds an initialized [`ObjectStore`] client from a [`BackendConfig`].
//! Dispatch is an exhaustive match over the configuration variants, so an
//! unhandled backend is a compile error rather than a silent fallback.

use std::sync::Arc;

use tracing::debug;

use store_core::{BackendConfig, Result};

use crate::{AzureBlobStore, MinioStore, ObjectStore, S3Store};

/// Factory for storage backend clients
///
/// # Example
///
/// ```no_run
/// use storage::StoreFactory;
/// use store_core::{AzureBlobConfig, BackendConfig};
///
/// # async fn example() -> store_core::Result<()> {
/// let config = BackendConfig::AzureBlob(AzureBlobConfig {
///     connection_string: "DefaultEndpointsProtocol=https;AccountName=myaccount;AccountKey=bXlrZXk=".to_string(),
///     staging_dir: None,
/// });
/// let store = StoreFactory::create(config).await?;
/// # Ok(())
/// # }
/// ```
pub struct StoreFactory;

impl StoreFactory {
    /// Build an initialized client for the configured backend
    ///
    /// Validates the configuration first, then constructs the matching
    /// client. No retries, no caching of previously constructed clients,
    /// no connection pooling.
    ///
    /// # Errors
    /// Returns [`store_core::Error::InvalidConfig`] when a required
    /// parameter for the selected backend is missing or malformed.
    pub async fn create(config: BackendConfig) -> Result<Arc<dyn ObjectStore>> {
        config.validate()?;
        debug!(kind = %config.kind(), "Creating storage backend client");

        match config {
            BackendConfig::S3(config) => Ok(Arc::new(S3Store::connect(config).await?)),
            BackendConfig::Minio(config) => Ok(Arc::new(MinioStore::connect(config)?)),
            BackendConfig::AzureBlob(config) => Ok(Arc::new(AzureBlobStore::connect(config)?)),
        }
    }
}
