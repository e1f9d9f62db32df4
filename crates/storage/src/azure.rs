//! Azure blob storage backend
//!
//! Authenticates with a storage-account connection string; the account name
//! and key are parsed out of it at construction, which is the only place
//! provider credentials are consumed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use azure_storage::{CloudLocation, ConnectionString};
use azure_storage_blobs::prelude::{BlobServiceClient, ClientBuilder};
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, instrument};

use store_core::{AzureBlobConfig, BackendKind, Error, Result};

use crate::backend::staging_path;
use crate::ObjectStore;

/// Azure blob storage backend client
#[derive(Debug, Clone)]
pub struct AzureBlobStore {
    service: BlobServiceClient,
    staging_dir: PathBuf,
}

impl AzureBlobStore {
    /// Create a client from a storage-account connection string
    ///
    /// A malformed connection string is a configuration error; no provider
    /// call is made until the first transfer.
    pub fn connect(config: AzureBlobConfig) -> Result<Self> {
        config.validate()?;

        let connection = ConnectionString::new(&config.connection_string)
            .map_err(|e| Error::invalid_config(format!("malformed connection string: {e}")))?;

        let account = connection.account_name.ok_or_else(|| {
            Error::invalid_config("connection string is missing AccountName")
        })?;

        let credentials = connection.storage_credentials().map_err(|e| {
            Error::invalid_config(format!("connection string has no usable credentials: {e}"))
        })?;

        // An explicit BlobEndpoint (Azurite, private deployments) overrides
        // the public per-account endpoint.
        let service = match connection.blob_endpoint {
            Some(endpoint) => ClientBuilder::with_location(
                CloudLocation::Custom {
                    account: account.to_string(),
                    uri: endpoint.trim_end_matches('/').to_string(),
                },
                credentials,
            )
            .blob_service_client(),
            None => BlobServiceClient::new(account, credentials),
        };

        Ok(Self {
            service,
            staging_dir: config.staging_root(),
        })
    }
}

#[async_trait]
impl ObjectStore for AzureBlobStore {
    fn kind(&self) -> BackendKind {
        BackendKind::AzureBlob
    }

    #[instrument(skip(self), fields(backend = "azure_blob"))]
    async fn retrieve_from_bucket(
        &self,
        source_bucket: &str,
        object_name: &str,
    ) -> Result<PathBuf> {
        let staging = staging_path(&self.staging_dir, object_name);
        debug!(?staging, "Downloading blob");

        let blob = self
            .service
            .container_client(source_bucket)
            .blob_client(object_name);

        let content = blob
            .get_content()
            .await
            .map_err(|e| Error::retrieval(source_bucket, object_name, e))?;

        fs::write(&staging, &content)
            .await
            .map_err(|e| Error::retrieval(source_bucket, object_name, e))?;

        debug!(?staging, size = content.len(), "Blob downloaded");
        Ok(staging)
    }

    #[instrument(skip(self), fields(backend = "azure_blob"))]
    async fn store_to_bucket(
        &self,
        destination_bucket: &str,
        object_name: &str,
        local_path: &Path,
    ) -> Result<()> {
        debug!(?local_path, "Uploading blob");

        let data = fs::read(local_path)
            .await
            .map_err(|e| Error::storage(destination_bucket, object_name, e))?;

        let blob = self
            .service
            .container_client(destination_bucket)
            .blob_client(object_name);

        blob.put_block_blob(Bytes::from(data))
            .await
            .map_err(|e| Error::storage(destination_bucket, object_name, e))?;

        debug!("Blob uploaded");
        Ok(())
    }
}
