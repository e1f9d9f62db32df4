//! MinIO storage backend
//!
//! Speaks the S3 wire protocol against a self-hosted endpoint with explicit
//! static credentials and path-style addressing (MinIO does not serve
//! virtual-hosted buckets by default).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{BehaviorVersion, Region, RequestChecksumCalculation},
    primitives::ByteStream,
    Client,
};
use tracing::{debug, instrument};

use store_core::{BackendKind, Error, MinioConfig, Result};

use crate::backend::staging_path;
use crate::s3::write_body_to_staging;
use crate::ObjectStore;

/// MinIO backend client
#[derive(Debug, Clone)]
pub struct MinioStore {
    client: Client,
    staging_dir: PathBuf,
}

impl MinioStore {
    /// Create a client for the configured endpoint
    ///
    /// Fails fast on a missing endpoint or credential rather than producing
    /// a client whose first call fails.
    pub fn connect(config: MinioConfig) -> Result<Self> {
        config.validate()?;

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "minio",
        );

        // The SDK's default flexible checksums use aws-chunked body framing,
        // which S3-compatible services do not all accept.
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint)
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .force_path_style(true)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            staging_dir: config.staging_root(),
        })
    }
}

#[async_trait]
impl ObjectStore for MinioStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Minio
    }

    #[instrument(skip(self), fields(backend = "minio"))]
    async fn retrieve_from_bucket(
        &self,
        source_bucket: &str,
        object_name: &str,
    ) -> Result<PathBuf> {
        let staging = staging_path(&self.staging_dir, object_name);
        debug!(?staging, "Downloading object from MinIO");

        let output = self
            .client
            .get_object()
            .bucket(source_bucket)
            .key(object_name)
            .send()
            .await
            .map_err(|e| Error::retrieval(source_bucket, object_name, e))?;

        write_body_to_staging(&staging, source_bucket, object_name, output.body).await?;

        debug!(?staging, "Object downloaded");
        Ok(staging)
    }

    #[instrument(skip(self), fields(backend = "minio"))]
    async fn store_to_bucket(
        &self,
        destination_bucket: &str,
        object_name: &str,
        local_path: &Path,
    ) -> Result<()> {
        debug!(?local_path, "Uploading object to MinIO");

        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| Error::storage(destination_bucket, object_name, e))?;

        self.client
            .put_object()
            .bucket(destination_bucket)
            .key(object_name)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::storage(destination_bucket, object_name, e))?;

        debug!("Object uploaded");
        Ok(())
    }
}
