//! Amazon S3 storage backend
//!
//! Credentials and region are resolved from the ambient AWS configuration
//! (environment variables, profile files, instance role); nothing is
//! required at construction beyond an optional region override.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{config::Region, primitives::ByteStream, Client};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use store_core::{BackendKind, Error, Result, S3Config};

use crate::backend::staging_path;
use crate::ObjectStore;

/// Amazon S3 backend client
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    staging_dir: PathBuf,
}

impl S3Store {
    /// Create a client from the ambient AWS configuration
    pub async fn connect(config: S3Config) -> Result<Self> {
        let region = config
            .region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string());

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Ok(Self {
            client: Client::new(&aws_config),
            staging_dir: config.staging_root(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn kind(&self) -> BackendKind {
        BackendKind::S3
    }

    #[instrument(skip(self), fields(backend = "s3"))]
    async fn retrieve_from_bucket(
        &self,
        source_bucket: &str,
        object_name: &str,
    ) -> Result<PathBuf> {
        let staging = staging_path(&self.staging_dir, object_name);
        debug!(?staging, "Downloading object from S3");

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

    #[instrument(skip(self), fields(backend = "s3"))]
    async fn store_to_bucket(
        &self,
        destination_bucket: &str,
        object_name: &str,
        local_path: &Path,
    ) -> Result<()> {
        debug!(?local_path, "Uploading object to S3");

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

/// Stream a response body into the staging file
///
/// Shared by the S3 and MinIO backends; any failure along the way is a
/// retrieval failure from the caller's point of view.
pub(crate) async fn write_body_to_staging(
    staging: &Path,
    bucket: &str,
    object: &str,
    mut body: ByteStream,
) -> Result<()> {
    let mut file = fs::File::create(staging)
        .await
        .map_err(|e| Error::retrieval(bucket, object, e))?;

    while let Some(chunk) = body
        .try_next()
        .await
        .map_err(|e| Error::retrieval(bucket, object, e))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::retrieval(bucket, object, e))?;
    }

    file.flush()
        .await
        .map_err(|e| Error::retrieval(bucket, object, e))?;

    Ok(())
}
