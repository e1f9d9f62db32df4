//! Backend selection and connection configuration types
//!
//! One configuration struct per backend, collected in the [`BackendConfig`]
//! tagged union so that required parameters are enforced per kind at
//! construction time instead of being fished out of a keyword bag at runtime.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed set of supported storage providers
///
/// Dispatch on this enum is exhaustive everywhere; there is no default
/// branch, so adding a variant forces every match site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Amazon S3, ambient credential resolution
    S3,
    /// MinIO or another self-hosted S3-compatible service
    Minio,
    /// Azure-style blob storage, connection-string authentication
    AzureBlob,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::S3 => "s3",
            BackendKind::Minio => "minio",
            BackendKind::AzureBlob => "azure_blob",
        };
        f.write_str(name)
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    /// Parse a provider name, accepting the legacy aliases `aws_s3` and
    /// `azure_containers`. An unrecognized name is a configuration error,
    /// never a silent fallback to some default backend.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "s3" | "aws_s3" => Ok(BackendKind::S3),
            "minio" => Ok(BackendKind::Minio),
            "azure_blob" | "azure_containers" => Ok(BackendKind::AzureBlob),
            other => Err(Error::invalid_config(format!(
                "unknown storage backend: {other}"
            ))),
        }
    }
}

/// Configuration for the Amazon S3 backend
///
/// Credentials are ambient (environment, profile files, instance role);
/// nothing is required here beyond an optional region override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Config {
    /// AWS region (default: "us-east-1")
    pub region: Option<String>,

    /// Local staging directory (default: the system temp directory)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl S3Config {
    /// Resolve the local staging directory for transfers
    pub fn staging_root(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Configuration for a MinIO (S3-compatible) backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinioConfig {
    /// Endpoint URL or IP of the MinIO server
    pub endpoint: String,

    /// Access key for the MinIO server
    pub access_key: String,

    /// Secret key for the MinIO server
    pub secret_key: String,

    /// Local staging directory (default: the system temp directory)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl MinioConfig {
    /// Check that every required credential field is present
    ///
    /// A missing or empty field fails here, at construction, rather than
    /// producing a client whose first call fails with null credentials.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::invalid_config("minio endpoint must not be empty"));
        }
        if self.access_key.is_empty() {
            return Err(Error::invalid_config("minio access_key must not be empty"));
        }
        if self.secret_key.is_empty() {
            return Err(Error::invalid_config("minio secret_key must not be empty"));
        }
        Ok(())
    }

    /// Resolve the local staging directory for transfers
    pub fn staging_root(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Configuration for an Azure-style blob storage backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AzureBlobConfig {
    /// Full storage-account connection string
    pub connection_string: String,

    /// Local staging directory (default: the system temp directory)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl AzureBlobConfig {
    pub fn validate(&self) -> Result<()> {
        if self.connection_string.is_empty() {
            return Err(Error::invalid_config(
                "azure connection_string must not be empty",
            ));
        }
        Ok(())
    }

    /// Resolve the local staging directory for transfers
    pub fn staging_root(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Tagged union of per-backend configurations
///
/// Carrying the parameters inside the selector makes backend dispatch
/// total: the factory matches this enum exhaustively and the compiler
/// rejects any unhandled kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum BackendConfig {
    S3(S3Config),
    Minio(MinioConfig),
    AzureBlob(AzureBlobConfig),
}

impl BackendConfig {
    /// The backend this configuration selects
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendConfig::S3(_) => BackendKind::S3,
            BackendConfig::Minio(_) => BackendKind::Minio,
            BackendConfig::AzureBlob(_) => BackendKind::AzureBlob,
        }
    }

    /// Check required fields for the selected backend
    pub fn validate(&self) -> Result<()> {
        match self {
            BackendConfig::S3(_) => Ok(()),
            BackendConfig::Minio(config) => config.validate(),
            BackendConfig::AzureBlob(config) => config.validate(),
        }
    }

    /// Resolve the local staging directory for transfers
    pub fn staging_root(&self) -> PathBuf {
        match self {
            BackendConfig::S3(config) => config.staging_root(),
            BackendConfig::Minio(config) => config.staging_root(),
            BackendConfig::AzureBlob(config) => config.staging_root(),
        }
    }
}
