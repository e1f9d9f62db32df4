//! Object store trait definition
//!
//! Defines the async interface that all storage backends must implement.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use store_core::{BackendKind, Result};

/// Async trait for cloud object-storage clients
///
/// A client is bound to a single backend and credential set for its entire
/// lifetime; to point at a different backend, construct a new client through
/// the factory. Clients keep no registry of transferred objects and share no
/// mutable state with each other.
///
/// Transfers go through a local staging directory. The staging path for an
/// object is `<staging_dir>/<object_name>` and is not namespaced per call:
/// concurrent retrievals of the same object name into the same staging
/// directory race on the same file. Object names are joined to the staging
/// directory verbatim, so a name containing path separators nests under the
/// staging directory (and a `..` component escapes it). Both mirror the
/// conventional `/tmp/<name>` staging layout and are documented limitations,
/// not handled by this layer.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// The provider this client was constructed for
    fn kind(&self) -> BackendKind;

    /// Download an object to the local staging path
    ///
    /// # Arguments
    /// * `source_bucket` - Bucket or container holding the object
    /// * `object_name` - Name of the object within the bucket
    ///
    /// # Returns
    /// The staging path the object was written to
    ///
    /// # Errors
    /// Any provider failure (missing object, bad credentials, network)
    /// collapses into [`store_core::Error::Retrieval`] wrapping the cause.
    async fn retrieve_from_bucket(
        &self,
        source_bucket: &str,
        object_name: &str,
    ) -> Result<PathBuf>;

    /// Upload a local file as an object
    ///
    /// Calling twice for the same object overwrites; no idempotency check
    /// is performed by this layer.
    ///
    /// # Arguments
    /// * `destination_bucket` - Bucket or container to store into
    /// * `object_name` - Name to store the object under
    /// * `local_path` - Local file whose contents become the object
    ///
    /// # Errors
    /// Any provider failure collapses into [`store_core::Error::Storage`]
    /// wrapping the cause. A failed upload leaves the destination in
    /// whatever state the provider left it.
    async fn store_to_bucket(
        &self,
        destination_bucket: &str,
        object_name: &str,
        local_path: &Path,
    ) -> Result<()>;
}

/// Staging path for an object name under the client's staging directory
pub(crate) fn staging_path(staging_dir: &Path, object_name: &str) -> PathBuf {
    staging_dir.join(object_name)
}
