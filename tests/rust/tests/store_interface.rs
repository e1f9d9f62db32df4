//! Trait-level tests for the retrieve/store contract.
//!
//! Real provider calls are out of scope for unit tests, so the contract is
//! exercised against an in-memory backend implementing `ObjectStore`.

use std::collections::HashMap;
use std::error::Error as _;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use storage::ObjectStore;
use store_core::{BackendKind, Error, Result};

/// In-memory fake provider backend.
///
/// Objects live in a map keyed by (bucket, object name); retrieval stages
/// them under `staging_dir` exactly like the real backends do. Setting
/// `fail_with` makes every provider call fail with that message, standing in
/// for a forced SDK exception.
struct InMemoryStore {
    staging_dir: PathBuf,
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    fail_with: Option<&'static str>,
}

impl InMemoryStore {
    fn new(staging_dir: &Path) -> Self {
        Self {
            staging_dir: staging_dir.to_path_buf(),
            objects: Mutex::new(HashMap::new()),
            fail_with: None,
        }
    }

    fn failing(staging_dir: &Path, message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Self::new(staging_dir)
        }
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    fn kind(&self) -> BackendKind {
        BackendKind::S3
    }

    async fn retrieve_from_bucket(
        &self,
        source_bucket: &str,
        object_name: &str,
    ) -> Result<PathBuf> {
        if let Some(message) = self.fail_with {
            let cause = io::Error::new(io::ErrorKind::Other, message);
            return Err(Error::retrieval(source_bucket, object_name, cause));
        }

        let key = (source_bucket.to_string(), object_name.to_string());
        let data = {
            let objects = self.objects.lock().unwrap();
            objects.get(&key).cloned()
        };

        let data = data.ok_or_else(|| {
            let cause = io::Error::new(io::ErrorKind::NotFound, "no such key");
            Error::retrieval(source_bucket, object_name, cause)
        })?;

        let staging = self.staging_dir.join(object_name);
        std::fs::write(&staging, data).map_err(|e| Error::retrieval(source_bucket, object_name, e))?;
        Ok(staging)
    }

    async fn store_to_bucket(
        &self,
        destination_bucket: &str,
        object_name: &str,
        local_path: &Path,
    ) -> Result<()> {
        if let Some(message) = self.fail_with {
            let cause = io::Error::new(io::ErrorKind::Other, message);
            return Err(Error::storage(destination_bucket, object_name, cause));
        }

        let data = std::fs::read(local_path)
            .map_err(|e| Error::storage(destination_bucket, object_name, e))?;

        let key = (destination_bucket.to_string(), object_name.to_string());
        self.objects.lock().unwrap().insert(key, data);
        Ok(())
    }
}

#[tokio::test]
async fn test_round_trip_preserves_bytes() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::new(staging.path());

    let source = staging.path().join("source.bin");
    std::fs::write(&source, b"round trip payload").unwrap();

    store.store_to_bucket("b1", "f.bin", &source).await.unwrap();
    let retrieved = store.retrieve_from_bucket("b1", "f.bin").await.unwrap();

    assert_eq!(
        std::fs::read(&retrieved).unwrap(),
        std::fs::read(&source).unwrap()
    );
}

#[tokio::test]
async fn test_retrieve_returns_staging_path() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::new(staging.path());

    let source = staging.path().join("in.txt");
    std::fs::write(&source, b"data").unwrap();
    store.store_to_bucket("b1", "f.txt", &source).await.unwrap();

    let retrieved = store.retrieve_from_bucket("b1", "f.txt").await.unwrap();
    assert_eq!(retrieved, staging.path().join("f.txt"));
}

#[tokio::test]
async fn test_store_twice_overwrites() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::new(staging.path());

    let first = staging.path().join("v1.txt");
    let second = staging.path().join("v2.txt");
    std::fs::write(&first, b"version one").unwrap();
    std::fs::write(&second, b"version two").unwrap();

    store.store_to_bucket("b1", "f.txt", &first).await.unwrap();
    store.store_to_bucket("b1", "f.txt", &second).await.unwrap();

    let retrieved = store.retrieve_from_bucket("b1", "f.txt").await.unwrap();
    assert_eq!(std::fs::read(&retrieved).unwrap(), b"version two");
}

#[tokio::test]
async fn test_missing_object_is_a_retrieval_error() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::new(staging.path());

    let result = store.retrieve_from_bucket("b1", "missing.txt").await;
    assert!(matches!(result, Err(Error::Retrieval { .. })));
}

#[tokio::test]
async fn test_provider_failure_surfaces_retrieval_error() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::failing(staging.path(), "connection reset by provider");

    let err = store
        .retrieve_from_bucket("b1", "f.txt")
        .await
        .unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("error retrieving object from the bucket"));
    assert!(rendered.contains("connection reset by provider"));
    assert_eq!(
        err.source().unwrap().to_string(),
        "connection reset by provider"
    );
}

#[tokio::test]
async fn test_provider_failure_surfaces_storage_error() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::failing(staging.path(), "upload rejected");

    let source = staging.path().join("f.txt");
    std::fs::write(&source, b"data").unwrap();

    let err = store
        .store_to_bucket("b1", "f.txt", &source)
        .await
        .unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("error storing object to the bucket"));
    assert!(rendered.contains("upload rejected"));
}

#[tokio::test]
async fn test_store_missing_local_file_is_a_storage_error() {
    let staging = TempDir::new().unwrap();
    let store = InMemoryStore::new(staging.path());

    let result = store
        .store_to_bucket("b1", "f.txt", Path::new("/nonexistent/f.txt"))
        .await;
    assert!(matches!(result, Err(Error::Storage { .. })));
}
