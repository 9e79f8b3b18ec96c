use async_trait::async_trait;
use sqlblob_core::Object;

use crate::Result;

/// Path-keyed object operations consumed by repository layers.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List every object without payload. Only the empty prefix is supported.
    async fn list_objects(&self, prefix: &str) -> Result<Vec<Object>>;

    /// Fetch one object with its content.
    async fn get_object(&self, path: &str) -> Result<Object>;

    /// Create the object or replace its content.
    async fn put_object(&self, path: &str, content: &[u8]) -> Result<()>;

    /// Remove the object. Removing a missing path succeeds.
    async fn delete_object(&self, path: &str) -> Result<()>;
}
