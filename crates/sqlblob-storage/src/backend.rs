//! Object CRUD over a relational table

use async_trait::async_trait;
use sqlblob_core::{Object, StoreKind};
use sqlx::AnyPool;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::{Result, StorageError};
use crate::models::{self, Record, RecordSummary};
use crate::store::ObjectStore;
use crate::{codec, schema};

/// Object storage engine shared by every store kind.
///
/// Built through [`SqlBackend::sqlite`], [`SqlBackend::mysql`] or [`SqlBackend::connect`]; the
/// kind only selects the SQL dialect. The pool is owned for the backend's lifetime and cloning
/// the backend shares it.
#[derive(Debug, Clone)]
pub struct SqlBackend {
    pool: AnyPool,
    kind: StoreKind,
}

impl SqlBackend {
    /// Connect to the store `kind` described by `dsn`.
    pub async fn connect(kind: StoreKind, dsn: &str) -> Result<Self> {
        match kind {
            StoreKind::Sqlite => Self::sqlite(dsn).await,
            StoreKind::Mysql => Self::mysql(dsn).await,
        }
    }

    pub(crate) fn from_pool(pool: AnyPool, kind: StoreKind) -> Self {
        Self { pool, kind }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Create the objects table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(schema::create_table(self.kind))
            .execute(&self.pool)
            .await?;
        info!("Ensured {} table on {} store", schema::TABLE, self.kind);
        Ok(())
    }

    /// Close every connection held by the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn list_objects(&self, prefix: &str) -> Result<Vec<Object>> {
        if !prefix.is_empty() {
            return Err(StorageError::UnsupportedOperation(format!(
                "{} backend does not support listing with a prefix: prefix={}",
                self.kind, prefix
            )));
        }

        let rows: Vec<RecordSummary> = sqlx::query_as(schema::SELECT_ALL_SUMMARIES)
            .fetch_all(&self.pool)
            .await?;
        debug!("Listed {} objects", rows.len());

        rows.into_iter().map(RecordSummary::into_object).collect()
    }

    pub async fn get_object(&self, path: &str) -> Result<Object> {
        let record = self
            .find(path)
            .await?
            .ok_or_else(|| StorageError::NotFound(path.to_string()))?;
        record.into_object()
    }

    pub async fn put_object(&self, path: &str, content: &[u8]) -> Result<()> {
        let encoded = codec::encode(content);
        let now = models::unix_millis(OffsetDateTime::now_utc());

        sqlx::query(schema::upsert(self.kind))
            .bind(path)
            .bind(encoded)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;
        debug!("Stored {} ({} bytes)", path, content.len());

        Ok(())
    }

    pub async fn delete_object(&self, path: &str) -> Result<()> {
        let result = sqlx::query(schema::DELETE_BY_PATH)
            .bind(path)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!("Delete of missing object {} ignored", path);
        } else {
            debug!("Deleted {}", path);
        }
        Ok(())
    }

    async fn find(&self, path: &str) -> Result<Option<Record>> {
        let record: Option<Record> = sqlx::query_as(schema::SELECT_BY_PATH)
            .bind(path)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }
}

#[async_trait]
impl ObjectStore for SqlBackend {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<Object>> {
        SqlBackend::list_objects(self, prefix).await
    }

    async fn get_object(&self, path: &str) -> Result<Object> {
        SqlBackend::get_object(self, path).await
    }

    async fn put_object(&self, path: &str, content: &[u8]) -> Result<()> {
        SqlBackend::put_object(self, path, content).await
    }

    async fn delete_object(&self, path: &str) -> Result<()> {
        SqlBackend::delete_object(self, path).await
    }
}
