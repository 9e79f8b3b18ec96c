//! Embedded backend on a local single-file store

use sqlblob_core::StoreKind;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use tracing::info;

use crate::backend::SqlBackend;
use crate::dsn;
use crate::error::Result;

impl SqlBackend {
    /// Open the embedded backend on a SQLite file path, `sqlite:` URL or `:memory:`.
    ///
    /// The pool holds a single connection that is never recycled: SQLite admits one writer,
    /// and an in-memory database lives only as long as its connection.
    pub async fn sqlite(dsn: &str) -> Result<Self> {
        let url = dsn::sqlite_url(dsn)?;
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&url)
            .await?;
        info!("Opened sqlite object store {}", url);

        Ok(Self::from_pool(pool, StoreKind::Sqlite))
    }
}
