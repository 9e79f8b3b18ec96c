//! Networked backend on a shared MySQL server

use sqlblob_core::StoreKind;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use tracing::info;
use url::Url;

use crate::backend::SqlBackend;
use crate::dsn;
use crate::error::Result;

impl SqlBackend {
    /// Connect to MySQL with either a `mysql://` URL or a go-sql-driver style DSN.
    pub async fn mysql(dsn: &str) -> Result<Self> {
        let url = dsn::mysql_url(dsn)?;
        install_default_drivers();

        let pool = AnyPoolOptions::new().connect(&url).await?;

        // Never log credentials
        let target = Url::parse(&url)
            .ok()
            .map(|u| format!("{}{}", u.host_str().unwrap_or("localhost"), u.path()))
            .unwrap_or_default();
        info!("Connected to mysql object store {}", target);

        Ok(Self::from_pool(pool, StoreKind::Mysql))
    }
}
