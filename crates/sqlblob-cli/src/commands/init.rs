use anyhow::Result;
use sqlblob_storage::SqlBackend;

pub async fn handle(backend: &SqlBackend) -> Result<()> {
    backend.ensure_schema().await?;
    println!("✓ Initialized {} object store", backend.kind());
    Ok(())
}
