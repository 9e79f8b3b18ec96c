pub mod init;
pub mod object;

use anyhow::Result;
use sqlblob_core::StoreKind;
use sqlblob_storage::SqlBackend;
use std::path::Path;

use crate::cli::Commands;

pub async fn dispatch(cmd: Commands, backend: &SqlBackend) -> Result<()> {
    match cmd {
        Commands::Init => init::handle(backend).await,
        Commands::Ls { prefix, json } => object::list(backend, &prefix, json).await,
        Commands::Get { path, output } => object::get(backend, &path, output.as_deref()).await,
        Commands::Put { path, source } => object::put(backend, &path, &source).await,
        Commands::Rm { path } => object::remove(backend, &path).await,
        Commands::Stat { path } => object::stat(backend, &path).await,
    }
}

/// Create the parent directory of a bare SQLite path so the file can be created
pub fn prepare_target(kind: StoreKind, dsn: &str) -> Result<()> {
    if kind != StoreKind::Sqlite || dsn.starts_with("sqlite:") || dsn == ":memory:" {
        return Ok(());
    }
    let file = dsn.split_once('?').map_or(dsn, |(file, _)| file);
    if let Some(parent) = Path::new(file).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
