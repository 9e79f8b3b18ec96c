use anyhow::{Context, Result};
use sqlblob_storage::ObjectStore;
use std::io::{Read, Write};
use std::path::Path;
use time::format_description::well_known::Rfc3339;

pub async fn list(store: &dyn ObjectStore, prefix: &str, json: bool) -> Result<()> {
    let objects = store.list_objects(prefix).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&objects)?);
        return Ok(());
    }

    if objects.is_empty() {
        println!("No objects found.");
        return Ok(());
    }

    for obj in objects {
        println!("{}  {}", obj.last_modified.format(&Rfc3339)?, obj.path);
    }
    Ok(())
}

pub async fn get(store: &dyn ObjectStore, path: &str, output: Option<&Path>) -> Result<()> {
    let obj = store.get_object(path).await?;

    match output {
        Some(file) => {
            std::fs::write(file, &obj.content)
                .with_context(|| format!("writing {}", file.display()))?;
            eprintln!("✓ Wrote {} bytes to {}", obj.content.len(), file.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&obj.content)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub async fn put(store: &dyn ObjectStore, path: &str, source: &Path) -> Result<()> {
    let content = read_source(source)?;
    store.put_object(path, &content).await?;
    println!("✓ Stored {} ({} bytes)", path, content.len());
    Ok(())
}

pub async fn remove(store: &dyn ObjectStore, path: &str) -> Result<()> {
    store.delete_object(path).await?;
    println!("✓ Deleted {}", path);
    Ok(())
}

pub async fn stat(store: &dyn ObjectStore, path: &str) -> Result<()> {
    let obj = store.get_object(path).await?;
    println!("{}", obj.path);
    println!("  Size: {} bytes", obj.content.len());
    println!("  Last modified: {}", obj.last_modified.format(&Rfc3339)?);
    println!("  BLAKE3: {}", blake3::hash(&obj.content).to_hex());
    Ok(())
}

fn read_source(source: &Path) -> Result<Vec<u8>> {
    if source == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read(source).with_context(|| format!("reading {}", source.display()))
}
