use sqlblob_core::Object;
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use time::OffsetDateTime;

use crate::codec;
use crate::error::{Result, StorageError};

/// Row of the `objects` table
///
/// `content` holds the raw bytes of the stored base64 text.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: i64,
    pub path: String,
    pub content: Vec<u8>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl<'r> FromRow<'r, AnyRow> for Record {
    fn from_row(row: &'r AnyRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            path: text_column(row, "path")?,
            content: text_bytes(row, "content")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Record {
    pub fn into_object(self) -> Result<Object> {
        let content = codec::decode(&self.content)
            .map_err(|e| StorageError::corrupt(&self.path, format!("content: {e}")))?;
        let last_modified = from_unix_millis(&self.path, self.updated_at)?;
        Ok(Object::new(self.path, content, last_modified))
    }
}

/// Path and modification time, as selected by listings
#[derive(Debug, Clone)]
pub struct RecordSummary {
    pub path: String,
    pub updated_at: i64,
}

impl<'r> FromRow<'r, AnyRow> for RecordSummary {
    fn from_row(row: &'r AnyRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            path: text_column(row, "path")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Read a text column as bytes.
///
/// MySQL reports TEXT/LONGTEXT (and `_bin` collated) columns with a BLOB wire type, which the
/// `Any` driver surfaces as a blob rather than text.
fn text_bytes(row: &AnyRow, column: &str) -> std::result::Result<Vec<u8>, sqlx::Error> {
    match row.try_get::<String, _>(column) {
        Ok(text) => Ok(text.into_bytes()),
        Err(sqlx::Error::ColumnDecode { .. }) => row.try_get::<Vec<u8>, _>(column),
        Err(e) => Err(e),
    }
}

fn text_column(row: &AnyRow, column: &str) -> std::result::Result<String, sqlx::Error> {
    String::from_utf8(text_bytes(row, column)?).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl RecordSummary {
    pub fn into_object(self) -> Result<Object> {
        let last_modified = from_unix_millis(&self.path, self.updated_at)?;
        Ok(Object::summary(self.path, last_modified))
    }
}

pub fn unix_millis(ts: OffsetDateTime) -> i64 {
    (ts.unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn from_unix_millis(path: &str, millis: i64) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .map_err(|e| StorageError::corrupt(path, format!("timestamp {millis}: {e}")))
}
