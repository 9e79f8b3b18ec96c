use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A named blob as seen by callers of a storage backend.
///
/// Listings return objects with empty `content`; fetch a single object to get its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<u8>,
    #[serde(with = "time::serde::timestamp::milliseconds")]
    pub last_modified: OffsetDateTime,
}

impl Object {
    pub fn new(path: impl Into<String>, content: Vec<u8>, last_modified: OffsetDateTime) -> Self {
        Self {
            path: path.into(),
            content,
            last_modified,
        }
    }

    /// Listing entry without payload
    pub fn summary(path: impl Into<String>, last_modified: OffsetDateTime) -> Self {
        Self::new(path, Vec::new(), last_modified)
    }

    /// Whether the path ends with `.{extension}`. A leading dot on `extension` is ignored.
    pub fn has_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            return false;
        }
        self.path
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext == extension)
    }
}
