//! Table layout per store kind

use sqlblob_core::StoreKind;

pub const TABLE: &str = "objects";

const SQLITE_CREATE: &str = "CREATE TABLE IF NOT EXISTS objects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    path TEXT NOT NULL UNIQUE,
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
)";

// 768 utf8mb4 characters is the widest VARCHAR InnoDB can put a unique index on.
// Paths compare byte for byte, as SQLite's BINARY collation does.
const MYSQL_CREATE: &str = "CREATE TABLE IF NOT EXISTS objects (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    path VARCHAR(768) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
    content LONGTEXT NOT NULL,
    created_at BIGINT NOT NULL,
    updated_at BIGINT NOT NULL,
    UNIQUE KEY idx_objects_path (path)
) DEFAULT CHARSET = utf8mb4";

const SQLITE_UPSERT: &str = "INSERT INTO objects (path, content, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    ON CONFLICT(path) DO UPDATE SET content = excluded.content, updated_at = excluded.updated_at";

const MYSQL_UPSERT: &str = "INSERT INTO objects (path, content, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    ON DUPLICATE KEY UPDATE content = VALUES(content), updated_at = VALUES(updated_at)";

pub const SELECT_ALL_SUMMARIES: &str = "SELECT path, updated_at FROM objects ORDER BY path";

pub const SELECT_BY_PATH: &str =
    "SELECT id, path, content, created_at, updated_at FROM objects WHERE path = ?";

pub const DELETE_BY_PATH: &str = "DELETE FROM objects WHERE path = ?";

pub fn create_table(kind: StoreKind) -> &'static str {
    match kind {
        StoreKind::Sqlite => SQLITE_CREATE,
        StoreKind::Mysql => MYSQL_CREATE,
    }
}

/// Single-statement create-or-replace keyed by path.
///
/// Binds: path, encoded content, created_at, updated_at. On conflict only content and
/// `updated_at` change, so `id` and `created_at` stay as first written.
pub fn upsert(kind: StoreKind) -> &'static str {
    match kind {
        StoreKind::Sqlite => SQLITE_UPSERT,
        StoreKind::Mysql => MYSQL_UPSERT,
    }
}
