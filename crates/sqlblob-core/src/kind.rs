use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relational store flavour a backend talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Local single-file store, single process
    #[default]
    Sqlite,
    /// Networked store shared by several processes
    Mysql,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Sqlite => "sqlite",
            StoreKind::Mysql => "mysql",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(StoreKind::Sqlite),
            "mysql" => Ok(StoreKind::Mysql),
            other => Err(format!("unknown store kind: {other} (expected sqlite or mysql)")),
        }
    }
}
