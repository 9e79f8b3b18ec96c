//! Connection string normalisation
//!
//! Both constructors hand a URL to the driver. Operators tend to carry DSNs in the
//! go-sql-driver form (`user:pass@tcp(host:3306)/db?charset=utf8mb4&parseTime=True`) and bare
//! file paths for SQLite, so those are rewritten here.

use tracing::debug;
use url::Url;

use crate::error::{Result, StorageError};

const DEFAULT_MYSQL_ADDR: &str = "127.0.0.1:3306";

/// Query parameters carried over from a go-style MySQL DSN
const MYSQL_KEPT_PARAMS: &[&str] = &["charset", "collation"];

/// Normalise a SQLite DSN into a `sqlite:` URL.
///
/// Bare paths are opened read-write and created when missing.
pub fn sqlite_url(dsn: &str) -> Result<String> {
    let dsn = dsn.trim();
    if dsn.is_empty() {
        return Err(StorageError::InvalidDsn("empty sqlite path".to_string()));
    }
    if dsn == ":memory:" {
        return Ok("sqlite::memory:".to_string());
    }
    if dsn.starts_with("sqlite:") {
        return Ok(dsn.to_string());
    }
    let url = match dsn.split_once('?') {
        Some((_, query)) if query.split('&').any(|p| p.starts_with("mode=")) => {
            format!("sqlite:{dsn}")
        }
        Some(_) => format!("sqlite:{dsn}&mode=rwc"),
        None => format!("sqlite:{dsn}?mode=rwc"),
    };
    Ok(url)
}

/// Normalise a MySQL DSN into a `mysql://` URL.
pub fn mysql_url(dsn: &str) -> Result<String> {
    let dsn = dsn.trim();
    if dsn.starts_with("mysql://") || dsn.starts_with("mariadb://") {
        Url::parse(dsn).map_err(|e| StorageError::InvalidDsn(e.to_string()))?;
        return Ok(dsn.to_string());
    }
    parse_go_dsn(dsn).map(|url| url.to_string())
}

/// `[user[:password]@][net[(addr)]]/dbname[?param1=value1&paramN=valueN]`
fn parse_go_dsn(dsn: &str) -> Result<Url> {
    let invalid = |reason: &str| StorageError::InvalidDsn(format!("{reason}: {dsn}"));

    // Credentials may contain '?', so parameters are only looked for after the last '/'
    let slash = dsn.rfind('/').ok_or_else(|| invalid("missing /dbname"))?;
    let (head, tail) = (&dsn[..slash], &dsn[slash + 1..]);
    let (database, params) = match tail.split_once('?') {
        Some((database, params)) => (database, Some(params)),
        None => (tail, None),
    };

    let (userinfo, address) = match head.rfind('@') {
        Some(at) => (Some(&head[..at]), &head[at + 1..]),
        None => (None, head),
    };

    let (net, addr) = match address.find('(') {
        Some(open) => {
            let inner = address[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| invalid("unterminated address"))?;
            (&address[..open], inner)
        }
        None => (address, ""),
    };

    let (host, socket) = match net {
        "" | "tcp" => (if addr.is_empty() { DEFAULT_MYSQL_ADDR } else { addr }, None),
        "unix" if !addr.is_empty() => ("localhost", Some(addr)),
        "unix" => return Err(invalid("unix network requires a socket path")),
        _ => return Err(invalid("unsupported network")),
    };

    let mut url =
        Url::parse(&format!("mysql://{host}/")).map_err(|e| invalid(&format!("address ({e})")))?;
    url.set_path(&format!("/{database}"));

    if let Some(userinfo) = userinfo {
        let (user, password) = match userinfo.split_once(':') {
            Some((user, password)) => (user, Some(password)),
            None => (userinfo, None),
        };
        url.set_username(user)
            .map_err(|_| invalid("cannot set user"))?;
        url.set_password(password)
            .map_err(|_| invalid("cannot set password"))?;
    }

    {
        let mut query = url.query_pairs_mut();
        if let Some(socket) = socket {
            query.append_pair("socket", socket);
        }
        for pair in params.into_iter().flat_map(|p| p.split('&')) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if !MYSQL_KEPT_PARAMS.contains(&key) {
                debug!("Dropping DSN parameter {}", key);
                continue;
            }
            // go-sql-driver accepts a fallback list; the first charset wins
            let value = value.split(',').next().unwrap_or(value);
            query.append_pair(key, value);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url)
}
