//! Command-line configuration for the `cattery` server.

use cattery_core::db::{open_db, open_db_in_memory};
use cattery_core::{default_log_level, RepoResult, SqliteCatRepository};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_LOG_DIR: &str = "logs";

/// Cats and owners CRUD server.
#[derive(Parser, Debug, Clone)]
#[command(name = "cattery", about = "Cats and owners CRUD server", version)]
pub struct ServerConfig {
    /// Listen address for the HTTP server.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Path to the SQLite database file (created when missing).
    #[arg(long = "db", default_value = "cattery.sqlite3")]
    pub db_path: PathBuf,

    /// Keep all data in memory; nothing survives a restart.
    #[arg(long = "in-memory", conflicts_with = "db_path")]
    pub in_memory: bool,

    /// One of trace|debug|info|warn|error.
    #[arg(long = "log-level", default_value_t = default_log_level().to_string())]
    pub log_level: String,

    /// Directory for rolling log files. Relative paths resolve against the
    /// working directory. Defaults to `./logs`.
    #[arg(long = "log-dir")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Returns the absolute log directory handed to `init_logging`.
    pub fn resolve_log_dir(&self) -> std::io::Result<PathBuf> {
        let dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
        if dir.is_absolute() {
            return Ok(dir);
        }
        Ok(std::env::current_dir()?.join(dir))
    }

    /// Opens the configured database and wraps it in a cat repository.
    pub fn open_repository(&self) -> RepoResult<SqliteCatRepository> {
        let conn = if self.in_memory {
            open_db_in_memory()?
        } else {
            open_db(&self.db_path)?
        };
        SqliteCatRepository::try_new(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = ServerConfig::try_parse_from(["cattery"]).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080");
        assert_eq!(config.db_path, PathBuf::from("cattery.sqlite3"));
        assert!(!config.in_memory);
        assert_eq!(config.log_level, cattery_core::default_log_level());
        assert!(config.resolve_log_dir().unwrap().ends_with("logs"));
    }

    #[test]
    fn explicit_arguments_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "cattery",
            "--listen",
            "127.0.0.1:9000",
            "--in-memory",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/cattery",
        ])
        .unwrap();
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert!(config.in_memory);
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.resolve_log_dir().unwrap(),
            PathBuf::from("/var/log/cattery")
        );
    }

    #[test]
    fn in_memory_conflicts_with_explicit_db_path() {
        let result =
            ServerConfig::try_parse_from(["cattery", "--in-memory", "--db", "cats.sqlite3"]);
        assert!(result.is_err());
    }

    #[test]
    fn open_repository_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cats.sqlite3");
        let config = ServerConfig::try_parse_from([
            "cattery",
            "--db",
            path.to_str().unwrap(),
        ])
        .unwrap();

        config.open_repository().unwrap();
        assert!(path.exists());
    }
}
