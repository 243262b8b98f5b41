//! Database configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the blog database; the file on disk is `<name>.sqlite3`
pub const DATABASE_NAME: &str = "BlogDB";

/// Overrides the database location when set
pub const DATABASE_PATH_ENV: &str = "BLOGDB_DATABASE_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Logical name of the database, used in log output
    #[serde(default = "default_database_name")]
    pub database_name: String,
}

fn default_database_name() -> String {
    DATABASE_NAME.to_string()
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self::named(data_dir, DATABASE_NAME)
    }

    /// Database `<name>.sqlite3` inside `data_dir`
    pub fn named(data_dir: PathBuf, name: impl Into<String>) -> Self {
        let database_name = name.into();
        Self {
            database_path: data_dir.join(format!("{database_name}.sqlite3")),
            database_name,
        }
    }

    /// Use an explicit file; the name is taken from its file stem
    pub fn with_database_path(database_path: impl Into<PathBuf>) -> Self {
        let database_path = database_path.into();
        let database_name = database_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(default_database_name);

        Self {
            database_path,
            database_name,
        }
    }

    /// Default configuration, honoring `BLOGDB_DATABASE_PATH`
    pub fn from_env() -> Self {
        match std::env::var_os(DATABASE_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::with_database_path(path),
            _ => Self::new(Self::data_dir()),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("blogdb"))
            .unwrap_or_else(|| PathBuf::from(".blogdb"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
