//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_infra::database::{DatabaseConfig, DatabaseDriver, DatabaseParts};

/// Configuration errors - reported once at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} is required for the database backend")]
    Missing(&'static str),
}

/// Which post store the server runs on.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// JSON file at the given path.
    File { path: PathBuf },
    /// Seeded in-memory store, lost on restart.
    Memory,
    /// PostgreSQL or MySQL.
    Database(DatabaseConfig),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub allowed_origin: String,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = var("APP_ENV").unwrap_or_else(|| "development".to_string());
        let production = environment == "production";

        let allowed_origin = if production {
            var("ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string())
        } else {
            "http://localhost:3000".to_string()
        };

        let port = match var("PORT") {
            Some(p) => p.parse().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: p.clone(),
                reason: format!("{e}"),
            })?,
            None => 3001,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            storage: Self::storage(&var, production)?,
            environment,
            allowed_origin,
        })
    }

    /// Pick the storage backend.
    /// `STORAGE_BACKEND` wins; otherwise a database is used when `DATABASE_URL`
    /// or `DB_HOST` is set, and the JSON file store when neither is.
    fn storage(
        var: &impl Fn(&str) -> Option<String>,
        production: bool,
    ) -> Result<StorageConfig, ConfigError> {
        let has_database = var("DATABASE_URL").is_some() || var("DB_HOST").is_some();
        let backend = var("STORAGE_BACKEND").unwrap_or_else(|| {
            if has_database { "database" } else { "file" }.to_string()
        });
        let backend = backend.to_lowercase();

        match backend.as_str() {
            "file" => {
                let default_path = if production {
                    // Serverless hosts only allow writes under /tmp
                    "/tmp/data/posts.json"
                } else {
                    "data/posts.json"
                };
                let path = var("POSTS_FILE").unwrap_or_else(|| default_path.to_string());
                Ok(StorageConfig::File { path: path.into() })
            }
            "memory" => Ok(StorageConfig::Memory),
            "database" | "postgres" | "mysql" => Ok(StorageConfig::Database(
                Self::database(var, &backend)?,
            )),
            _ => Err(ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                value: backend,
                reason: "expected file, memory or database".to_string(),
            }),
        }
    }

    fn database(
        var: &impl Fn(&str) -> Option<String>,
        backend: &str,
    ) -> Result<DatabaseConfig, ConfigError> {
        let config = match var("DATABASE_URL") {
            Some(url) => DatabaseConfig::from_url(url),
            None => {
                let driver_name = var("DB_DRIVER").unwrap_or_else(|| match backend {
                    "mysql" => "mysql".to_string(),
                    _ => "postgres".to_string(),
                });
                let driver: DatabaseDriver =
                    driver_name.parse().map_err(|reason| ConfigError::Invalid {
                        key: "DB_DRIVER",
                        value: driver_name.clone(),
                        reason,
                    })?;

                let port = match var("DB_PORT") {
                    Some(p) => Some(p.parse().map_err(|e| ConfigError::Invalid {
                        key: "DB_PORT",
                        value: p.clone(),
                        reason: format!("{e}"),
                    })?),
                    None => None,
                };

                let host = var("DB_HOST").ok_or(ConfigError::Missing("DB_HOST"))?;
                DatabaseConfig::from_parts(&DatabaseParts {
                    driver,
                    host: host.clone(),
                    port,
                    user: var("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
                    password: var("DB_PASSWORD").unwrap_or_default(),
                    database: var("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
                })
                .map_err(|e| ConfigError::Invalid {
                    key: "DB_HOST",
                    value: host,
                    reason: e.to_string(),
                })?
            }
        };

        Ok(config.with_pool(
            var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.environment, "development");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert!(matches!(
            config.storage,
            StorageConfig::File { ref path } if path == &PathBuf::from("data/posts.json")
        ));
    }

    #[test]
    fn test_production_file_and_origin() {
        let config = load(&[
            ("APP_ENV", "production"),
            ("ALLOWED_ORIGIN", "https://blog.example.edu"),
        ])
        .unwrap();
        assert_eq!(config.allowed_origin, "https://blog.example.edu");
        assert!(matches!(
            config.storage,
            StorageConfig::File { ref path } if path == &PathBuf::from("/tmp/data/posts.json")
        ));
    }

    #[test]
    fn test_database_url_implies_database() {
        let config = load(&[
            ("DATABASE_URL", "postgres://u:p@localhost/blog"),
            ("DB_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();
        match config.storage {
            StorageConfig::Database(db) => {
                assert_eq!(db.url, "postgres://u:p@localhost/blog");
                assert_eq!(db.max_connections, 4);
                assert_eq!(db.min_connections, 1);
            }
            other => panic!("expected database storage, got {other:?}"),
        }
    }

    #[test]
    fn test_discrete_mysql_parameters() {
        let config = load(&[
            ("STORAGE_BACKEND", "mysql"),
            ("DB_HOST", "db"),
            ("DB_USER", "blog"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "posts"),
        ])
        .unwrap();
        match config.storage {
            StorageConfig::Database(db) => assert_eq!(db.url, "mysql://blog:pw@db:3306/posts"),
            other => panic!("expected database storage, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_database_name() {
        let err = load(&[("DB_HOST", "db"), ("DB_USER", "blog")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_NAME")));
    }

    #[test]
    fn test_memory_backend_and_bad_values() {
        assert!(matches!(
            load(&[("STORAGE_BACKEND", "memory")]).unwrap().storage,
            StorageConfig::Memory
        ));
        assert!(load(&[("STORAGE_BACKEND", "redis")]).is_err());
        assert!(load(&[("PORT", "eighty")]).is_err());
    }
}
