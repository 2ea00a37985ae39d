use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ApplicationError, ConfigLoadSnafu};
use crate::service::database::DatabaseConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(rename = "host_address", default = "default_host")]
    pub host: SocketAddr,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Whether views are only counted for drafts present in the `drafts` collection.
    ///
    /// This service never writes `drafts`, the draft service has to share the same namespace and database.
    /// Disable it when drafts live elsewhere, otherwise every increment is answered with 404.
    #[serde(default = "default_verify_content")]
    pub verify_content: bool,
    #[serde(flatten)]
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        envy::from_env::<Config>().context(ConfigLoadSnafu)
    }
}

fn default_host() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_verify_content() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter::<_, Config>(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        )
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, default_host());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.verify_content);
        assert_eq!(config.database.url.as_str(), "mem://");
        assert_eq!(config.database.namespace, "microsaas");
        assert_eq!(config.database.database, "microsaas");
        assert!(config.database.credentials.is_none());
    }

    #[test]
    fn reads_the_environment() {
        let config = load(&[
            ("HOST_ADDRESS", "127.0.0.1:8003"),
            ("VERIFY_CONTENT", "false"),
            ("SURREAL_URL", "http://localhost:8080"),
            ("SURREAL_NS", "prod"),
            ("SURREAL_DB", "content"),
            ("SURREAL_USER", "root"),
            ("SURREAL_PASS", "hunter2"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.host, SocketAddr::from(([127, 0, 0, 1], 8003)));
        assert!(!config.verify_content);
        assert_eq!(config.database.url.as_str(), "http://localhost:8080/");
        assert_eq!(config.database.namespace, "prod");
        assert_eq!(config.database.database, "content");

        let credentials = config.database.credentials.unwrap();
        assert_eq!(credentials.username, "root");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(load(&[("HOST_ADDRESS", "not an address")]).is_err());
    }
}
