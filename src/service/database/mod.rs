use serde::Deserialize;
use snafu::ResultExt;
use std::ops::Deref;
use surrealdb::{engine::any::Any, opt::auth, Surreal};
use url::Url;

pub use error::*;
pub use query::*;

mod error;
mod query;

const SETUP: &str = include_str!("../../../schema.surrealql");

/// Address of an in-memory datastore, every connection to it starts empty.
pub const MEMORY: &str = "mem://";

#[derive(Debug, Clone)]
pub struct Backend {
    database: Surreal<Any>,
}

impl Backend {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        Self::new(
            config.url.as_str(),
            &config.namespace,
            &config.database,
            config.credentials.as_ref(),
        )
        .await
    }

    /// Connects to a fresh in-memory datastore.
    pub async fn memory() -> Result<Self> {
        Self::new(MEMORY, "microsaas", "microsaas", None).await
    }

    async fn new(
        address: &str, namespace: &str, database: &str, credentials: Option<&DatabaseCredentials>,
    ) -> Result<Self> {
        tracing::info!(address, namespace, database, "connecting to the database");

        let db = surrealdb::engine::any::connect(address)
            .await
            .context(DatabaseConnectionSnafu { url: address })?;

        if let Some(credentials) = credentials {
            db.signin(credentials.auth())
                .await
                .context(SignInSnafu {
                    url: address,
                    username: &credentials.username,
                })?;
        }

        db.use_ns(namespace)
            .use_db(database)
            .await
            .context(SelectDatabaseSnafu {
                namespace,
                database,
            })?;

        db.query(SETUP)
            .await
            .context(SchemaSnafu)?
            .check()
            .context(SchemaSnafu)?;

        Ok(Self { database: db })
    }
}

impl Deref for Backend {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.database
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "surreal_url", default = "default_url")]
    pub url: Url,
    #[serde(rename = "surreal_ns", default = "default_name")]
    pub namespace: String,
    #[serde(rename = "surreal_db", default = "default_name")]
    pub database: String,
    #[serde(flatten)]
    pub credentials: Option<DatabaseCredentials>,
}

fn default_url() -> Url {
    Url::parse(MEMORY).expect("in-memory address is a valid url")
}

fn default_name() -> String {
    "microsaas".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseCredentials {
    #[serde(rename = "surreal_user")]
    pub username: String,
    #[serde(rename = "surreal_pass")]
    pub password: String,
}

impl DatabaseCredentials {
    fn auth(&self) -> auth::Root<'_> {
        auth::Root {
            username: &self.username,
            password: &self.password,
        }
    }
}
