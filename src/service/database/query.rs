use derive_new::new;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use surrealdb::opt::QueryResult;

use super::*;

/// An extension trait that allows you to execute raw SurrealQL queries. Parameters can be bound using the [Bindings::bind] method which takes any serializable data structure.
///
/// # Example
/// ```ignore
/// let record: Option<ViewRecord> = backend.sql("SELECT * FROM type::thing('analytics', $id)")
///     .bind(("id", "post-1"))
///     .fetch_first()
///     .await?;
/// ```
pub trait Sql {
    fn sql(&self, query: &str) -> Bindings<'_>;
}

impl Sql for Backend {
    fn sql(&self, query: &str) -> Bindings<'_> {
        Bindings::new(self.database.query(query))
    }
}

#[derive(Debug, new)]
pub struct Bindings<'a> {
    query: surrealdb::method::Query<'a, Any>,
}

impl Bindings<'_> {
    pub fn bind(mut self, params: impl serde::Serialize) -> Self {
        let query = self.query;
        self.query = query.bind(params);
        self
    }

    /// Execute the query and return a [surrealdb::Response], failing if any statement returned an error.
    pub async fn execute(self) -> Result<surrealdb::Response> {
        let response = self
            .query
            .await
            .context(DatabaseQuerySnafu)?
            .check()
            .context(DatabaseQuerySnafu)?;
        tracing::trace!(?response, "executed query");
        Ok(response)
    }

    /// Execute the query and deserialize the result of the first statement.
    ///
    /// The result can be deserialized into either a single value (`Option<T>`) or a collection of values (`Vec<T>`).
    pub async fn fetch_first<T: DeserializeOwned>(self) -> Result<T>
    where
        usize: QueryResult<T>,
    {
        let mut statements = self.execute().await?;
        statements.take::<T>(0).context(DatabaseDeserializeSnafu)
    }
}
