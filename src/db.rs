use tokio_postgres::{Client, NoTls};
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("connection failed: {}", error_text(.0))]
    Connect(#[source] tokio_postgres::Error),

    #[error("{}", error_text(.0))]
    Query(#[from] tokio_postgres::Error),
}

/// Server errors render as a bare "db error"; the useful text lives on the
/// `DbError` payload or the source.
pub fn error_text(err: &tokio_postgres::Error) -> String {
    if let Some(db) = err.as_db_error() {
        return db.to_string();
    }
    match std::error::Error::source(err) {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

/// Opens one connection per call. There is no pool: the returned client owns
/// the connection and dropping it closes the socket.
#[derive(Debug, Clone)]
pub struct Database {
    url: String,
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub async fn connect(&self) -> Result<Client, DbError> {
        let (client, connection) = tokio_postgres::connect(&self.url, NoTls)
            .await
            .map_err(|err| {
                error!("database connection failed: {}", error_text(&err));
                DbError::Connect(err)
            })?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!("database connection error: {err}");
            }
            debug!("database connection closed");
        });

        Ok(client)
    }
}
