use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::mem::InMemoryKuduClient;
use crate::partition::Partitioning;
use crate::schema::Schema;

#[derive(Debug, thiserror::Error)]
pub enum KuduError {
    #[error("table not found: {table}")]
    TableNotFound { table: String },
    #[error("table already exists: {table}")]
    TableAlreadyExists { table: String },
    #[error("invalid partitioning: {reason}")]
    InvalidPartitioning { reason: String },
    #[error("invalid client DSN '{dsn}': {reason}")]
    InvalidDsn { dsn: String, reason: String },
    #[error("unsupported client DSN scheme: {scheme}")]
    UnsupportedDsn { scheme: String },
}

/// Handle to an existing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KuduTable {
    pub name: String,
    pub schema: Schema,
    pub partitioning: Partitioning,
}

/// Table-management operations against the storage service.
#[async_trait]
pub trait KuduClient: Send + Sync + std::fmt::Debug {
    async fn create_table(
        &self,
        name: &str,
        schema: Schema,
        partitioning: Partitioning,
    ) -> Result<(), KuduError>;

    async fn open_table(&self, name: &str) -> Result<KuduTable, KuduError>;

    async fn table_exists(&self, name: &str) -> Result<bool, KuduError>;

    async fn delete_table(&self, name: &str) -> Result<(), KuduError>;

    async fn list_tables(&self) -> Result<Vec<String>, KuduError>;
}

/// Create a client from a DSN string
///
/// `memory://` backs the client with in-process state; real service schemes
/// are not wired up here.
pub fn create_client(dsn: &str) -> Result<Arc<dyn KuduClient>, KuduError> {
    let url = Url::parse(dsn).map_err(|e| KuduError::InvalidDsn {
        dsn: dsn.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "memory" => Ok(Arc::new(InMemoryKuduClient::new())),
        scheme => Err(KuduError::UnsupportedDsn {
            scheme: scheme.to_string(),
        }),
    }
}
