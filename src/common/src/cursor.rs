use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("table not found: {table}")]
    TableNotFound { table: String },
    #[error("database not found: {database}")]
    DatabaseNotFound { database: String },
    #[error("malformed statement: {statement}")]
    Malformed { statement: String },
}

/// Statement-execution handle into the query engine.
///
/// Fixtures only drive DDL through this, so the contract is deliberately
/// narrow: submit a statement, wait for the engine to accept or reject it.
#[async_trait]
pub trait SqlCursor: Send {
    async fn execute(&mut self, sql: &str) -> Result<(), QueryError>;
}
