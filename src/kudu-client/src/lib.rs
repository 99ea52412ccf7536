//! Client surface for the Kudu storage service.
//!
//! Schemas, hash partitioning, and the async [`KuduClient`] table-management
//! contract, together with an in-memory client for tests. Backends are
//! selected by DSN through [`create_client`].

pub mod client;
pub mod mem;
pub mod partition;
pub mod schema;
pub mod types;

pub use client::{KuduClient, KuduError, KuduTable, create_client};
pub use mem::InMemoryKuduClient;
pub use partition::{HashPartition, Partitioning};
pub use schema::{ColumnSchema, Schema, SchemaBuilder, SchemaError};
pub use types::ColumnType;
