use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::client::{KuduClient, KuduError, KuduTable};
use crate::partition::Partitioning;
use crate::schema::Schema;

/// In-memory client for fast tests.
///
/// Implements the full [`KuduClient`] contract against process-local state,
/// including the validation a real service would apply to partitioning.
#[derive(Debug, Default)]
pub struct InMemoryKuduClient {
    tables: RwLock<HashMap<String, KuduTable>>,
}

impl InMemoryKuduClient {
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate_partitioning(schema: &Schema, partitioning: &Partitioning) -> Result<(), KuduError> {
    for partition in partitioning.hash_partitions() {
        if partition.num_buckets < 2 {
            return Err(KuduError::InvalidPartitioning {
                reason: format!(
                    "hash bucket count must be at least 2, got {}",
                    partition.num_buckets
                ),
            });
        }
        for column in &partition.columns {
            if schema.column(column).is_none() {
                return Err(KuduError::InvalidPartitioning {
                    reason: format!("unknown hash column: {column}"),
                });
            }
        }
    }
    Ok(())
}

#[async_trait]
impl KuduClient for InMemoryKuduClient {
    async fn create_table(
        &self,
        name: &str,
        schema: Schema,
        partitioning: Partitioning,
    ) -> Result<(), KuduError> {
        validate_partitioning(&schema, &partitioning)?;

        let mut tables = self.tables.write().await;
        if tables.contains_key(name) {
            return Err(KuduError::TableAlreadyExists {
                table: name.to_string(),
            });
        }

        log::debug!("created table {name}");
        tables.insert(
            name.to_string(),
            KuduTable {
                name: name.to_string(),
                schema,
                partitioning,
            },
        );
        Ok(())
    }

    async fn open_table(&self, name: &str) -> Result<KuduTable, KuduError> {
        self.tables
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| KuduError::TableNotFound {
                table: name.to_string(),
            })
    }

    async fn table_exists(&self, name: &str) -> Result<bool, KuduError> {
        Ok(self.tables.read().await.contains_key(name))
    }

    async fn delete_table(&self, name: &str) -> Result<(), KuduError> {
        match self.tables.write().await.remove(name) {
            Some(_) => {
                log::debug!("deleted table {name}");
                Ok(())
            }
            None => Err(KuduError::TableNotFound {
                table: name.to_string(),
            }),
        }
    }

    async fn list_tables(&self) -> Result<Vec<String>, KuduError> {
        let mut names: Vec<String> = self.tables.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
