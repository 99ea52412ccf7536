use std::collections::HashSet;

use crate::types::ColumnType;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema has no columns")]
    Empty,
    #[error("duplicate column: {name}")]
    DuplicateColumn { name: String },
    #[error("schema has no primary key")]
    NoPrimaryKey,
    #[error("unknown key column: {name}")]
    UnknownKeyColumn { name: String },
    #[error("key column must not be nullable: {name}")]
    NullableKeyColumn { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: String,
    pub col_type: ColumnType,
    pub nullable: bool,
    pub is_key: bool,
}

/// Validated table schema: columns in declaration order plus the primary
/// key in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ColumnSchema>,
    primary_key: Vec<String>,
}

impl Schema {
    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }
}

/// Pending column definition inside a [`SchemaBuilder`].
#[derive(Debug)]
pub struct ColumnSpec {
    name: String,
    col_type: ColumnType,
    nullable: bool,
}

impl ColumnSpec {
    /// Columns are nullable until told otherwise.
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable = nullable;
        self
    }
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<ColumnSpec>,
    primary_key: Vec<String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, name: impl Into<String>, col_type: ColumnType) -> &mut ColumnSpec {
        let index = self.columns.len();
        self.columns.push(ColumnSpec {
            name: name.into(),
            col_type,
            nullable: true,
        });
        &mut self.columns[index]
    }

    pub fn set_primary_keys(&mut self, keys: Vec<String>) -> &mut Self {
        self.primary_key = keys;
        self
    }

    pub fn build(&self) -> Result<Schema, SchemaError> {
        if self.columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }

        if self.primary_key.is_empty() {
            return Err(SchemaError::NoPrimaryKey);
        }
        for key in &self.primary_key {
            let column = self
                .columns
                .iter()
                .find(|column| &column.name == key)
                .ok_or_else(|| SchemaError::UnknownKeyColumn { name: key.clone() })?;
            if column.nullable {
                return Err(SchemaError::NullableKeyColumn { name: key.clone() });
            }
        }

        let columns = self
            .columns
            .iter()
            .map(|column| ColumnSchema {
                name: column.name.clone(),
                col_type: column.col_type,
                nullable: column.nullable,
                is_key: self.primary_key.contains(&column.name),
            })
            .collect();

        Ok(Schema {
            columns,
            primary_key: self.primary_key.clone(),
        })
    }
}
