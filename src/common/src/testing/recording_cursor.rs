use std::collections::HashSet;

use async_trait::async_trait;

use crate::cursor::{QueryError, SqlCursor};

/// Cursor test double.
///
/// Records every executed statement in order and interprets just enough DDL
/// (`CREATE`/`DROP` for tables and databases) to track which objects exist,
/// so dropping an unknown table fails the way a real engine would. Anything
/// else is recorded and accepted.
#[derive(Debug, Default)]
pub struct RecordingCursor {
    executed: Vec<String>,
    tables: HashSet<String>,
    databases: HashSet<String>,
}

impl RecordingCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements executed so far, oldest first.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains(name)
    }

    pub fn has_database(&self, name: &str) -> bool {
        self.databases.contains(name)
    }
}

/// First identifier token of a DDL object clause, with any inline column
/// list or trailing terminator stripped ("foo(a INT)" -> "foo").
fn object_name(token: &str) -> String {
    token
        .split('(')
        .next()
        .unwrap_or(token)
        .trim_end_matches(';')
        .to_string()
}

#[async_trait]
impl SqlCursor for RecordingCursor {
    async fn execute(&mut self, sql: &str) -> Result<(), QueryError> {
        self.executed.push(sql.to_string());
        log::debug!("cursor executed: {sql}");

        let mut tokens = sql.split_whitespace();
        let verb = tokens.next().map(str::to_ascii_uppercase);
        let object = tokens.next().map(str::to_ascii_uppercase);
        let target = tokens.next().map(object_name);

        match (verb.as_deref(), object.as_deref(), target) {
            (Some("CREATE"), Some("TABLE"), Some(name)) => {
                self.tables.insert(name);
                Ok(())
            }
            (Some("DROP"), Some("TABLE"), Some(name)) => {
                if self.tables.remove(&name) {
                    Ok(())
                } else {
                    Err(QueryError::TableNotFound { table: name })
                }
            }
            (Some("CREATE"), Some("DATABASE"), Some(name)) => {
                self.databases.insert(name);
                Ok(())
            }
            (Some("DROP"), Some("DATABASE"), Some(name)) => {
                if self.databases.remove(&name) {
                    Ok(())
                } else {
                    Err(QueryError::DatabaseNotFound { database: name })
                }
            }
            (Some("CREATE" | "DROP"), Some("TABLE" | "DATABASE"), None) => {
                Err(QueryError::Malformed {
                    statement: sql.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
