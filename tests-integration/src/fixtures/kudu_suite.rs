use std::env;
use std::future::Future;

use anyhow::Result;
use common::dimensions::{TestMatrix, create_uncompressed_text_dimension};
use common::suite::{QueryTestSuite, add_base_dimensions};
use kudu_client::{ColumnType, KuduClient, KuduTable, Partitioning, SchemaBuilder};
use once_cell::sync::OnceCell;
use rand::Rng;

/// Environment variable the cluster setup exports to announce whether the
/// Kudu service is available. The literal value `"false"` skips the suite;
/// an unset variable is a configuration error, not a skip.
pub const KUDU_IS_SUPPORTED: &str = "KUDU_IS_SUPPORTED";

/// Every ephemeral table is hash partitioned over its key columns into this
/// many buckets.
const HASH_PARTITION_BUCKETS: u32 = 2;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const LOWERCASE_AND_DIGITS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("KUDU_IS_SUPPORTED is not set")]
    KuduSupportUnset,
    #[error("too many columns for default naming: {requested}")]
    TooManyColumns { requested: usize },
    #[error("unexpected column type: {0}")]
    UnexpectedColumnType(ColumnType),
}

/// Outcome of the suite-level setup gate.
#[derive(Debug)]
pub enum SuiteSetup {
    Ready(KuduTestSuite),
    Skipped { reason: String },
}

/// Shape of an ephemeral table created by
/// [`KuduTestSuite::with_temp_kudu_table`].
#[derive(Debug, Clone)]
pub struct TempTableSpec {
    /// Column types, in declaration order.
    pub col_types: Vec<ColumnType>,
    /// Explicit table name; a random one is generated when absent.
    pub name: Option<String>,
    /// How many leading columns form the primary key.
    pub num_key_cols: usize,
    /// Explicit column names; `a, b, c, ...` when absent.
    pub col_names: Option<Vec<String>>,
    /// Qualify the table name with a database.
    pub prepend_db_name: bool,
    /// Database to qualify with instead of the suite database.
    pub db_name: Option<String>,
}

impl Default for TempTableSpec {
    fn default() -> Self {
        Self {
            col_types: Vec::new(),
            name: None,
            num_key_cols: 1,
            col_names: None,
            prepend_db_name: true,
            db_name: None,
        }
    }
}

impl TempTableSpec {
    pub fn with_types(col_types: Vec<ColumnType>) -> Self {
        Self {
            col_types,
            ..Self::default()
        }
    }
}

/// Suite fixture for tests that exercise the query engine against Kudu.
#[derive(Debug, Default)]
pub struct KuduTestSuite {
    db_name: OnceCell<String>,
}

impl QueryTestSuite for KuduTestSuite {
    fn workload(&self) -> &'static str {
        "functional-query"
    }

    fn auto_create_db(&self) -> bool {
        true
    }

    fn add_test_dimensions(&self, matrix: &mut TestMatrix) {
        add_base_dimensions(self.workload(), matrix);
        matrix.add_dimension(create_uncompressed_text_dimension(self.workload()));
    }
}

impl KuduTestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suite-level gate consulted before any test runs.
    ///
    /// The cluster setup exports [`KUDU_IS_SUPPORTED`]; `"false"` means the
    /// whole suite is skipped. A missing variable surfaces as an error so a
    /// misconfigured environment fails loudly instead of silently running.
    pub fn setup() -> Result<SuiteSetup, FixtureError> {
        match env::var(KUDU_IS_SUPPORTED) {
            Err(_) => Err(FixtureError::KuduSupportUnset),
            Ok(value) if value == "false" => Ok(SuiteSetup::Skipped {
                reason: "Kudu is not supported".to_string(),
            }),
            Ok(_) => Ok(SuiteSetup::Ready(Self::new())),
        }
    }

    /// Database name used to namespace tables created by this suite.
    ///
    /// Test-runner workers run as separate processes, each with its own
    /// suite instance; a random name keeps workers from landing in the same
    /// database. The name is generated on first access and cached, so one
    /// suite always sees the same value.
    pub fn db_name(&self) -> &str {
        self.db_name.get_or_init(random_db_name)
    }

    /// 10 random lowercase letters.
    pub fn random_table_name() -> String {
        let mut rng = rand::thread_rng();
        (0..10)
            .map(|_| char::from(LOWERCASE[rng.gen_range(0..LOWERCASE.len())]))
            .collect()
    }

    /// Final component of a possibly db-qualified table name.
    pub fn table_base_name(name: &str) -> &str {
        name.rsplit('.').next().unwrap_or(name)
    }

    /// SQL-engine spelling of a storage column type.
    ///
    /// `BINARY` and `UNIXTIME_MICROS` are valid storage types but have no
    /// entry here; looking them up is an error naming the offending type.
    pub fn kudu_type_to_sql_type(col_type: ColumnType) -> Result<&'static str, FixtureError> {
        match col_type {
            ColumnType::Bool => Ok("BOOLEAN"),
            ColumnType::Double => Ok("DOUBLE"),
            ColumnType::Float => Ok("FLOAT"),
            ColumnType::Int16 => Ok("SMALLINT"),
            ColumnType::Int32 => Ok("INT"),
            ColumnType::Int64 => Ok("BIGINT"),
            ColumnType::Int8 => Ok("TINYINT"),
            ColumnType::String => Ok("STRING"),
            other => Err(FixtureError::UnexpectedColumnType(other)),
        }
    }

    /// Create a table, hand it to `body`, and delete it again afterwards.
    ///
    /// The leading [`TempTableSpec::num_key_cols`] columns are marked
    /// non-nullable and form the primary key, in declaration order; the key
    /// columns are hash partitioned into two buckets.
    /// Cleanup runs whether `body` succeeds or fails and checks existence
    /// first, so a body that already dropped the table is fine.
    ///
    /// ```rust,ignore
    /// let table = suite
    ///     .with_temp_kudu_table(&client, TempTableSpec::with_types(vec![ColumnType::Int32]),
    ///         |table| async move {
    ///             assert!(client.table_exists(&table.name).await?);
    ///             Ok(table)
    ///         })
    ///     .await?;
    /// assert!(!client.table_exists(&table.name).await?);
    /// ```
    pub async fn with_temp_kudu_table<C, F, Fut, T>(
        &self,
        client: &C,
        spec: TempTableSpec,
        body: F,
    ) -> Result<T>
    where
        C: KuduClient + ?Sized,
        F: FnOnce(KuduTable) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let col_names = match spec.col_names {
            Some(names) => names,
            None => default_col_names(spec.col_types.len())?,
        };

        let mut builder = SchemaBuilder::new();
        for (i, col_type) in spec.col_types.iter().enumerate() {
            let column = builder.add_column(col_names[i].clone(), *col_type);
            if i < spec.num_key_cols {
                column.nullable(false);
            }
        }
        let key_cols = col_names[..spec.num_key_cols.min(col_names.len())].to_vec();
        builder.set_primary_keys(key_cols.clone());
        let schema = builder.build()?;

        let mut name = spec.name.unwrap_or_else(Self::random_table_name);
        if spec.prepend_db_name {
            let db = match spec.db_name {
                Some(db) => db.to_lowercase(),
                None => self.db_name().to_string(),
            };
            name = format!("{db}.{name}");
        }

        let partitioning = Partitioning::new().add_hash_partitions(key_cols, HASH_PARTITION_BUCKETS);
        client.create_table(&name, schema, partitioning).await?;
        log::debug!("created ephemeral table {name}");
        let table = client.open_table(&name).await?;

        let result = body(table).await;

        if client.table_exists(&name).await? {
            client.delete_table(&name).await?;
            log::debug!("deleted ephemeral table {name}");
        }
        result
    }
}

fn random_db_name() -> String {
    let mut rng = rand::thread_rng();
    let mut name = String::with_capacity(6);
    name.push(char::from(LOWERCASE[rng.gen_range(0..LOWERCASE.len())]));
    // Five characters sampled without replacement.
    for index in rand::seq::index::sample(&mut rng, LOWERCASE_AND_DIGITS.len(), 5) {
        name.push(char::from(LOWERCASE_AND_DIGITS[index]));
    }
    name
}

fn default_col_names(count: usize) -> Result<Vec<String>, FixtureError> {
    if count > 26 {
        return Err(FixtureError::TooManyColumns { requested: count });
    }
    Ok((0..count as u8)
        .map(|i| char::from(b'a' + i).to_string())
        .collect())
}
