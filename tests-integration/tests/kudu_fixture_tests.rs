use anyhow::Result;
use kudu_client::{ColumnType, InMemoryKuduClient, KuduClient};
use tests_integration::{KuduTestSuite, TempTableSpec, init_test_logging};

#[tokio::test]
async fn test_default_spec_creates_single_key_int32_table() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let table = suite
        .with_temp_kudu_table(
            &client,
            TempTableSpec::with_types(vec![ColumnType::Int32]),
            |table| {
                let client = &client;
                async move {
                    assert!(client.table_exists(&table.name).await?);
                    Ok(table)
                }
            },
        )
        .await?;

    let (db, base) = table
        .name
        .split_once('.')
        .expect("name is db-qualified");
    assert_eq!(db, suite.db_name());
    assert_eq!(base.len(), 10);
    assert!(base.chars().all(|c| c.is_ascii_lowercase()));

    assert_eq!(table.schema.columns().len(), 1);
    let column = table.schema.column("a").expect("column a");
    assert_eq!(column.col_type, ColumnType::Int32);
    assert!(!column.nullable);
    assert!(column.is_key);
    assert_eq!(table.schema.primary_key(), ["a".to_string()]);

    let partitions = table.partitioning.hash_partitions();
    assert_eq!(partitions.len(), 1);
    assert_eq!(partitions[0].columns, ["a".to_string()]);
    assert_eq!(partitions[0].num_buckets, 2);

    assert!(!client.table_exists(&table.name).await?);
    Ok(())
}

#[tokio::test]
async fn test_leading_columns_form_the_key_in_order() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let mut spec = TempTableSpec::with_types(vec![
        ColumnType::Int32,
        ColumnType::String,
        ColumnType::Double,
    ]);
    spec.num_key_cols = 2;

    let table = suite
        .with_temp_kudu_table(&client, spec, |table| async move { Ok(table) })
        .await?;

    let names: Vec<&str> = table
        .schema
        .columns()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(
        table.schema.primary_key(),
        ["a".to_string(), "b".to_string()]
    );

    for key in ["a", "b"] {
        let column = table.schema.column(key).expect("key column");
        assert!(column.is_key);
        assert!(!column.nullable);
    }
    let c = table.schema.column("c").expect("column c");
    assert!(!c.is_key);
    assert!(c.nullable);

    assert_eq!(
        table.partitioning.hash_partitions()[0].columns,
        ["a".to_string(), "b".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_cleanup_tolerates_a_table_dropped_by_the_body() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let name = suite
        .with_temp_kudu_table(
            &client,
            TempTableSpec::with_types(vec![ColumnType::Int64]),
            |table| {
                let client = &client;
                async move {
                    client.delete_table(&table.name).await?;
                    Ok(table.name)
                }
            },
        )
        .await?;

    assert!(!client.table_exists(&name).await?);
    Ok(())
}

#[tokio::test]
async fn test_table_is_deleted_when_the_body_fails() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let result: Result<()> = suite
        .with_temp_kudu_table(
            &client,
            TempTableSpec::with_types(vec![ColumnType::String]),
            |_| async { Err(anyhow::anyhow!("test body failed")) },
        )
        .await;

    assert_eq!(
        result.expect_err("body error propagates").to_string(),
        "test body failed"
    );
    assert!(client.list_tables().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_explicit_name_without_db_qualification() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let mut spec = TempTableSpec::with_types(vec![ColumnType::Int32]);
    spec.name = Some("plain".to_string());
    spec.prepend_db_name = false;

    let table = suite
        .with_temp_kudu_table(&client, spec, |table| async move { Ok(table) })
        .await?;
    assert_eq!(table.name, "plain");
    Ok(())
}

#[tokio::test]
async fn test_explicit_db_name_is_lowercased() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let mut spec = TempTableSpec::with_types(vec![ColumnType::Int32]);
    spec.name = Some("t".to_string());
    spec.db_name = Some("TESTDB".to_string());

    let table = suite
        .with_temp_kudu_table(&client, spec, |table| async move { Ok(table) })
        .await?;
    assert_eq!(table.name, "testdb.t");
    Ok(())
}

#[tokio::test]
async fn test_explicit_column_names_are_used() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let mut spec = TempTableSpec::with_types(vec![ColumnType::Int64, ColumnType::String]);
    spec.col_names = Some(vec!["id".to_string(), "payload".to_string()]);

    let table = suite
        .with_temp_kudu_table(&client, spec, |table| async move { Ok(table) })
        .await?;

    assert!(table.schema.column("id").is_some());
    assert!(table.schema.column("payload").is_some());
    assert_eq!(table.schema.primary_key(), ["id".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_too_many_columns_for_default_naming() -> Result<()> {
    init_test_logging();
    let suite = KuduTestSuite::new();
    let client = InMemoryKuduClient::new();

    let result: Result<()> = suite
        .with_temp_kudu_table(
            &client,
            TempTableSpec::with_types(vec![ColumnType::Int32; 27]),
            |_| async { Ok(()) },
        )
        .await;

    let err = result.expect_err("27 columns cannot be auto-named");
    assert!(err.to_string().contains("too many columns"));
    assert!(client.list_tables().await?.is_empty());
    Ok(())
}
