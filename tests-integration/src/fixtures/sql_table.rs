use anyhow::Result;
use common::cursor::SqlCursor;
use futures::future::BoxFuture;

/// Run `body`, then drop `table_name` through `cursor`.
///
/// The drop runs whether `body` succeeds or fails. No existence check is
/// made: dropping a table that is already gone fails, and that failure
/// propagates (over the body's own error, if it had one).
///
/// ```rust,ignore
/// cursor.execute("CREATE TABLE foo (a INT)").await?;
/// with_table_dropped_after(&mut cursor, "foo", |cursor| {
///     Box::pin(async move {
///         cursor.execute("SELECT * FROM foo").await?;
///         Ok(())
///     })
/// })
/// .await?;
/// // foo no longer exists.
/// ```
pub async fn with_table_dropped_after<Cur, F, T>(
    cursor: &mut Cur,
    table_name: &str,
    body: F,
) -> Result<T>
where
    Cur: SqlCursor + ?Sized,
    F: for<'a> FnOnce(&'a mut Cur) -> BoxFuture<'a, Result<T>>,
{
    let result = body(&mut *cursor).await;
    cursor.execute(&format!("DROP TABLE {table_name}")).await?;
    result
}
