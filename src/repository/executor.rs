use crate::{domain::responses::RowSet, errors::RepositoryError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::{
    Column, Executor, Postgres, Row, TypeInfo,
    postgres::{PgArguments, PgRow},
    query::Query,
};

/// Runs a bound SELECT and collects every row with each column value
/// stringified uniformly (NULL becomes `"null"`). Column names are
/// taken from the first row; a result with no rows carries no columns,
/// which keeps header printing silent for empty results.
pub async fn fetch_rowset<'q, E>(
    db: E,
    query: Query<'q, Postgres, PgArguments>,
) -> Result<RowSet, RepositoryError>
where
    E: Executor<'q, Database = Postgres>,
{
    let rows = query.fetch_all(db).await?;

    let Some(first) = rows.first() else {
        return Ok(RowSet::default());
    };

    let columns = first
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();

    let mut rowset = RowSet::new(columns);
    for row in &rows {
        let mut record = Vec::with_capacity(row.columns().len());
        for idx in 0..row.columns().len() {
            record.push(column_value(row, idx)?);
        }
        rowset.push(record);
    }

    Ok(rowset)
}

/// Executes a read and returns only the number of rows it produced.
pub async fn row_count<'q, E>(
    db: E,
    query: Query<'q, Postgres, PgArguments>,
) -> Result<usize, RepositoryError>
where
    E: Executor<'q, Database = Postgres>,
{
    let rows = query.fetch_all(db).await?;
    Ok(rows.len())
}

/// Current value of a named sequence on this connection, or -1 when the
/// sequence produces no row. Must run on the same connection that
/// advanced the sequence, `currval` is session-local.
pub async fn current_sequence_value<'q, E>(
    db: E,
    sequence: &str,
) -> Result<i64, RepositoryError>
where
    E: Executor<'q, Database = Postgres>,
{
    let value: Option<i64> = sqlx::query_scalar("SELECT currval($1::regclass)")
        .bind(sequence.to_string())
        .fetch_optional(db)
        .await?;

    Ok(value.unwrap_or(-1))
}

fn column_value(row: &PgRow, idx: usize) -> Result<String, sqlx::Error> {
    let type_name = row.columns()[idx].type_info().name();

    let value = match type_name {
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row.try_get::<Option<String>, _>(idx)?,
        "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(|v| v.to_string()),
        "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(|v| v.to_string()),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(|v| v.to_string()),
        "FLOAT4" => row.try_get::<Option<f32>, _>(idx)?.map(|v| v.to_string()),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(|v| v.to_string()),
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(|v| v.to_string()),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)?
            .map(|v| v.to_string()),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map(|v| v.to_string()),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map(|v| v.to_string()),
        other => Some(format!("<{other}>")),
    };

    Ok(value.unwrap_or_else(|| "null".to_string()))
}
