//! sqlx Postgres support for the model seam.
//!
//! `SeedModel::find_first` implementations over a `PgPool` can delegate the
//! query here and hydrate the returned row through their own
//! `sqlx::FromRow` impl. Only an equality conjunction is built; anything
//! more belongs to the application's query layer.

use serde_json::Value;
use sqlx::postgres::{PgArguments, PgPool, PgRow};
use sqlx::query::Query;
use sqlx::Postgres;

use crate::error::SeedResult;
use crate::model::Equals;

/// Fetch the first row of `table` matching all filters, or `None`.
pub async fn find_first_row(
    pool: &PgPool,
    table: &str,
    filters: &[Equals],
) -> SeedResult<Option<PgRow>> {
    let sql = select_first_sql(table, filters);
    let mut query = sqlx::query(&sql);
    for filter in filters {
        query = bind_json(query, &filter.value);
    }
    Ok(query.fetch_optional(pool).await?)
}

fn select_first_sql(table: &str, filters: &[Equals]) -> String {
    let mut sql = format!("SELECT * FROM {}", table);
    for (i, filter) in filters.iter().enumerate() {
        if i == 0 {
            sql.push_str(" WHERE ");
        } else {
            sql.push_str(" AND ");
        }
        sql.push_str(&format!("{} = ${}", filter.column, i + 1));
    }
    sql.push_str(" LIMIT 1");
    sql
}

fn bind_json<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &Value,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        Value::Null => query.bind(Option::<String>::None),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) if n.is_i64() => query.bind(n.as_i64()),
        Value::Number(n) => query.bind(n.as_f64()),
        Value::String(s) => query.bind(s.clone()),
        // Arrays and objects bind as jsonb.
        other => query.bind(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_without_filters() {
        assert_eq!(select_first_sql("users", &[]), "SELECT * FROM users LIMIT 1");
    }

    #[test]
    fn test_select_with_one_filter() {
        let filters = vec![Equals::new("email", "a@example.com")];
        assert_eq!(
            select_first_sql("users", &filters),
            "SELECT * FROM users WHERE email = $1 LIMIT 1"
        );
    }

    #[test]
    fn test_select_with_two_filters() {
        let filters = vec![Equals::new("email", "a@example.com"), Equals::new("age", 30)];
        assert_eq!(
            select_first_sql("users", &filters),
            "SELECT * FROM users WHERE email = $1 AND age = $2 LIMIT 1"
        );
    }

    #[test]
    fn test_filter_values_are_not_inlined() {
        let filters = vec![Equals::new("name", json!("Robert'); DROP TABLE users;--"))];
        let sql = select_first_sql("users", &filters);
        assert!(!sql.contains("Robert"));
    }
}
