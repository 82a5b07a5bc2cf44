// SPDX-License-Identifier: AGPL-3.0-or-later

//! Helpers to build listing queries from filter, order and pagination settings.
use sqlx::query::QueryAs;

use crate::db::query::{Direction, Filter, FilterBy, Pagination};

/// Values which get bound to the numbered placeholders of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindArgument {
    String(String),
}

/// Helper method to bind untrusted arguments to a sqlx `QueryAs` instance.
pub fn bind_to_query<'q, O>(
    mut query: QueryAs<'q, sqlx::Any, O, sqlx::any::AnyArguments<'q>>,
    args: &'q [BindArgument],
) -> QueryAs<'q, sqlx::Any, O, sqlx::any::AnyArguments<'q>> {
    for arg in args {
        query = match arg {
            BindArgument::String(value) => query.bind(value),
        };
    }

    query
}

/// Escapes the wildcard characters of a `LIKE` pattern.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn cmp_sql(column: &str, by: &FilterBy, args: &mut Vec<BindArgument>) -> String {
    match by {
        FilterBy::Element(value) => {
            args.push(BindArgument::String(value.to_owned()));
            format!("{column} = ${}", args.len())
        }
        // Both sides are folded by the database. SQLite only folds ASCII letters, PostgreSQL
        // folds according to the database locale.
        FilterBy::Contains(value) => {
            let pattern = format!("%{}%", escape_like(value));
            args.push(BindArgument::String(pattern));
            format!("LOWER({column}) LIKE LOWER(${}) ESCAPE '\\'", args.len())
        }
    }
}

fn where_filter_sql(filter: &Filter) -> (String, Vec<BindArgument>) {
    let mut args: Vec<BindArgument> = Vec::new();

    if filter.is_empty() {
        return (String::new(), args);
    }

    let conditions = filter
        .iter()
        .map(|item| cmp_sql(item.column, &item.by, &mut args))
        .collect::<Vec<String>>()
        .join(" AND ");

    (format!("WHERE {conditions}"), args)
}

/// Returns a `SELECT` statement over all columns of a table together with its bind arguments.
///
/// Rows are ordered by their position on the chain, the id breaks ties.
pub fn select_sql(
    table: &str,
    filter: &Filter,
    direction: Direction,
    pagination: &Pagination,
) -> (String, Vec<BindArgument>) {
    let (where_sql, args) = where_filter_sql(filter);
    let direction = direction.as_sql();

    let sql = format!(
        "
        SELECT
            *
        FROM
            {table}
        {where_sql}
        ORDER BY
            block_number {direction},
            log_index {direction},
            id {direction}
        LIMIT
            {}
        OFFSET
            {}
        ",
        pagination.first(),
        pagination.skip(),
    );

    (sql, args)
}

#[cfg(test)]
mod tests {
    use crate::db::query::{Direction, Filter, FilterBy, Pagination};

    use super::{escape_like, select_sql, where_filter_sql, BindArgument};

    #[test]
    fn no_filter() {
        let (sql, args) = where_filter_sql(&Filter::new());
        assert_eq!(sql, "");
        assert!(args.is_empty());
    }

    #[test]
    fn numbered_placeholders() {
        let mut filter = Filter::new();
        filter.add("owner", FilterBy::Element("0xab".into()));
        filter.add("description", FilterBy::Contains("Hello".into()));

        let (sql, args) = where_filter_sql(&filter);
        assert_eq!(
            sql,
            "WHERE owner = $1 AND LOWER(description) LIKE LOWER($2) ESCAPE '\\'"
        );
        assert_eq!(
            args,
            vec![
                BindArgument::String("0xab".into()),
                BindArgument::String("%Hello%".into())
            ]
        );
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn order_and_pagination() {
        let pagination = Pagination::new(Some(10), Some(20)).unwrap();
        let (sql, _) = select_sql(
            "document_revoked",
            &Filter::new(),
            Direction::Descending,
            &pagination,
        );

        assert!(sql.contains("FROM\n            document_revoked"));
        assert!(sql.contains("block_number DESC"));
        assert!(sql.contains("log_index DESC"));
        assert!(sql.contains("LIMIT\n            10"));
        assert!(sql.contains("OFFSET\n            20"));
    }
}
