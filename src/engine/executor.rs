use super::objects::{LimitClause, OrderClause, Row, SelectCommand, SortDirection, Table};
use std::cmp::Ordering;

pub struct Executor {}

impl Executor {
    /// Runs a parsed SELECT against a resolved table: copy the rows,
    /// then filter, sort and slice in that order, skipping stages
    /// whose clause is absent. The table itself is never touched.
    pub fn run_select(table: &Table, command: &SelectCommand) -> Vec<Row> {
        let mut rows = table.rows.clone();

        if let Some(filter) = &command.filter {
            rows.retain(|row| filter.matches(row));
        }

        if let Some(order) = &command.order {
            Executor::apply_order(&mut rows, order);
        }

        if let Some(limit) = &command.limit {
            rows = Executor::apply_limit(rows, limit);
        }

        rows
    }

    /// Stable sort on the named column. Rows missing the column tie,
    /// so an unknown column leaves the order untouched.
    fn apply_order(rows: &mut [Row], order: &OrderClause) {
        rows.sort_by(|a, b| {
            let ordering = match (a.get(&order.column), b.get(&order.column)) {
                (Some(left), Some(right)) => left.compare(right),
                (_, _) => Ordering::Equal,
            };
            match order.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    fn apply_limit(rows: Vec<Row>, limit: &LimitClause) -> Vec<Row> {
        rows.into_iter()
            .skip(limit.offset)
            .take(limit.count)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::objects::{Attribute, CompareOp, Value, ValueKind, WhereFilter};
    use super::*;
    use uuid::Uuid;

    fn row(id: i64, label: &str, rank: i64) -> Row {
        Row(vec![
            ("id".to_string(), Value::Integer(id)),
            ("label".to_string(), Value::Text(label.to_string())),
            ("rank".to_string(), Value::Integer(rank)),
        ])
    }

    fn get_table() -> Table {
        Table::new(
            Uuid::new_v4(),
            "scratch".to_string(),
            "Scratch table".to_string(),
            vec![
                Attribute::new("id".to_string(), ValueKind::Integer),
                Attribute::new("label".to_string(), ValueKind::Text),
                Attribute::new("rank".to_string(), ValueKind::Integer),
            ],
            vec![
                row(1, "cherry", 2),
                row(2, "apple", 1),
                row(3, "banana", 2),
                row(4, "date", 3),
            ],
        )
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter()
            .map(|r| match r.get("id") {
                Some(Value::Integer(id)) => *id,
                other => panic!("Wrong cell {:?}", other),
            })
            .collect()
    }

    fn command() -> SelectCommand {
        SelectCommand {
            table: "scratch".to_string(),
            filter: None,
            order: None,
            limit: None,
        }
    }

    #[test]
    fn test_no_clauses_returns_all_rows_in_order() {
        let table = get_table();

        let rows = Executor::run_select(&table, &command());

        assert_eq!(ids(&rows), vec![1, 2, 3, 4]);
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn test_filter_stage() {
        let table = get_table();
        let mut command = command();
        command.filter = Some(WhereFilter::Compare {
            column: "rank".to_string(),
            op: CompareOp::GreaterEqual,
            operand: 2,
        });

        let rows = Executor::run_select(&table, &command);

        assert_eq!(ids(&rows), vec![1, 3, 4]);
    }

    #[test]
    fn test_order_stage_is_stable() {
        let table = get_table();
        let mut command = command();
        command.order = Some(OrderClause {
            column: "rank".to_string(),
            direction: SortDirection::Ascending,
        });

        let rows = Executor::run_select(&table, &command);

        // Rows 1 and 3 share a rank and must keep their seed order.
        assert_eq!(ids(&rows), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_order_descending() {
        let table = get_table();
        let mut command = command();
        command.order = Some(OrderClause {
            column: "label".to_string(),
            direction: SortDirection::Descending,
        });

        let rows = Executor::run_select(&table, &command);

        assert_eq!(ids(&rows), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_order_unknown_column_keeps_seed_order() {
        let table = get_table();
        let mut command = command();
        command.order = Some(OrderClause {
            column: "salary".to_string(),
            direction: SortDirection::Descending,
        });

        let rows = Executor::run_select(&table, &command);

        assert_eq!(ids(&rows), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_limit_stage_clamps() {
        let table = get_table();
        let mut command = command();
        command.limit = Some(LimitClause { count: 2, offset: 1 });

        let rows = Executor::run_select(&table, &command);
        assert_eq!(ids(&rows), vec![2, 3]);

        command.limit = Some(LimitClause {
            count: 10,
            offset: 3,
        });
        let rows = Executor::run_select(&table, &command);
        assert_eq!(ids(&rows), vec![4]);

        command.limit = Some(LimitClause {
            count: 2,
            offset: 50,
        });
        let rows = Executor::run_select(&table, &command);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_stages_compose_in_order() {
        let table = get_table();
        let command = SelectCommand {
            table: "scratch".to_string(),
            filter: Some(WhereFilter::Compare {
                column: "rank".to_string(),
                op: CompareOp::GreaterEqual,
                operand: 2,
            }),
            order: Some(OrderClause {
                column: "label".to_string(),
                direction: SortDirection::Ascending,
            }),
            limit: Some(LimitClause { count: 2, offset: 1 }),
        };

        // Filter to 1, 3, 4; order to 3 (banana), 1 (cherry), 4 (date);
        // then slice off the first.
        let rows = Executor::run_select(&table, &command);

        assert_eq!(ids(&rows), vec![1, 4]);
    }
}
