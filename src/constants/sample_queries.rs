//! Canned statements the query editor offers as starting points. Each
//! one must execute successfully against the default dataset.

#[derive(Clone, Copy, Debug)]
pub struct SampleQuery {
    pub title: &'static str,
    pub sql: &'static str,
}

pub const SAMPLE_QUERIES: [SampleQuery; 6] = [
    SampleQuery {
        title: "All users",
        sql: "SELECT * FROM users;",
    },
    SampleQuery {
        title: "Engineering staff",
        sql: "SELECT name, email, age FROM users WHERE department = 'Engineering';",
    },
    SampleQuery {
        title: "Users over thirty",
        sql: "SELECT name, age FROM users WHERE age > 30 ORDER BY age DESC;",
    },
    SampleQuery {
        title: "Completed orders",
        sql: "SELECT * FROM orders WHERE status = 'completed' LIMIT 5;",
    },
    SampleQuery {
        title: "Products in stock",
        sql: "SELECT name, price, stock FROM products WHERE stock > 50;",
    },
    SampleQuery {
        title: "Fuzzy name search",
        sql: "SELECT * FROM users WHERE name LIKE '%son%';",
    },
];
