use super::Table;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Alarm {
    pub id: i64,
    /// JSON array of weekday names.
    pub days: String,
    /// Single time kept for clients that predate `times`.
    pub time: Option<String>,
    /// JSON array of times. NULL on rows written before the column existed.
    pub times: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone)]
pub struct AlarmTable;

impl Table for AlarmTable {
    fn name(&self) -> &'static str {
        "alarms"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS alarms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                days TEXT NOT NULL,
                time TEXT,
                times TEXT,
                created_at TEXT
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS alarms;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }

    fn additive_columns(&self) -> Vec<(&'static str, &'static str)> {
        vec![("times", "TEXT")]
    }
}
