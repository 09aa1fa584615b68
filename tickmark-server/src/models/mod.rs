mod alarm;
mod history;

pub use alarm::{Alarm, AlarmTable};
pub use history::{HistoryEntry, HistoryTable};

pub trait Table: Send + Sync {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;

    /// Columns added after the first release, as `(name, type)` pairs.
    ///
    /// Tables created by an older build lack them and get them appended on boot.
    fn additive_columns(&self) -> Vec<(&'static str, &'static str)> {
        vec![]
    }
}
