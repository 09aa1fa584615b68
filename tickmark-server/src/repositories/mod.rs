mod alarm;
mod history;

pub use alarm::AlarmRepository;
pub use history::HistoryRepository;
