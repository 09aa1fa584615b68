pub mod alarm_service;
pub mod clock_service;

pub use alarm_service::AlarmService;
pub use clock_service::{ClockService, LocalStamp, SystemTimeProvider, TimeProvider};
