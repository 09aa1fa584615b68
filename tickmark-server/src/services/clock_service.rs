use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use chrono_tz::US::Pacific;

/// Zone every stamp is rendered in, whatever the host is set to.
pub const LOCAL_ZONE: Tz = Pacific;

pub trait TimeProvider: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The civil date, clock time and full timestamp of one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStamp {
    pub local_date: String,
    pub local_time: String,
    pub timestamp: String,
}

impl LocalStamp {
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self::from_local(instant.with_timezone(&LOCAL_ZONE))
    }

    pub fn from_local(local: DateTime<Tz>) -> Self {
        Self {
            local_date: local.format("%Y-%m-%d").to_string(),
            local_time: local.format("%H:%M:%S").to_string(),
            timestamp: local.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }
}

#[derive(Clone)]
pub struct ClockService {
    provider: Arc<dyn TimeProvider>,
}

impl ClockService {
    pub fn new(provider: Arc<dyn TimeProvider>) -> Self {
        Self { provider }
    }

    pub fn now(&self) -> LocalStamp {
        LocalStamp::from_utc(self.provider.now_utc())
    }

    pub fn now_local(&self) -> DateTime<Tz> {
        self.provider.now_utc().with_timezone(&LOCAL_ZONE)
    }
}

impl Default for ClockService {
    fn default() -> Self {
        Self::new(Arc::new(SystemTimeProvider))
    }
}
