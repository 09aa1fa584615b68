use serde::{Deserialize, Serialize};

/// A check-in as seen by clients.
///
/// The wire names are swapped on purpose: `Time` carries the calendar date and
/// `Date` carries the clock time. Existing clients depend on it.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinResponse {
    /// Local calendar date, `YYYY-MM-DD`
    #[serde(rename = "Time")]
    pub local_date: String,
    /// Local clock time, `HH:MM:SS`
    #[serde(rename = "Date")]
    pub local_time: String,
}

impl CheckinResponse {
    pub fn new(local_date: impl Into<String>, local_time: impl Into<String>) -> Self {
        Self {
            local_date: local_date.into(),
            local_time: local_time.into(),
        }
    }
}
