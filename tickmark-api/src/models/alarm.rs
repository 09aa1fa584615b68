use serde::{Deserialize, Serialize};

/// Alarm replacement request.
///
/// Older clients send a single `time`, newer ones send `times`.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAlarmRequest {
    /// Weekday identifiers, kept in submitted order
    pub days: Vec<String>,
    /// Times of day, authoritative when present
    #[serde(default)]
    pub times: Option<Vec<String>>,
    /// Legacy single time of day
    #[serde(default)]
    pub time: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAlarmResponse {
    pub success: bool,
    pub days: Vec<String>,
    pub times: Vec<String>,
}

/// The stored alarm, or the empty default when nothing was ever set.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmResponse {
    pub days: Vec<String>,
    pub times: Vec<String>,
    /// RFC 3339 instant of the last write
    pub created_at: Option<String>,
}
