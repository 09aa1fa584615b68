use std::sync::Arc;

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use tickmark_server::configs::{SchemaManager, Settings, Storage};
use tickmark_server::repositories::HistoryRepository;
use tickmark_server::services::{ClockService, LocalStamp};

/// Wall-clock check-ins per day offset, for every day before today.
const PAST_DAYS: &[(u64, &[(u32, u32)])] = &[
    (1, &[(8, 30), (14, 30)]),
    (2, &[(14, 15)]),
    (3, &[(9, 0), (14, 0)]),
    (4, &[(12, 45)]),
    (5, &[(10, 20), (14, 20)]),
    (6, &[(16, 30)]),
];

const TODAY_ENTRIES: i64 = 3;
const TODAY_SPACING_HOURS: i64 = 4;

/// The week of backdated check-ins anchored at `now`.
///
/// Today gets entries every four hours going back from `now`; earlier days get
/// fixed wall-clock times. Times that fall into a DST gap are dropped.
pub fn backdated_instants(now: DateTime<Tz>) -> Vec<DateTime<Tz>> {
    let mut instants: Vec<DateTime<Tz>> = (0..TODAY_ENTRIES)
        .map(|i| now - Duration::hours(i * TODAY_SPACING_HOURS))
        .collect();

    let today = now.date_naive();

    for (offset, times) in PAST_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(*offset)) else {
            continue;
        };

        for (hour, minute) in times.iter() {
            if let Some(instant) = wall_clock(now.timezone(), day, *hour, *minute) {
                instants.push(instant);
            }
        }
    }

    instants
}

/// `day` at `hour:minute` in `zone`; the earlier instant when the time repeats,
/// `None` when it falls in a DST gap.
pub fn wall_clock(zone: Tz, day: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

    let instant = zone.from_local_datetime(&day.and_time(time)).earliest();
    if instant.is_none() {
        tracing::warn!("skipping nonexistent local time {day} {time}");
    }

    instant
}

pub async fn run(settings: &Arc<Settings>) -> anyhow::Result<()> {
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);
    let repository = HistoryRepository::new(storage);

    let existing = repository.count().await?;
    if existing > 0 {
        tracing::warn!("database already has {existing} entries, adding test data anyway");
    }

    let instants = backdated_instants(ClockService::default().now_local());
    for instant in instants.iter() {
        repository.create(&LocalStamp::from_local(*instant)).await?;
    }

    tracing::info!("added {} test entries", instants.len());
    tracing::info!("total entries in database: {}", repository.count().await?);

    for entry in repository.find_recent(5).await? {
        tracing::info!("recent: {} {}", entry.local_date, entry.local_time);
    }

    Ok(())
}
