use crate::application::ports::repositories::{RosterRepository, RosterRow, ScheduleRepository};
use crate::shared::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPeer {
    pub employee_id: String,
    pub display_name: String,
}

/// Peers sharing one time window within a shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub peers: Vec<RosterPeer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRoster {
    pub shift_name: String,
    pub windows: Vec<RosterWindow>,
}

/// Co-scheduled employees for one schedule's date and section, grouped by
/// shift and by time window. Informational only; no mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameDayRoster {
    pub work_date: NaiveDate,
    pub shifts: Vec<ShiftRoster>,
}

pub struct RosterService {
    schedules: Arc<dyn ScheduleRepository>,
    roster: Arc<dyn RosterRepository>,
}

impl RosterService {
    pub fn new(schedules: Arc<dyn ScheduleRepository>, roster: Arc<dyn RosterRepository>) -> Self {
        Self { schedules, roster }
    }

    pub async fn same_day_peers(&self, schedule_id: &str) -> Result<SameDayRoster, AppError> {
        let schedule = self
            .schedules
            .get_schedule(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("schedule {schedule_id}")))?;

        let rows = self
            .roster
            .list_same_day_section(schedule.work_date, &schedule.section, &schedule.id)
            .await?;

        Ok(SameDayRoster {
            work_date: schedule.work_date,
            shifts: group_rows(rows),
        })
    }
}

fn group_rows(rows: Vec<RosterRow>) -> Vec<ShiftRoster> {
    let mut by_shift: BTreeMap<String, BTreeMap<(NaiveTime, NaiveTime), Vec<RosterPeer>>> =
        BTreeMap::new();

    for row in rows {
        by_shift
            .entry(row.shift_name)
            .or_default()
            .entry((row.start_time, row.end_time))
            .or_default()
            .push(RosterPeer {
                employee_id: row.employee_id,
                display_name: row.display_name,
            });
    }

    by_shift
        .into_iter()
        .map(|(shift_name, windows)| ShiftRoster {
            shift_name,
            windows: windows
                .into_iter()
                .map(|((start_time, end_time), mut peers)| {
                    peers.sort_by(|a, b| a.display_name.cmp(&b.display_name));
                    RosterWindow {
                        start_time,
                        end_time,
                        peers,
                    }
                })
                .collect(),
        })
        .collect()
}
