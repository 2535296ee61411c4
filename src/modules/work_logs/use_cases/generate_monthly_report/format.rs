// Pure rendering of work logs into report lines.
//
// Rows keep the order they were handed in. Hours are rounded half-up on the exact
// millisecond count, not on a binary float.

use crate::modules::work_logs::core::work_log::WorkLog;
use crate::modules::work_logs::use_cases::errors::ReportError;
use crate::modules::work_logs::use_cases::generate_monthly_report::report::{
    ReportDocument, ReportLine,
};
use crate::shared::core::primitives::{EpochMillis, MILLIS_PER_HOUR, instant_from_millis};
use chrono_tz::Tz;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_report(work_logs: &[WorkLog], zone: Tz) -> Result<ReportDocument, ReportError> {
    let lines = work_logs
        .iter()
        .map(|work_log| format_line(work_log, zone))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ReportDocument { lines })
}

fn format_line(work_log: &WorkLog, zone: Tz) -> Result<ReportLine, ReportError> {
    let end_time = work_log
        .end_time()
        .ok_or(ReportError::InstantOutOfRange(work_log.start_time))?;
    Ok(ReportLine {
        start: format_timestamp(work_log.start_time, zone)?,
        end: format_timestamp(end_time, zone)?,
        hours: format_hours(work_log.duration_ms),
    })
}

fn format_timestamp(millis: EpochMillis, zone: Tz) -> Result<String, ReportError> {
    let instant = instant_from_millis(millis).ok_or(ReportError::InstantOutOfRange(millis))?;
    Ok(instant
        .with_timezone(&zone)
        .format(TIMESTAMP_FORMAT)
        .to_string())
}

pub fn format_hours(duration_ms: u64) -> String {
    let per_hour = u128::from(MILLIS_PER_HOUR);
    let hundredths = (u128::from(duration_ms) * 100 + per_hour / 2) / per_hour;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
