// Calendar month boundaries in a zone.
//
// Both boundaries are resolved from their own local wall-clock time through the zone
// rules, so a DST transition inside the month shifts the end offset but never the
// start.

use crate::modules::work_logs::use_cases::errors::ReportError;
use chrono::{
    DateTime, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;

/// Closed instant range `[start, end]` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Start,
    End,
}

pub fn month_interval(year: i32, month: u32, zone: Tz) -> Result<MonthInterval, ReportError> {
    if !(1..=12).contains(&month) {
        return Err(ReportError::InvalidMonth(month));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ReportError::InvalidYear(year))?;
    let last_day = first_day
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or(ReportError::InvalidYear(year))?;

    let start = first_day
        .and_hms_opt(0, 0, 0)
        .and_then(|local| resolve_local(zone, local, Boundary::Start))
        .ok_or(ReportError::InvalidYear(year))?;
    let end = last_day
        .and_hms_nano_opt(23, 59, 59, 999_999_999)
        .and_then(|local| resolve_local(zone, local, Boundary::End))
        .ok_or(ReportError::InvalidYear(year))?;

    Ok(MonthInterval { start, end })
}

fn resolve_local(zone: Tz, local: NaiveDateTime, boundary: Boundary) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(resolved) => Some(resolved.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, latest) => {
            let resolved = match boundary {
                Boundary::Start => earliest,
                Boundary::End => latest,
            };
            Some(resolved.with_timezone(&Utc))
        }
        LocalResult::None => {
            // Wall clock falls in a gap. A start is read with the offset before the jump,
            // landing on the transition; an end with the offset after it, landing just
            // before the transition.
            let probe = match boundary {
                Boundary::Start => local.checked_sub_signed(Duration::days(1))?,
                Boundary::End => local.checked_add_signed(Duration::days(1))?,
            };
            let offset = zone.offset_from_utc_datetime(&probe).fix();
            let utc = local
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}
