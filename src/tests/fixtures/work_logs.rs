// Shared test fixtures for work logs and report requests.
// Compiled into the crate only under cfg(test), see `src/lib.rs`.

use crate::modules::work_logs::core::work_log::WorkLog;
use crate::modules::work_logs::use_cases::generate_monthly_report::request::MonthlyReportRequest;
use chrono::{TimeZone, Utc};

const WORK_LOG_JSON: &str = include_str!("json/work_log.json");

pub struct WorkLogBuilder {
    inner: WorkLog,
}

impl Default for WorkLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkLogBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(WORK_LOG_JSON).unwrap(),
        }
    }

    pub fn work_log_id(mut self, v: impl Into<String>) -> Self {
        self.inner.work_log_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self
    }

    /// Start at the given UTC wall clock.
    pub fn start_at(mut self, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        self.inner.start_time = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap()
            .timestamp_millis();
        self
    }

    pub fn duration_ms(mut self, v: u64) -> Self {
        self.inner.duration_ms = v;
        self
    }

    pub fn build(self) -> WorkLog {
        self.inner
    }
}

pub struct MonthlyReportRequestBuilder {
    inner: MonthlyReportRequest,
}

impl Default for MonthlyReportRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MonthlyReportRequestBuilder {
    pub fn new() -> Self {
        Self {
            inner: MonthlyReportRequest {
                user_id: "user-fixed-0001".to_string(),
                month: 3,
                year: 2024,
                zone_id: "Europe/Bucharest".to_string(),
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn month(mut self, v: u32) -> Self {
        self.inner.month = v;
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn zone_id(mut self, v: impl Into<String>) -> Self {
        self.inner.zone_id = v.into();
        self
    }

    pub fn build(self) -> MonthlyReportRequest {
        self.inner
    }
}

#[cfg(test)]
mod work_log_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = WorkLogBuilder::default().build();
        assert_eq!(built.work_log_id, "wl-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.start_time, 1_709_287_200_000);
        assert_eq!(built.duration_ms, 3_600_000);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = WorkLogBuilder::new()
            .work_log_id("wl-123")
            .user_id("uid-456")
            .start_at(2024, 3, 1, 10, 0)
            .duration_ms(42)
            .build();
        assert_eq!(custom.work_log_id, "wl-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.start_time, 1_709_287_200_000);
        assert_eq!(custom.duration_ms, 42);
    }
}
