use crate::modules::work_logs::use_cases::generate_monthly_report::request::MonthlyReportRequest;
use std::fmt;

pub const REPORT_MIME_TYPE: &str = "text/csv";
pub const REPORT_DOWNLOAD_FILENAME: &str = "worklog.csv";

pub fn report_download_disposition() -> String {
    format!("attachment; filename={REPORT_DOWNLOAD_FILENAME}")
}

/// One report row: zone-local start, zone-local end, hours worked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub start: String,
    pub end: String,
    pub hours: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.start, self.end, self.hours)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    pub lines: Vec<ReportLine>,
}

impl ReportDocument {
    /// UTF-8 encoding, one `\n` terminated line per row, no header.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines
            .iter()
            .map(|line| format!("{line}\n"))
            .collect::<String>()
            .into_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub request: MonthlyReportRequest,
    pub document: ReportDocument,
    pub content: Vec<u8>,
}
