#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReportRequest {
    pub user_id: String,
    pub month: u32,
    pub year: i32,
    pub zone_id: String,
}
