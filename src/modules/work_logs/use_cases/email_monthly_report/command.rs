#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMonthlyReport {
    pub user_id: String,
    pub recipient: String,
    pub month: u32,
    pub year: i32,
    pub zone_id: String,
}
