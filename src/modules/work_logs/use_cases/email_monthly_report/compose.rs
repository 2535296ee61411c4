use crate::modules::work_logs::use_cases::generate_monthly_report::report::{
    MonthlyReport, REPORT_MIME_TYPE,
};
use crate::shared::infrastructure::mailer::{Attachment, OutgoingEmail};

pub const REPORT_EMAIL_SUBJECT: &str = "Monthly Worklog Report";
pub const REPORT_EMAIL_BODY: &str = "Attached is your monthly worklog report.";

/// `User-{user_id}-{year}-{month}.csv`, month not zero padded.
pub fn attachment_filename(user_id: &str, year: i32, month: u32) -> String {
    format!("User-{user_id}-{year}-{month}.csv")
}

pub fn compose_report_email(recipient: &str, report: MonthlyReport) -> OutgoingEmail {
    let request = report.request;
    OutgoingEmail {
        to: recipient.to_string(),
        subject: REPORT_EMAIL_SUBJECT.to_string(),
        body: REPORT_EMAIL_BODY.to_string(),
        attachments: vec![Attachment {
            filename: attachment_filename(&request.user_id, request.year, request.month),
            content: report.content,
            mime_type: REPORT_MIME_TYPE.to_string(),
        }],
    }
}
