use crate::modules::work_logs::adapters::outbound::work_log_store::WorkLogStoreError;
use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::mailer::MailerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("invalid year {0}")]
    InvalidYear(i32),

    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    #[error("invalid recipient: {0:?}")]
    InvalidRecipient(String),

    #[error("no {entity} found for user {user_id} in {year}-{month:02}")]
    NotFound {
        entity: &'static str,
        user_id: String,
        month: u32,
        year: i32,
    },

    #[error("instant out of range: {0}")]
    InstantOutOfRange(EpochMillis),

    #[error(transparent)]
    StoreUnavailable(#[from] WorkLogStoreError),

    #[error("report delivery failed: {0}")]
    DeliveryFailure(#[from] MailerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErrorKind {
    InvalidArgument,
    NotFound,
    StoreUnavailable,
    DeliveryFailure,
    Internal,
}

impl ReportError {
    pub fn kind(&self) -> ReportErrorKind {
        match self {
            ReportError::InvalidMonth(_)
            | ReportError::InvalidYear(_)
            | ReportError::UnknownZone(_)
            | ReportError::InvalidRecipient(_) => ReportErrorKind::InvalidArgument,
            ReportError::NotFound { .. } => ReportErrorKind::NotFound,
            ReportError::StoreUnavailable(_) => ReportErrorKind::StoreUnavailable,
            ReportError::DeliveryFailure(_) => ReportErrorKind::DeliveryFailure,
            ReportError::InstantOutOfRange(_) => ReportErrorKind::Internal,
        }
    }
}
