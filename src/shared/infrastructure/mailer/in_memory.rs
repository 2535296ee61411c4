use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingEmail};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub message_id: Uuid,
    pub email: OutgoingEmail,
}

/// Records accepted messages instead of handing them to a transport.
#[derive(Default)]
pub struct InMemoryMailer {
    pub sent: Mutex<Vec<SentEmail>>,
    is_offline: bool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
        if self.is_offline {
            return Err(MailerError::Transport("Mail transport offline".into()));
        }
        if email.to.trim().is_empty() {
            return Err(MailerError::Rejected("missing recipient".into()));
        }

        let message_id = Uuid::now_v7();
        tracing::info!(
            %message_id,
            to = %email.to,
            subject = %email.subject,
            attachments = email.attachments.len(),
            "email accepted"
        );
        self.sent.lock().await.push(SentEmail { message_id, email });
        Ok(())
    }
}
