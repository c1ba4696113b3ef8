pub mod sendgrid;
pub mod smtp;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;

pub use sendgrid::SendGridMailer;
pub use smtp::SmtpMailer;

use crate::config::MailConfig;

/// A single outbound message. `from` is filled in by the mailer.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug)]
pub struct MailError {
    pub message: String,
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for MailError {
    fn from(s: String) -> Self {
        MailError { message: s }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Picks the transport from configuration: SendGrid when an API key is set,
/// then SMTP. Returns `None` if neither is usable.
pub fn from_config(config: &MailConfig) -> Option<Arc<dyn Mailer>> {
    let Some(sender) = config.sender.as_deref() else {
        tracing::warn!("No sender address configured, outbound email disabled");
        return None;
    };

    if let Some(api_key) = config.sendgrid_api_key.as_deref() {
        match SendGridMailer::new(api_key, sender) {
            Ok(mailer) => {
                tracing::info!("SendGrid mail transport configured");
                return Some(Arc::new(mailer));
            }
            Err(e) => tracing::warn!("SendGrid not available: {e}"),
        }
    }

    if let Some(smtp) = config.smtp.as_ref() {
        match SmtpMailer::new(smtp, sender) {
            Ok(mailer) => {
                tracing::info!("SMTP mail transport configured");
                return Some(Arc::new(mailer));
            }
            Err(e) => tracing::warn!("SMTP not available: {e}"),
        }
    }

    tracing::warn!("No mail transport configured, registration emails will fail");
    None
}
