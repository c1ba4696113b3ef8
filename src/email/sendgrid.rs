use async_trait::async_trait;
use serde_json::json;

use super::{Email, MailError, Mailer};

pub const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Sends through the SendGrid v3 mail API.
pub struct SendGridMailer {
    client: reqwest::Client,
    url: String,
    api_key: String,
    from: String,
}

impl SendGridMailer {
    pub fn new(api_key: &str, from: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build SendGrid client: {e}"))?;

        Ok(Self {
            client,
            url: SENDGRID_SEND_URL.to_string(),
            api_key: api_key.to_string(),
            from: from.to_string(),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        let body = json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": self.from },
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text },
                { "type": "text/html", "value": email.html },
            ],
        });

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("SendGrid request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(MailError::from(format!(
                "SendGrid rejected message ({}): {detail}",
                status.as_u16()
            )));
        }

        Ok(())
    }
}
