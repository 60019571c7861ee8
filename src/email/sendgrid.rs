//! SendGrid email provider implementation
//!
//! Submits envelopes to the SendGrid v3 Mail Send API.

use super::provider::EmailProvider;
use crate::config::NotifierConfig;
use crate::domain::{EmailAddress, Envelope, SendReceipt};
use crate::error::{DispatchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

const MAIL_SEND_PATH: &str = "/v3/mail/send";

/// SendGrid provider
///
/// Holds one reusable HTTP client. Every envelope gets exactly one request;
/// any status >= 400 is reported back as a [`DispatchError::ProviderRejection`].
pub struct SendGridProvider {
    http_client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

impl<'a> From<&'a EmailAddress> for Address<'a> {
    fn from(addr: &'a EmailAddress) -> Self {
        Self {
            email: &addr.email,
            name: addr.name.as_deref().filter(|n| !n.is_empty()),
        }
    }
}

impl<'a> MailSendRequest<'a> {
    fn from_envelope(envelope: &'a Envelope) -> Self {
        // SendGrid wants text/plain ahead of text/html and rejects empty values
        let content = [
            ("text/plain", envelope.text_body.as_str()),
            ("text/html", envelope.html_body.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(content_type, value)| Content {
            content_type,
            value,
        })
        .collect();

        Self {
            personalizations: [Personalization {
                to: [Address::from(&envelope.to)],
            }],
            from: Address::from(&envelope.from),
            subject: &envelope.subject,
            content,
        }
    }
}

impl SendGridProvider {
    /// Create a new SendGrid provider from configuration
    pub fn from_config(config: &NotifierConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}{}",
                config.api_base_url.trim_end_matches('/'),
                MAIL_SEND_PATH
            ),
        })
    }

    /// Full URL of the Mail Send endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    async fn send(&self, envelope: &Envelope) -> Result<SendReceipt> {
        let request = MailSendRequest::from_envelope(envelope);

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Failed to send email: {}", e);
                DispatchError::Transport(e)
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("❌ SendGrid error: {} - {}", status.as_u16(), body);
            return Err(DispatchError::ProviderRejection {
                status: status.as_u16(),
                body,
            });
        }

        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        tracing::info!(
            message_id = message_id.as_deref().unwrap_or(""),
            "✅ Email sent successfully to {}",
            envelope.to.email
        );

        Ok(SendReceipt::new(self.provider_name(), message_id))
    }

    fn provider_name(&self) -> &'static str {
        "sendgrid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn envelope() -> Envelope {
        Envelope::new(
            EmailAddress::with_name("noreply@example.com", "Sponsoration"),
            EmailAddress::new("user@example.com"),
            "Verify Your Email Address",
        )
        .with_text_body("Your verification code is: ABC123")
        .with_html_body("<p>ABC123</p>")
    }

    #[test]
    fn test_request_body_shape() {
        let envelope = envelope();
        let body = serde_json::to_value(MailSendRequest::from_envelope(&envelope)).unwrap();

        assert_eq!(
            body,
            json!({
                "personalizations": [{ "to": [{ "email": "user@example.com" }] }],
                "from": { "email": "noreply@example.com", "name": "Sponsoration" },
                "subject": "Verify Your Email Address",
                "content": [
                    { "type": "text/plain", "value": "Your verification code is: ABC123" },
                    { "type": "text/html", "value": "<p>ABC123</p>" }
                ]
            })
        );
    }

    #[test]
    fn test_request_body_skips_empty_parts() {
        let envelope = Envelope::new(
            EmailAddress::new("noreply@example.com"),
            EmailAddress::new("user@example.com"),
            "Subject",
        )
        .with_html_body("<p>only html</p>");
        let body = serde_json::to_value(MailSendRequest::from_envelope(&envelope)).unwrap();

        assert_eq!(body["content"].as_array().unwrap().len(), 1);
        assert_eq!(body["content"][0]["type"], "text/html");
        assert!(body["from"].get("name").is_none());
    }

    #[test]
    fn test_endpoint_from_config() {
        let mut config = NotifierConfig::production("key");
        config.api_base_url = "http://localhost:9999/".to_string();

        let provider = SendGridProvider::from_config(&config).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9999/v3/mail/send");
        assert_eq!(provider.provider_name(), "sendgrid");
    }

    #[test]
    fn test_default_endpoint() {
        let provider = SendGridProvider::from_config(&NotifierConfig::production("key")).unwrap();
        assert_eq!(provider.endpoint(), "https://api.sendgrid.com/v3/mail/send");
    }
}
