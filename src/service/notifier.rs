//! Notifier: renders transactional emails and hands them to a provider

use crate::config::{DeliveryMode, NotifierConfig};
use crate::domain::{EmailAddress, Envelope, SendReceipt};
use crate::email::templates::{self, RenderedEmail};
use crate::email::{EmailProvider, LogProvider, SendGridProvider};
use crate::error::Result;
use crate::telemetry::metrics;
use chrono::Datelike;
use std::sync::Arc;

/// Service for sending Sponsoration notifications
///
/// The provider is picked once from the delivery mode: development logs,
/// production goes to SendGrid. Nothing is mutated after construction, so a
/// notifier can be shared freely between tasks.
pub struct Notifier {
    config: NotifierConfig,
    provider: Arc<dyn EmailProvider>,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Result<Self> {
        let provider: Arc<dyn EmailProvider> = match config.mode {
            DeliveryMode::Development => Arc::new(LogProvider::new()),
            DeliveryMode::Production => Arc::new(SendGridProvider::from_config(&config)?),
        };

        Ok(Self::with_provider(config, provider))
    }

    /// Build a notifier around an explicit provider
    pub fn with_provider(config: NotifierConfig, provider: Arc<dyn EmailProvider>) -> Self {
        if config.mode == DeliveryMode::Production && config.api_key.is_empty() {
            tracing::warn!("⚠️  SENDGRID_API_KEY not set in production!");
        }

        Self { config, provider }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn mode(&self) -> DeliveryMode {
        self.config.mode
    }

    pub fn is_development(&self) -> bool {
        self.config.is_development()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Dispatch an envelope as-is
    pub async fn send(&self, envelope: &Envelope) -> Result<SendReceipt> {
        self.provider.send(envelope).await
    }

    /// Send an email verification code
    pub async fn send_verification(&self, to: &str, code: &str) -> Result<SendReceipt> {
        let rendered = templates::verification_email(code, current_year());
        self.dispatch("verification", to, rendered).await
    }

    /// Send a password reset code
    ///
    /// An empty `display_name` is treated like a missing one.
    pub async fn send_password_reset(
        &self,
        to: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<SendReceipt> {
        let greeting = templates::reset_greeting(display_name);
        let rendered = templates::password_reset_email(code, &greeting, current_year());
        self.dispatch("password_reset", to, rendered).await
    }

    /// Send a welcome email linking to the configured application URL
    pub async fn send_welcome(&self, to: &str, name: &str) -> Result<SendReceipt> {
        let rendered = templates::welcome_email(name, &self.config.app_url, current_year());
        self.dispatch("welcome", to, rendered).await
    }

    fn sender(&self) -> EmailAddress {
        EmailAddress::with_name(&self.config.from_email, &self.config.from_name)
    }

    async fn dispatch(
        &self,
        kind: &'static str,
        to: &str,
        rendered: RenderedEmail,
    ) -> Result<SendReceipt> {
        let envelope = Envelope::new(self.sender(), EmailAddress::new(to), rendered.subject)
            .with_text_body(rendered.text_body)
            .with_html_body(rendered.html_body);

        let result = self.send(&envelope).await;
        metrics::record_dispatch(kind, result.is_ok());
        result
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}
