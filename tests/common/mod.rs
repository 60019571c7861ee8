//! Common test utilities

#![allow(dead_code)]

use sponsoration_notifier::config::NotifierConfig;
use sponsoration_notifier::domain::{EmailAddress, Envelope};

pub const TEST_API_KEY: &str = "SG.test-key";

/// Production config pointing at a mock SendGrid
pub fn production_config(base_url: &str) -> NotifierConfig {
    let mut config = NotifierConfig::production(TEST_API_KEY);
    config.api_base_url = base_url.to_string();
    config
}

/// Development config whose provider URL would still be reachable
pub fn development_config(base_url: &str) -> NotifierConfig {
    let mut config = NotifierConfig::development();
    config.api_key = TEST_API_KEY.to_string();
    config.api_base_url = base_url.to_string();
    config
}

pub fn test_envelope() -> Envelope {
    Envelope::new(
        EmailAddress::with_name("noreply@yourdomain.com", "Sponsoration"),
        EmailAddress::new("test@example.com"),
        "Test Email",
    )
    .with_text_body("This is a test")
    .with_html_body("<p>This is a test</p>")
}
