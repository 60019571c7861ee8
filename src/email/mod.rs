//! Email dispatch for the Sponsoration notifier
//!
//! Two providers are available:
//! - `LogProvider` writes envelopes to the log (development)
//! - `SendGridProvider` submits envelopes to the SendGrid v3 Mail Send API (production)

pub mod logging;
pub mod provider;
pub mod sendgrid;
pub mod templates;

pub use logging::LogProvider;
pub use provider::EmailProvider;
pub use sendgrid::SendGridProvider;
pub use templates::{EmailTemplate, TemplateEngine};
