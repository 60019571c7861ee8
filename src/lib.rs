//! Sponsoration Notifier - transactional email delivery
//!
//! This crate renders the Sponsoration transactional emails (verification,
//! password reset, welcome) and dispatches them either to the operator log
//! (development) or through SendGrid (production).

pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::{Config, DeliveryMode, NotifierConfig};
pub use error::{DispatchError, Result};
pub use service::Notifier;
