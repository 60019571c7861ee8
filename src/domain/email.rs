//! Email envelope domain types

use std::fmt;

/// Email address with optional display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => f.write_str(&self.email),
        }
    }
}

/// A fully assembled message, ready for dispatch
///
/// Built fresh for every send and dropped once dispatched.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl Envelope {
    pub fn new(from: EmailAddress, to: EmailAddress, subject: impl Into<String>) -> Self {
        Self {
            from,
            to,
            subject: subject.into(),
            text_body: String::new(),
            html_body: String::new(),
        }
    }

    pub fn with_text_body(mut self, text_body: impl Into<String>) -> Self {
        self.text_body = text_body.into();
        self
    }

    pub fn with_html_body(mut self, html_body: impl Into<String>) -> Self {
        self.html_body = html_body.into();
        self
    }
}

/// Outcome of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Name of the provider that handled the envelope
    pub provider: &'static str,
    /// Provider-assigned message id, when the provider returns one
    pub message_id: Option<String>,
}

impl SendReceipt {
    pub fn new(provider: &'static str, message_id: Option<String>) -> Self {
        Self {
            provider,
            message_id,
        }
    }
}
