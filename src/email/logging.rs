//! Development provider that logs envelopes instead of sending them

use super::provider::EmailProvider;
use crate::domain::{Envelope, SendReceipt};
use crate::error::Result;
use async_trait::async_trait;
use std::borrow::Cow;

/// Bytes of HTML shown in the log preview
const PREVIEW_LIMIT: usize = 200;

/// Writes envelope metadata and a body preview to the operator log.
///
/// Never touches the network and never fails.
#[derive(Debug, Clone, Default)]
pub struct LogProvider;

impl LogProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Short body preview: the head of a long HTML body, otherwise the plain text.
pub(crate) fn content_preview(envelope: &Envelope) -> Cow<'_, str> {
    let html = &envelope.html_body;
    if html.len() > PREVIEW_LIMIT {
        let mut end = PREVIEW_LIMIT;
        while !html.is_char_boundary(end) {
            end -= 1;
        }
        Cow::Owned(format!("{}...", &html[..end]))
    } else {
        Cow::Borrowed(&envelope.text_body)
    }
}

#[async_trait]
impl EmailProvider for LogProvider {
    async fn send(&self, envelope: &Envelope) -> Result<SendReceipt> {
        tracing::info!(
            from = %envelope.from,
            to = %envelope.to.email,
            subject = %envelope.subject,
            content = %content_preview(envelope),
            "📧 Email (DEV MODE - Not actually sent)"
        );

        Ok(SendReceipt::new(self.provider_name(), None))
    }

    fn provider_name(&self) -> &'static str {
        "log"
    }
}
