//! Notification metric definitions
//!
//! Metrics go through the `metrics` facade. The host program decides whether a
//! recorder (Prometheus or otherwise) is installed; without one they are no-ops.

use metrics::{counter, describe_counter};

pub const EMAILS_SENT_TOTAL: &str = "sponsoration_emails_sent_total";

/// Register metric descriptions
pub fn describe_metrics() {
    describe_counter!(
        EMAILS_SENT_TOTAL,
        "Total number of notification dispatch attempts by kind and outcome"
    );
}

/// Count one dispatch attempt for a named notification
pub fn record_dispatch(kind: &'static str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(EMAILS_SENT_TOTAL, "kind" => kind, "outcome" => outcome).increment(1);
}
