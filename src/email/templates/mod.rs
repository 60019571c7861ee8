//! Email template system
//!
//! Templates are static strings with `{{variable}}` placeholders. Values are
//! inserted verbatim: nothing is HTML-escaped, so callers must only pass
//! server-generated codes, names and URLs.

use std::collections::HashMap;

/// Available email templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Email address verification code
    Verification,
    /// Password reset code
    PasswordReset,
    /// Welcome message for a new account
    Welcome,
}

impl EmailTemplate {
    /// Get the subject line for this template
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Verification => "Verify Your Email Address",
            Self::PasswordReset => "Reset Your Password",
            Self::Welcome => "Welcome to Sponsoration!",
        }
    }

    /// Get the HTML body template
    pub fn html_body(&self) -> &'static str {
        match self {
            Self::Verification => VERIFICATION_TEMPLATE,
            Self::PasswordReset => PASSWORD_RESET_TEMPLATE,
            Self::Welcome => WELCOME_TEMPLATE,
        }
    }

    /// Get the plain text body template
    pub fn text_body(&self) -> &'static str {
        match self {
            Self::Verification => "Your verification code is: {{code}}",
            Self::PasswordReset => "Your password reset code is: {{code}}",
            Self::Welcome => "Welcome {{name}}! Thank you for joining Sponsoration.",
        }
    }
}

/// Template rendering engine with variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string, replacing {{variable}} with values.
    ///
    /// Single pass: substituted values are never scanned again. Unknown
    /// placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                result.push_str(&rest[start..]);
                return result;
            };

            let key = &after[..end];
            match self.variables.get(key) {
                Some(value) => result.push_str(value),
                None => {
                    result.push_str("{{");
                    result.push_str(key);
                    result.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        result.push_str(rest);
        result
    }

    /// Render a complete email template
    pub fn render_template(&self, template: EmailTemplate) -> RenderedEmail {
        RenderedEmail {
            subject: self.render(template.subject()),
            html_body: self.render(template.html_body()),
            text_body: self.render(template.text_body()),
        }
    }
}

/// Rendered email with all variables substituted
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Verification email for `code`
pub fn verification_email(code: &str, year: i32) -> RenderedEmail {
    let mut engine = TemplateEngine::new();
    engine.set("code", code).set("year", year.to_string());
    engine.render_template(EmailTemplate::Verification)
}

/// Password reset email for `code`, opening with `greeting`
pub fn password_reset_email(code: &str, greeting: &str, year: i32) -> RenderedEmail {
    let mut engine = TemplateEngine::new();
    engine
        .set("code", code)
        .set("greeting", greeting)
        .set("year", year.to_string());
    engine.render_template(EmailTemplate::PasswordReset)
}

/// Welcome email for `name` linking to `app_url`
pub fn welcome_email(name: &str, app_url: &str, year: i32) -> RenderedEmail {
    let mut engine = TemplateEngine::new();
    engine
        .set("name", name)
        .set("app_url", app_url)
        .set("year", year.to_string());
    engine.render_template(EmailTemplate::Welcome)
}

/// Greeting line for the password reset email
pub fn reset_greeting(display_name: Option<&str>) -> String {
    match display_name {
        Some(name) if !name.is_empty() => format!("Hi {},", name),
        _ => "Hello,".to_string(),
    }
}

// ============================================================================
// Email Templates
// ============================================================================

const VERIFICATION_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Verify Your Email</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
    <tr>
      <td align="center">
        <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
          <tr>
            <td style="background-color: #4F46E5; padding: 30px 40px; text-align: center;">
              <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Sponsoration</h1>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px;">
              <h2 style="margin: 0 0 20px 0; color: #1F2937; font-size: 24px;">Verify Your Email Address</h2>
              <p style="margin: 0 0 20px 0; color: #4B5563; font-size: 16px; line-height: 1.5;">
                Thank you for registering! Please use the following code to verify your email address:
              </p>
              <div style="background-color: #F3F4F6; border-radius: 8px; padding: 30px; text-align: center; margin: 30px 0;">
                <div style="font-size: 32px; font-weight: bold; letter-spacing: 8px; color: #4F46E5; font-family: 'Courier New', monospace;">
                  {{code}}
                </div>
              </div>
              <p style="margin: 20px 0 0 0; color: #6B7280; font-size: 14px; line-height: 1.5;">
                This code will expire in <strong>24 hours</strong>.
              </p>
              <p style="margin: 10px 0 0 0; color: #6B7280; font-size: 14px; line-height: 1.5;">
                If you didn't request this verification, please ignore this email.
              </p>
            </td>
          </tr>
          <tr>
            <td style="background-color: #F9FAFB; padding: 30px 40px; text-align: center; border-top: 1px solid #E5E7EB;">
              <p style="margin: 0; color: #9CA3AF; font-size: 12px;">
                &copy; {{year}} Sponsoration. All rights reserved.
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#;

const PASSWORD_RESET_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Reset Your Password</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
    <tr>
      <td align="center">
        <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
          <tr>
            <td style="background-color: #DC2626; padding: 30px 40px; text-align: center;">
              <h1 style="margin: 0; color: #ffffff; font-size: 28px;">🔒 Password Reset</h1>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px;">
              <h2 style="margin: 0 0 20px 0; color: #1F2937; font-size: 24px;">Reset Your Password</h2>
              <p style="margin: 0 0 20px 0; color: #4B5563; font-size: 16px; line-height: 1.5;">
                {{greeting}}
              </p>
              <p style="margin: 0 0 20px 0; color: #4B5563; font-size: 16px; line-height: 1.5;">
                You requested to reset your password. Please use the following code:
              </p>
              <div style="background-color: #FEF2F2; border: 2px solid #FCA5A5; border-radius: 8px; padding: 30px; text-align: center; margin: 30px 0;">
                <div style="font-size: 32px; font-weight: bold; letter-spacing: 8px; color: #DC2626; font-family: 'Courier New', monospace;">
                  {{code}}
                </div>
              </div>
              <p style="margin: 20px 0 0 0; color: #6B7280; font-size: 14px; line-height: 1.5;">
                This code will expire in <strong>24 hours</strong>.
              </p>
              <p style="margin: 10px 0 0 0; color: #6B7280; font-size: 14px; line-height: 1.5;">
                If you didn't request a password reset, please ignore this email and your password will remain unchanged.
              </p>
              <div style="background-color: #FFFBEB; border-left: 4px solid #F59E0B; padding: 15px; margin-top: 30px;">
                <p style="margin: 0; color: #92400E; font-size: 13px; line-height: 1.5;">
                  <strong>Security Tip:</strong> Never share your password reset code with anyone. Sponsoration staff will never ask for this code.
                </p>
              </div>
            </td>
          </tr>
          <tr>
            <td style="background-color: #F9FAFB; padding: 30px 40px; text-align: center; border-top: 1px solid #E5E7EB;">
              <p style="margin: 0; color: #9CA3AF; font-size: 12px;">
                &copy; {{year}} Sponsoration. All rights reserved.
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#;

const WELCOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Welcome to Sponsoration</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
    <tr>
      <td align="center">
        <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
          <tr>
            <td style="background-color: #10B981; padding: 30px 40px; text-align: center;">
              <h1 style="margin: 0; color: #ffffff; font-size: 28px;">🎉 Welcome to Sponsoration!</h1>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px;">
              <h2 style="margin: 0 0 20px 0; color: #1F2937; font-size: 24px;">Hi {{name}},</h2>
              <p style="margin: 0 0 20px 0; color: #4B5563; font-size: 16px; line-height: 1.5;">
                Thank you for joining our community! We're excited to have you on board.
              </p>
              <p style="margin: 0 0 30px 0; color: #4B5563; font-size: 16px; line-height: 1.5;">
                Get started by completing your profile and exploring the platform.
              </p>
              <div style="text-align: center; margin: 30px 0;">
                <a href="{{app_url}}"
                   style="display: inline-block; background-color: #10B981; color: #ffffff; text-decoration: none; padding: 15px 30px; border-radius: 6px; font-weight: bold; font-size: 16px;">
                  Go to Dashboard
                </a>
              </div>
              <p style="margin: 30px 0 0 0; color: #6B7280; font-size: 14px; line-height: 1.5;">
                Best regards,<br>
                <strong>The Sponsoration Team</strong>
              </p>
            </td>
          </tr>
          <tr>
            <td style="background-color: #F9FAFB; padding: 30px 40px; text-align: center; border-top: 1px solid #E5E7EB;">
              <p style="margin: 0 0 10px 0; color: #9CA3AF; font-size: 12px;">
                &copy; {{year}} Sponsoration. All rights reserved.
              </p>
              <p style="margin: 0; color: #9CA3AF; font-size: 12px;">
                <a href="{{app_url}}/privacy/policy" style="color: #6B7280; text-decoration: none;">Privacy Policy</a> &bull;
                <a href="{{app_url}}/privacy/terms" style="color: #6B7280; text-decoration: none;">Terms of Service</a>
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const YEAR: i32 = 2026;

    #[test]
    fn test_template_engine_basic() {
        let mut engine = TemplateEngine::new();
        engine.set("name", "John");

        assert_eq!(engine.render("Hello, {{name}}!"), "Hello, John!");
    }

    #[test]
    fn test_template_engine_missing_var() {
        let engine = TemplateEngine::new();
        // Missing variables are left as-is
        assert_eq!(engine.render("Hello, {{name}}!"), "Hello, {{name}}!");
    }

    #[test]
    fn test_template_engine_repeated_var() {
        let mut engine = TemplateEngine::new();
        engine.set("name", "Alice");

        assert_eq!(engine.render("{{name}} loves {{name}}"), "Alice loves Alice");
    }

    #[test]
    fn test_template_engine_unterminated_placeholder() {
        let mut engine = TemplateEngine::new();
        engine.set("name", "Alice");

        assert_eq!(engine.render("{{name}} and {{oops"), "Alice and {{oops");
    }

    #[test]
    fn test_template_engine_values_are_not_rescanned() {
        let mut engine = TemplateEngine::new();
        engine.set("a", "{{b}}").set("b", "boom");

        assert_eq!(engine.render("{{a}}"), "{{b}}");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let rendered = welcome_email("<b>Jane & Co</b>", "https://app.x.com?a=1&b=2", YEAR);

        assert!(rendered.html_body.contains("<b>Jane & Co</b>"));
        assert!(rendered.html_body.contains("https://app.x.com?a=1&b=2/privacy/policy"));
    }

    #[test]
    fn test_verification_template() {
        let rendered = verification_email("ABC123", YEAR);

        assert_eq!(rendered.subject, "Verify Your Email Address");
        assert_eq!(rendered.text_body, "Your verification code is: ABC123");
        for part in ["ABC123", "Verify Your Email Address", "24 hours", "Sponsoration", "2026"] {
            assert!(rendered.html_body.contains(part), "missing {:?}", part);
        }
        for part in ["Password", "Welcome"] {
            assert!(!rendered.html_body.contains(part), "unexpected {:?}", part);
        }
    }

    #[test]
    fn test_password_reset_template() {
        let rendered = password_reset_email("RESET456", "Hi John,", YEAR);

        assert_eq!(rendered.subject, "Reset Your Password");
        assert_eq!(rendered.text_body, "Your password reset code is: RESET456");
        for part in ["RESET456", "Hi John,", "Reset Your Password", "24 hours", "Security Tip", "🔒"] {
            assert!(rendered.html_body.contains(part), "missing {:?}", part);
        }
        for part in ["Verify", "Welcome"] {
            assert!(!rendered.html_body.contains(part), "unexpected {:?}", part);
        }
    }

    #[test]
    fn test_welcome_template() {
        let rendered = welcome_email("Jane Smith", "https://app.example.com", YEAR);

        assert_eq!(rendered.subject, "Welcome to Sponsoration!");
        assert_eq!(
            rendered.text_body,
            "Welcome Jane Smith! Thank you for joining Sponsoration."
        );
        for part in [
            "Jane Smith",
            "Welcome to Sponsoration",
            "Go to Dashboard",
            r#"<a href="https://app.example.com""#,
            "https://app.example.com/privacy/policy",
            "https://app.example.com/privacy/terms",
            "🎉",
        ] {
            assert!(rendered.html_body.contains(part), "missing {:?}", part);
        }
        for part in ["Verify", "Reset", "code"] {
            assert!(!rendered.html_body.contains(part), "unexpected {:?}", part);
        }
    }

    #[rstest]
    #[case(verification_email("TEST", YEAR))]
    #[case(password_reset_email("RESET", "Hello,", YEAR))]
    #[case(welcome_email("User", "http://localhost:8082", YEAR))]
    fn test_template_html_structure(#[case] rendered: RenderedEmail) {
        let html = &rendered.html_body;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("</html>").count(), 1);
        assert!(html.contains(r#"charset="utf-8""#));
        assert!(html.contains(r#"<meta name="viewport""#));
        for tag in ["<html>", "<head>", "</head>", "<body", "</body>", "<table", "</table>"] {
            assert!(html.contains(tag), "missing tag {}", tag);
        }
        assert!(html.contains("2026"));
        assert!(!html.contains("{{"));
    }

    #[rstest]
    #[case(Some("John"), "Hi John,")]
    #[case(Some("Test User"), "Hi Test User,")]
    #[case(Some(""), "Hello,")]
    #[case(None, "Hello,")]
    fn test_reset_greeting(#[case] name: Option<&str>, #[case] expected: &str) {
        assert_eq!(reset_greeting(name), expected);
    }

    #[test]
    fn test_email_template_subjects() {
        assert!(EmailTemplate::Verification.subject().contains("Verify"));
        assert!(EmailTemplate::PasswordReset.subject().contains("Password"));
        assert!(EmailTemplate::Welcome.subject().contains("Welcome"));
    }
}
