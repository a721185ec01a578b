//! HTML body for status update emails.

/// Render the status update email body.
///
/// Greets the citizen by name when the profile has one, shows the status
/// message and the complaint reference, and links to the tracking page.
pub fn status_update_html(
    full_name: Option<&str>,
    message: &str,
    reference: &str,
    portal_url: &str,
) -> String {
    let greeting = match full_name {
        Some(name) => format!("Hello {name}!"),
        None => "Hello!".to_string(),
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #1a3a8f; padding: 30px; border-radius: 16px 16px 0 0; text-align: center;">
    <h1 style="color: white; margin: 0; font-size: 24px;">JanConnect+</h1>
  </div>
  <div style="background: #ffffff; padding: 30px; border: 1px solid #e5e7eb; border-top: none; border-radius: 0 0 16px 16px;">
    <h2 style="color: #1a3a8f; margin-top: 0;">{greeting}</h2>
    <p style="color: #374151; font-size: 16px; line-height: 1.6;">{message}</p>
    <div style="background: #f3f4f6; padding: 16px; border-radius: 8px; margin: 20px 0;">
      <p style="margin: 0; color: #6b7280; font-size: 14px;">Complaint Reference:</p>
      <p style="margin: 8px 0 0 0; color: #1a3a8f; font-weight: bold; font-size: 16px;">{reference}</p>
    </div>
    <a href="{portal_url}/track" style="display: inline-block; background: #2f9e8f; color: white; padding: 12px 24px; text-decoration: none; border-radius: 8px; font-weight: 500;">Track Your Complaint</a>
    <p style="color: #9ca3af; font-size: 12px; margin-top: 30px;">This is an automated message from JanConnect+. Please do not reply to this email.</p>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_name_message_and_reference() {
        let html = status_update_html(
            Some("Asha Rao"),
            "Your complaint has been resolved.",
            "JC-2026-00012",
            "https://portal.example.org",
        );
        assert!(html.contains("Hello Asha Rao!"));
        assert!(html.contains("Your complaint has been resolved."));
        assert!(html.contains("JC-2026-00012"));
        assert!(html.contains("https://portal.example.org/track"));
    }

    #[test]
    fn test_greeting_without_name() {
        let html = status_update_html(None, "m", "JC-2026-00001", "https://p");
        assert!(html.contains("Hello!"));
    }
}
