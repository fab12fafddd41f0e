use url::Url;

const BRAND_NAME: &str = "rechart.app";
const TAGLINE: &str = "Turn Your Charts Into Interactive Apps";
const SISTER_PRODUCTS: [(&str, &str); 2] = [
    ("columns.ai", "https://columns.ai"),
    ("fina.money", "https://fina.money"),
];

pub const WELCOME_SUBJECT: &str = "Welcome to the Rechart Waitlist! 🎉";

fn origin_label(app_origin: &str) -> String {
    Url::parse(app_origin)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()))
        .unwrap_or_else(|| app_origin.to_string())
}

pub fn primary_button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{url}" style="display:inline-block;padding:12px 24px;margin:0 10px 10px 0;background-color:#059669;color:#ffffff;text-decoration:none;border-radius:6px;font-weight:500;">{label}</a>"#
    )
}

fn sister_product_links() -> String {
    SISTER_PRODUCTS
        .iter()
        .map(|(name, url)| {
            format!(r#"<a href="{url}" style="color:#059669;text-decoration:none;">{name}</a>"#)
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Subject and HTML body of the mail sent right after a waitlist signup.
pub fn waitlist_welcome_email(app_origin: &str) -> (String, String) {
    let headline = "Thanks for joining our waitlist!";
    let lead = format!(
        "We're thrilled to have you on board. You'll be among the first to know when <strong>{BRAND_NAME}</strong> launches and can start creating interactive chart applications."
    );

    let expectations = [
        "Early access to rechart.app when we launch",
        "Special launch pricing for waitlist members",
        "Updates on our development progress",
        "Tips and tutorials for creating amazing chart apps",
    ]
    .iter()
    .map(|item| format!(r#"<li style="margin-bottom:8px;">{item}</li>"#))
    .collect::<String>();

    let buttons = SISTER_PRODUCTS
        .iter()
        .map(|(name, url)| primary_button(url, &format!("Visit {name}")))
        .collect::<String>();

    let body = format!(
        r#"<div style="background-color:#f3f4f6;padding:20px;border-radius:8px;margin:20px 0;">
        <h3 style="margin:0 0 15px;font-size:18px;color:#111827;">What to expect:</h3>
        <ul style="margin:0;padding-left:20px;color:#374151;line-height:1.6;">{expectations}</ul>
      </div>
      <p style="margin:20px 0;color:#374151;line-height:1.6;">In the meantime, feel free to check out our other products:</p>
      <div style="text-align:center;margin:30px 0;">{buttons}</div>
      <p style="margin:30px 0 0;font-size:14px;color:#6b7280;text-align:center;">Have questions? Just reply to this email - we'd love to hear from you!</p>"#
    );

    let footer = format!("From the makers of {}.", sister_product_links());
    let html = wrap_email(
        app_origin,
        headline,
        &lead,
        &body,
        "you joined the rechart.app waitlist",
        Some(&footer),
    );
    (WELCOME_SUBJECT.to_string(), html)
}

pub fn wrap_email(
    app_origin: &str,
    headline: &str,
    lead: &str,
    body_html: &str,
    reason: &str,
    footer_note: Option<&str>,
) -> String {
    let origin = origin_label(app_origin);
    let reason_label = "Why you got this email";
    let ignore_line = "If you didn't sign up, you can safely ignore it.";

    let footer_note = footer_note
        .map(|note| {
            format!(
                r#"<p style="margin:8px 0 0;color:#9ca3af;font-size:13px;">{}</p>"#,
                note
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{headline}</title>
  </head>
  <body style="background:#f9fafb;margin:0;padding:0;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:600px;margin:0 auto;background:#ffffff;">
      <div style="background:linear-gradient(135deg,#059669 0%,#047857 100%);padding:40px 20px;text-align:center;">
        <h1 style="margin:0;font-size:28px;color:#ffffff;">{brand}</h1>
        <p style="margin:10px 0 0;font-size:16px;color:#d1fae5;">{tagline}</p>
      </div>
      <div style="padding:40px 20px;">
        <h2 style="margin:0 0 20px;font-size:24px;color:#111827;">{headline}</h2>
        <p style="margin:0 0 20px;font-size:16px;color:#374151;line-height:1.6;">{lead}</p>
        {body_html}
      </div>
      <div style="background:#f9fafb;padding:20px;text-align:center;border-top:1px solid #e5e7eb;">
        <p style="margin:0 0 6px;font-size:13px;color:#4b5563;">{reason_label}: {reason}.</p>
        <p style="margin:0;font-size:13px;color:#4b5563;">{ignore_line}</p>
        {footer_note}
        <p style="margin:10px 0 0;font-size:12px;color:#9ca3af;">{brand} - {origin}</p>
      </div>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
        tagline = TAGLINE,
        origin = origin,
        headline = headline,
        lead = lead,
        body_html = body_html,
        reason = reason,
        reason_label = reason_label,
        ignore_line = ignore_line,
        footer_note = footer_note,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_label_uses_host() {
        assert_eq!(origin_label("https://rechart.app/"), "rechart.app");
        assert_eq!(origin_label("not a url"), "not a url");
    }

    #[test]
    fn test_welcome_email_contents() {
        let (subject, html) = waitlist_welcome_email("https://rechart.app");
        assert_eq!(subject, WELCOME_SUBJECT);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Thanks for joining our waitlist!"));
        assert!(html.contains("Special launch pricing for waitlist members"));
        assert!(html.contains(r#"href="https://columns.ai""#));
        assert!(html.contains(r#"href="https://fina.money""#));
        assert!(html.contains("Visit fina.money"));
    }

    #[test]
    fn test_wrap_email_without_footer_note() {
        let html = wrap_email("https://rechart.app", "H", "L", "<p>B</p>", "R", None);
        assert!(html.contains("Why you got this email: R."));
        assert!(!html.contains("From the makers of"));
    }
}
