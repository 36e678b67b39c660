//! Notification composition.
//!
//! Pure rendering: a (document, tier) pair goes in, a fully formed
//! `EmailMessage` comes out. No clock, no network, no configuration lookups,
//! which keeps the template unit-testable as a plain string function.

use crate::config::DEFAULT_APP_URL;
use crate::domain::EmailAddress;
use crate::models::{Document, EmailMessage};
use crate::reminder::UrgencyTier;
use chrono::{Datelike, NaiveDate};

/// Render the reminder for one matched document.
///
/// `app_url` parameterizes the call-to-action link; when unset the default
/// placeholder is used. The unsubscribe link carries the recipient address
/// URL-encoded.
pub fn compose_reminder(
    recipient: &EmailAddress,
    document: &Document,
    days_until_expiry: i64,
    tier: UrgencyTier,
    app_url: Option<&str>,
    from: &str,
) -> EmailMessage {
    let app_url = app_url.unwrap_or(DEFAULT_APP_URL).trim_end_matches('/');
    let formatted_date = long_date(document.expiry_date);

    let subject = format!(
        "{} {}: {} expires in {} days",
        tier.symbol(),
        tier.heading(),
        document.name,
        days_until_expiry
    );

    let html = format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Document Expiry Reminder</title>
</head>
<body style="margin: 0; padding: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background-color: #f8fafc;">
  <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="max-width: 600px; margin: 0 auto; background: white; border-radius: 12px;">
    <tr>
      <td style="padding: 40px 40px 30px; text-align: center; background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%); border-radius: 12px 12px 0 0;">
        <h1 style="margin: 0 0 8px; color: white; font-size: 28px; font-weight: 600;">DocReminder</h1>
        <p style="margin: 0; color: rgba(255, 255, 255, 0.9); font-size: 16px;">Document Management Made Simple</p>
      </td>
    </tr>
    <tr>
      <td style="padding: 20px 40px; background: {bg_color}; border-left: 4px solid {color};">
        <h3 style="margin: 0 0 4px; color: {color}; font-size: 18px; font-weight: 600;">{symbol} {heading}</h3>
        <p style="margin: 0; color: #6b7280; font-size: 14px;">Action required for your document</p>
      </td>
    </tr>
    <tr>
      <td style="padding: 40px;">
        <h2 style="margin: 0 0 16px; color: #1f2937; font-size: 24px; font-weight: 600; text-align: center;">Your {name} expires soon</h2>
        <p style="margin: 0 0 32px; color: #6b7280; font-size: 16px; text-align: center;">We're here to help you stay organized and never miss important deadlines.</p>
        <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="margin: 0 0 32px; background: #f8fafc; border-radius: 8px; border: 1px solid #e2e8f0;">
          <tr>
            <td style="padding: 8px 24px; border-bottom: 1px solid #e2e8f0; color: #64748b; font-size: 14px;">Document</td>
            <td style="padding: 8px 24px; border-bottom: 1px solid #e2e8f0; text-align: right; color: #1e293b; font-size: 16px; font-weight: 600;">{name}</td>
          </tr>
          <tr>
            <td style="padding: 8px 24px; border-bottom: 1px solid #e2e8f0; color: #64748b; font-size: 14px;">Type</td>
            <td style="padding: 8px 24px; border-bottom: 1px solid #e2e8f0; text-align: right; color: #1e293b; font-size: 16px; text-transform: capitalize;">{doc_type}</td>
          </tr>
          <tr>
            <td style="padding: 8px 24px; border-bottom: 1px solid #e2e8f0; color: #64748b; font-size: 14px;">Expires On</td>
            <td style="padding: 8px 24px; border-bottom: 1px solid #e2e8f0; text-align: right; color: #dc2626; font-size: 16px; font-weight: 600;">{formatted_date}</td>
          </tr>
          <tr>
            <td style="padding: 8px 24px; color: #64748b; font-size: 14px;">Time Remaining</td>
            <td style="padding: 8px 24px; text-align: right;">
              <span style="background: {color}; color: white; padding: 6px 12px; border-radius: 16px; font-size: 14px; font-weight: 600;">{days} days</span>
            </td>
          </tr>
        </table>
        <p style="margin: 0 0 32px; text-align: center;">
          <a href="{app_url}" style="display: inline-block; background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%); color: white; padding: 14px 28px; border-radius: 8px; text-decoration: none; font-weight: 600; font-size: 16px;">View My Documents</a>
        </p>
        <p style="margin: 0; background: #eff6ff; border-left: 3px solid #3b82f6; border-radius: 4px; padding: 16px; color: #1e40af; font-size: 14px;">
          <strong>Tip:</strong> Set up automatic renewals when possible to avoid last-minute stress.
        </p>
      </td>
    </tr>
    <tr>
      <td style="padding: 32px 40px; background: #f8fafc; border-radius: 0 0 12px 12px; text-align: center; border-top: 1px solid #e2e8f0;">
        <p style="margin: 0 0 20px;">
          <a href="{app_url}/unsubscribe?email={encoded_recipient}" style="color: #64748b; text-decoration: none; font-size: 14px; padding: 8px 16px; border: 1px solid #cbd5e1; border-radius: 6px;">Unsubscribe</a>
        </p>
        <p style="margin: 0 0 8px; color: #94a3b8; font-size: 12px;">&copy; DocReminder</p>
        <p style="margin: 0; color: #cbd5e1; font-size: 11px;">This email was sent to {recipient}</p>
      </td>
    </tr>
  </table>
</body>
</html>
"##,
        bg_color = tier.bg_color(),
        color = tier.color(),
        symbol = tier.symbol(),
        heading = tier.heading(),
        name = document.name,
        doc_type = document.doc_type,
        formatted_date = formatted_date,
        days = days_until_expiry,
        app_url = app_url,
        encoded_recipient = urlencoding::encode(recipient.as_str()),
        recipient = recipient,
    );

    EmailMessage {
        from: from.to_string(),
        to: vec![recipient.as_str().to_string()],
        subject,
        html,
    }
}

/// Long-form en-US date, e.g. "January 5, 2025".
fn long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}
