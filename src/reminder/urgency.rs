//! Urgency classification for expiring documents.

use serde::Serialize;

/// Urgency tier derived from days-until-expiry.
///
/// Computed fresh at dispatch time, never cached or stored. Classification is
/// a total function: zero and negative day counts (already-expired documents)
/// deliberately fall into `Urgent` rather than being filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// 3 days or less remaining (including overdue)
    Urgent,
    /// 4 to 7 days remaining
    Warning,
    /// 8 to 30 days remaining
    Notice,
    /// More than 30 days remaining (the 120-day boundary)
    Info,
}

impl UrgencyTier {
    /// Classify a signed whole-day count, thresholds evaluated in order
    /// urgent(<=3), warning(<=7), notice(<=30), info(else).
    pub fn classify(days_until_expiry: i64) -> Self {
        if days_until_expiry <= 3 {
            Self::Urgent
        } else if days_until_expiry <= 7 {
            Self::Warning
        } else if days_until_expiry <= 30 {
            Self::Notice
        } else {
            Self::Info
        }
    }

    /// Machine-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
        }
    }

    /// Heading shown in the alert banner and subject line.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Urgent => "URGENT - 3 Days Left",
            Self::Warning => "1 Week Reminder",
            Self::Notice => "1 Month Reminder",
            Self::Info => "4 Month Reminder",
        }
    }

    /// Emoji accent for the subject line and banner.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Urgent => "\u{1f6a8}",  // 🚨
            Self::Warning => "\u{26a0}\u{fe0f}", // ⚠️
            Self::Notice => "\u{1f4c5}",  // 📅
            Self::Info => "\u{1f4cb}",    // 📋
        }
    }

    /// Foreground accent color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Urgent => "#dc2626",
            Self::Warning => "#d97706",
            Self::Notice => "#2563eb",
            Self::Info => "#059669",
        }
    }

    /// Banner background color.
    pub fn bg_color(&self) -> &'static str {
        match self {
            Self::Urgent => "#fef2f2",
            Self::Warning => "#fffbeb",
            Self::Notice => "#eff6ff",
            Self::Info => "#f0fdf4",
        }
    }
}
