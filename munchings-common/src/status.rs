//! Display metadata for reservation and order statuses.
//!
//! Presentation only: nothing here decides which transitions are legal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    InProgress,
    Failure,
    Neutral,
}

impl StatusTone {
    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Success => "green",
            StatusTone::InProgress => "amber",
            StatusTone::Failure => "red",
            StatusTone::Neutral => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    XCircle,
    AlertCircle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: String,
    pub tone: StatusTone,
    pub icon: StatusIcon,
}

pub fn describe(status: &str) -> StatusDisplay {
    let (tone, icon) = match status {
        "confirmed" | "completed" | "served" => (StatusTone::Success, StatusIcon::CheckCircle),
        "pending" | "new" | "preparing" => (StatusTone::InProgress, StatusIcon::Clock),
        "cancelled" => (StatusTone::Failure, StatusIcon::XCircle),
        _ => (StatusTone::Neutral, StatusIcon::AlertCircle),
    };
    StatusDisplay {
        label: label(status),
        tone,
        icon,
    }
}

fn label(status: &str) -> String {
    let mut chars = status.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}
