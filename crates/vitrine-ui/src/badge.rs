//! Status badge primitive.

use crate::escape::html_escape;
use serde::{Deserialize, Serialize};

/// Visual tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Muted gray, for informational labels.
    #[default]
    Neutral,
    /// Green, for completed/positive states.
    Success,
    /// Amber, for pending/attention states.
    Warning,
    /// Red, for failed/destructive states.
    Danger,
    /// Blue, for in-progress states.
    Info,
}

impl Tone {
    /// CSS class suffix for this tone.
    pub fn as_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
        }
    }
}

/// Render a small pill-shaped status label.
pub fn badge(label: &str, tone: Tone) -> String {
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        tone.as_class(),
        html_escape(label)
    )
}
