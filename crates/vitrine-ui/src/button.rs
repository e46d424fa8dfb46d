//! Button primitive.

use crate::escape::html_escape;
use serde::{Deserialize, Serialize};

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Filled accent button for the main action.
    Primary,
    /// Outlined button for secondary actions.
    #[default]
    Secondary,
    /// Red button for destructive actions.
    Danger,
    /// Borderless button for low-emphasis actions.
    Ghost,
}

impl Variant {
    /// CSS class suffix for this variant.
    pub fn as_class(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Danger => "danger",
            Variant::Ghost => "ghost",
        }
    }
}

/// Render a button carrying a `data-action` hook for the embedding page.
pub fn button(label: &str, variant: Variant, action: &str, disabled: bool) -> String {
    format!(
        r#"<button class="btn btn-{}" data-action="{}"{}>{}</button>"#,
        variant.as_class(),
        html_escape(action),
        if disabled { " disabled" } else { "" },
        html_escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_basics() {
        let html = button("Add to Cart", Variant::Primary, "cart:add", false);
        assert!(html.contains("btn-primary"));
        assert!(html.contains(r#"data-action="cart:add""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_disabled_button() {
        let html = button("Delete", Variant::Danger, "delete", true);
        assert!(html.contains(" disabled"));
    }

    #[test]
    fn test_label_escaped() {
        let html = button("A & B", Variant::Ghost, "x", false);
        assert!(html.contains("A &amp; B"));
    }
}
