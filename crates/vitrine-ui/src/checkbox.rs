//! Checkbox primitive.

use crate::escape::html_escape;

/// Render a checkbox carrying a `data-value` hook.
///
/// The indeterminate ("some selected") state has no HTML attribute, so it is
/// flagged with `data-indeterminate` for the embedding page to apply via the
/// DOM property.
pub fn checkbox(value: &str, checked: bool, indeterminate: bool) -> String {
    format!(
        r#"<input type="checkbox" class="checkbox" data-value="{}"{}{}>"#,
        html_escape(value),
        if checked { " checked" } else { "" },
        if indeterminate {
            r#" data-indeterminate="true""#
        } else {
            ""
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked() {
        let html = checkbox("row-1", false, false);
        assert!(html.contains(r#"data-value="row-1""#));
        assert!(!html.contains("checked"));
        assert!(!html.contains("data-indeterminate"));
    }

    #[test]
    fn test_checked() {
        assert!(checkbox("row-1", true, false).contains(" checked"));
    }

    #[test]
    fn test_indeterminate() {
        let html = checkbox("all", false, true);
        assert!(html.contains(r#"data-indeterminate="true""#));
    }
}
