//! Icon primitive.

use crate::escape::html_escape;

/// Render a named icon as an inert inline element.
///
/// The name maps to a CSS class (`icon-{name}`); the glyph itself comes from
/// the embedding page's icon font or sprite sheet.
pub fn icon(name: &str) -> String {
    format!(
        r#"<span class="icon icon-{}" aria-hidden="true"></span>"#,
        html_escape(name)
    )
}
