//! Avatar primitive.

use crate::escape::html_escape;

/// Render a customer avatar.
///
/// With an image URL the avatar is the image; without one it falls back to
/// the person's initials (first letter of the first two words of the name).
pub fn avatar(name: &str, image_url: Option<&str>) -> String {
    match image_url {
        Some(url) => format!(
            r#"<span class="avatar"><img src="{}" alt="{}" loading="lazy"></span>"#,
            html_escape(url),
            html_escape(name)
        ),
        None => format!(
            r#"<span class="avatar avatar-initials" title="{}">{}</span>"#,
            html_escape(name),
            html_escape(&initials(name))
        ),
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
