//! Loading skeleton placeholders.

/// Render a single shimmering placeholder block.
///
/// `width` is any CSS width value ("100%", "8rem", ...).
pub fn skeleton(width: &str) -> String {
    format!(
        r#"<span class="skeleton" style="width: {}">&nbsp;</span>"#,
        width
    )
}

/// Render a table row of placeholder cells.
pub fn skeleton_row(cells: usize) -> String {
    let mut html = String::from(r#"<tr class="skeleton-row">"#);
    for _ in 0..cells {
        html.push_str("<td>");
        html.push_str(&skeleton("100%"));
        html.push_str("</td>");
    }
    html.push_str("</tr>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_width() {
        assert!(skeleton("8rem").contains("width: 8rem"));
    }

    #[test]
    fn test_skeleton_row_cell_count() {
        let html = skeleton_row(4);
        assert_eq!(html.matches("<td>").count(), 4);
        assert!(html.starts_with(r#"<tr class="skeleton-row">"#));
        assert!(html.ends_with("</tr>"));
    }

    #[test]
    fn test_zero_cells() {
        assert_eq!(skeleton_row(0), r#"<tr class="skeleton-row"></tr>"#);
    }
}
