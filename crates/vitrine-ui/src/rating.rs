//! Star rating primitive.

/// Render a five-star rating from a fractional score.
///
/// A fractional part of 0.5 or more shows as a half star. Scores are clamped
/// to the 0.0–5.0 range.
pub fn star_rating(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full_stars = rating.floor() as u32;
    let has_half = rating.fract() >= 0.5;
    let empty_stars = 5 - full_stars - if has_half { 1 } else { 0 };

    let mut html = String::from(r#"<span class="stars">"#);

    for _ in 0..full_stars {
        html.push_str(r#"<span class="star full">★</span>"#);
    }
    if has_half {
        html.push_str(r#"<span class="star half">★</span>"#);
    }
    for _ in 0..empty_stars {
        html.push_str(r#"<span class="star empty">☆</span>"#);
    }

    html.push_str("</span>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_whole_rating() {
        let html = star_rating(4.0);
        assert_eq!(count(&html, "star full"), 4);
        assert_eq!(count(&html, "star half"), 0);
        assert_eq!(count(&html, "star empty"), 1);
    }

    #[test]
    fn test_half_rating() {
        let html = star_rating(3.5);
        assert_eq!(count(&html, "star full"), 3);
        assert_eq!(count(&html, "star half"), 1);
        assert_eq!(count(&html, "star empty"), 1);
    }

    #[test]
    fn test_low_fraction_rounds_down() {
        let html = star_rating(2.3);
        assert_eq!(count(&html, "star full"), 2);
        assert_eq!(count(&html, "star half"), 0);
        assert_eq!(count(&html, "star empty"), 3);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(count(&star_rating(7.2), "star full"), 5);
        assert_eq!(count(&star_rating(-1.0), "star empty"), 5);
    }
}
