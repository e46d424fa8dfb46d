//! Cart line rendering.

use serde::{Deserialize, Serialize};
use vitrine_ui::{html_escape, price, Money};

/// View model for one line in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Line item id.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Variant description (e.g., "M / Blue"), if any.
    pub variant: Option<String>,
    /// Thumbnail image URL, if any.
    pub thumbnail: Option<String>,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Line total (already computed by the caller).
    pub line_total: Money,
}

/// Render one cart row: thumbnail, title/variant, quantity stepper hooks,
/// unit and line prices.
pub fn cart_row(line: &CartLine) -> String {
    let thumbnail = match &line.thumbnail {
        Some(url) => format!(
            r#"<img class="cart-thumb" src="{}" alt="{}" loading="lazy">"#,
            html_escape(url),
            html_escape(&line.title),
        ),
        None => r#"<span class="cart-thumb cart-thumb-placeholder"></span>"#.to_string(),
    };
    let variant = match &line.variant {
        Some(variant) => format!(
            r#"<span class="cart-variant">{}</span>"#,
            html_escape(variant)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="cart-row" data-line="{id}">
    {thumbnail}
    <div class="cart-info">
        <span class="cart-title">{title}</span>
        {variant}
    </div>
    <div class="cart-qty">
        <button class="qty-dec" data-line="{id}">&minus;</button>
        <span class="qty-value">{qty}</span>
        <button class="qty-inc" data-line="{id}">+</button>
    </div>
    <span class="cart-unit">{unit}</span>
    <span class="cart-total">{total}</span>
    <button class="cart-remove" data-line="{id}">&times;</button>
</div>"#,
        id = html_escape(&line.id),
        thumbnail = thumbnail,
        title = html_escape(&line.title),
        variant = variant,
        qty = line.quantity,
        unit = price(&line.unit_price),
        total = price(&line.line_total),
    )
}
