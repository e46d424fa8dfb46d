//! Product card grid.

use serde::{Deserialize, Serialize};
use vitrine_ui::{badge, html_escape, price, star_rating, Money, Tone};

/// Stock availability shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    /// Running low; the remaining quantity is shown.
    Low(i64),
    OutOfStock,
}

impl StockLevel {
    /// Badge label for this level.
    pub fn label(&self) -> String {
        match self {
            StockLevel::InStock => "In Stock".to_string(),
            StockLevel::Low(left) => format!("Only {} left", left),
            StockLevel::OutOfStock => "Out of Stock".to_string(),
        }
    }

    /// Badge tone for this level.
    pub fn tone(&self) -> Tone {
        match self {
            StockLevel::InStock => Tone::Success,
            StockLevel::Low(_) => Tone::Warning,
            StockLevel::OutOfStock => Tone::Danger,
        }
    }
}

/// View model for one product card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCard {
    /// Product id.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Average rating (0.0–5.0).
    pub rating: f64,
    /// Display price.
    pub price: Money,
    /// Stock availability.
    pub stock: StockLevel,
}

/// Render a single product card.
pub fn product_card(product: &ProductCard) -> String {
    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <a href="/product/{id}" class="product-link">
        <div class="product-image">
            <img src="{thumb}" alt="{title}" loading="lazy">
        </div>
        <div class="product-info">
            <h3 class="product-title">{title}</h3>
            <div class="product-rating">
                {stars}
                <span class="rating-value">{rating:.1}</span>
            </div>
            {price}
            {stock}
        </div>
    </a>
    <button class="add-to-cart" data-product-id="{id}"{disabled}>Add to Cart</button>
</article>"#,
        id = html_escape(&product.id),
        thumb = html_escape(&product.thumbnail),
        title = html_escape(&product.title),
        stars = star_rating(product.rating),
        rating = product.rating,
        price = price(&product.price),
        stock = badge(&product.stock.label(), product.stock.tone()),
        disabled = if product.stock == StockLevel::OutOfStock {
            " disabled"
        } else {
            ""
        },
    )
}

/// Render the product grid.
pub fn product_grid(products: &[ProductCard]) -> String {
    let cards: String = products.iter().map(product_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}
