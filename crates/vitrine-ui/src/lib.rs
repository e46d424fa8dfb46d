//! Render-only visual primitives for Vitrine.
//!
//! Every function in this crate is a pure renderer: it takes plain data and
//! returns an HTML fragment as a `String`. Nothing here owns state, performs
//! I/O, or registers handlers; interactive affordances are expressed as
//! `data-*` attributes for the embedding page to wire up.
//!
//! - **Primitives**: [`icon`], [`badge`], [`avatar`], [`button`], [`checkbox`]
//! - **Formatting**: [`Money`] / [`Currency`], [`star_rating`]
//! - **Placeholders**: [`skeleton`], [`skeleton_row`]
//!
//! # Example
//!
//! ```
//! use vitrine_ui::{badge, Tone, Money, Currency, price};
//!
//! let html = badge("Shipped", Tone::Success);
//! assert!(html.contains("badge-success"));
//!
//! let total = Money::new(4999, Currency::USD);
//! assert_eq!(price(&total), r#"<span class="price">$49.99</span>"#);
//! ```

mod avatar;
mod badge;
mod button;
mod checkbox;
mod escape;
mod icon;
mod money;
mod rating;
mod skeleton;

pub use avatar::avatar;
pub use badge::{badge, Tone};
pub use button::{button, Variant};
pub use checkbox::checkbox;
pub use escape::html_escape;
pub use icon::icon;
pub use money::{price, Currency, Money};
pub use rating::star_rating;
pub use skeleton::{skeleton, skeleton_row};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        avatar, badge, button, checkbox, html_escape, icon, price, skeleton, skeleton_row,
        star_rating, Currency, Money, Tone, Variant,
    };
}
