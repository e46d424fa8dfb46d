//! Commerce widgets for Vitrine.
//!
//! Compositions of the leaf primitives (`vitrine-ui`) and the data-table
//! engine (`vitrine-datatable`) into storefront and admin building blocks:
//! cart line rows, the admin order list, and the product card grid. Like the
//! primitives they are built from, these are pure renderers over
//! caller-supplied view models.

mod cart;
mod orders;
mod products;

pub use cart::{cart_row, CartLine};
pub use orders::{order_table, OrderStatus, OrderSummary};
pub use products::{product_card, product_grid, ProductCard, StockLevel};
