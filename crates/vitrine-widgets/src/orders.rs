//! Admin order list, built on the data-table engine.

use serde::{Deserialize, Serialize};
use vitrine_datatable::{
    Action, Align, Column, DataTable, EmptyState, PageInfo, RowKey, SortState, TableError,
};
use vitrine_ui::{avatar, badge, price, Money, Tone, Variant};

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge tone for this status.
    pub fn tone(&self) -> Tone {
        match self {
            OrderStatus::Pending => Tone::Warning,
            OrderStatus::Processing => Tone::Info,
            OrderStatus::Shipped => Tone::Info,
            OrderStatus::Delivered => Tone::Success,
            OrderStatus::Cancelled => Tone::Danger,
        }
    }
}

/// View model for one order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order id (row key).
    pub id: String,
    /// Display number (e.g., "#1042").
    pub number: String,
    /// Customer name.
    pub customer: String,
    /// Customer avatar image, if any.
    pub customer_image: Option<String>,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Placement date, preformatted by the caller.
    pub placed_at: String,
    /// Number of line items.
    pub item_count: i64,
    /// Order total.
    pub total: Money,
}

/// Build the admin order table.
///
/// Columns, selection, expansion, and bulk actions are wired here; the
/// caller owns the record slice, applies sort/page intents, and calls
/// `render`/`handle_event` on the returned table.
pub fn order_table(page: Option<PageInfo>, sort: SortState) -> Result<DataTable<OrderSummary>, TableError> {
    let mut table = DataTable::new(
        vec![
            Column::text("number", "Order", |o: &OrderSummary| o.number.clone()).sortable(),
            Column::html("customer", "Customer", |o: &OrderSummary| {
                format!(
                    r#"{} <span class="customer-name">{}</span>"#,
                    avatar(&o.customer, o.customer_image.as_deref()),
                    vitrine_ui::html_escape(&o.customer),
                )
            }),
            Column::html("status", "Status", |o: &OrderSummary| {
                badge(o.status.label(), o.status.tone())
            }),
            Column::text("placed_at", "Date", |o: &OrderSummary| o.placed_at.clone()).sortable(),
            Column::text("items", "Items", |o: &OrderSummary| o.item_count.to_string())
                .align(Align::Right)
                .width("5rem"),
            Column::html("total", "Total", |o: &OrderSummary| price(&o.total))
                .sortable()
                .align(Align::Right),
        ],
        |o: &OrderSummary| RowKey::new(&o.id),
    )?
    .selectable()
    .with_sort(sort)
    .expandable(expanded_detail)
    .empty_state(EmptyState::new("package", "No orders yet"))
    .bulk_actions(vec![
        Action::new("export", "Export"),
        Action::new("archive", "Archive").variant(Variant::Danger),
    ])
    .row_actions(|order: &OrderSummary| match order.status {
        OrderStatus::Cancelled => vec![Action::new("restore", "Restore")],
        _ => vec![
            Action::new("view", "View"),
            Action::new("cancel", "Cancel").variant(Variant::Danger),
        ],
    })
    .on_row_click();

    if let Some(page) = page {
        table = table.with_page(page);
    }
    Ok(table)
}

fn expanded_detail(order: &OrderSummary) -> String {
    format!(
        r#"<div class="order-detail"><span class="detail-customer">{}</span><span class="detail-items">{} items</span><span class="detail-total">{}</span></div>"#,
        vitrine_ui::html_escape(&order.customer),
        order.item_count,
        price(&order.total),
    )
}
