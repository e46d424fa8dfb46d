//! The presentation assembler.
//!
//! Turns `(records, columns, facet states, page info)` into an HTML fragment.
//! Assembly order: loading skeleton / empty state short-circuits, then header,
//! data rows (with detail rows interleaved), bulk-action bar, pagination
//! footer. The assembler trusts the caller's record order: any sort intent
//! was already applied upstream.

use vitrine_ui::{button, checkbox, html_escape, icon, skeleton_row};

use crate::column::CellSource;
use crate::sort::Direction;
use crate::table::DataTable;
use crate::{selection, RowKey};

impl<R> DataTable<R> {
    /// Render the table against the current record slice.
    ///
    /// Visible row keys are derived from `records` on every call; no part of
    /// a previous render is reused.
    pub fn render(&self, records: &[R]) -> String {
        if self.loading && records.is_empty() {
            return self.render_loading();
        }
        if records.is_empty() {
            return self.render_empty();
        }

        let visible = self.visible_keys(records);
        let mut html = String::from(r#"<div class="data-table">"#);

        html.push_str(r#"<table class="data-table-grid"><thead>"#);
        html.push_str(&self.render_header(&visible));
        html.push_str("</thead><tbody>");
        for record in records {
            html.push_str(&self.render_row(record));
        }
        html.push_str("</tbody></table>");

        if self.selectable && !self.selection.get().is_empty() && !self.bulk_actions.is_empty() {
            html.push_str(&self.render_bulk_bar());
        }

        if let Some(page) = &self.page {
            html.push_str(&self.render_footer(page));
        }

        html.push_str("</div>");
        html
    }

    /// Skeleton placeholders shown while loading with no data yet. Selection
    /// and sort state are not consulted here.
    fn render_loading(&self) -> String {
        let mut html = String::from(
            r#"<div class="data-table is-loading"><table class="data-table-grid"><thead><tr>"#,
        );
        for column in &self.columns {
            html.push_str(&format!("<th>{}</th>", html_escape(column.header())));
        }
        html.push_str("</tr></thead><tbody>");
        for _ in 0..self.loading_rows {
            html.push_str(&skeleton_row(self.columns.len()));
        }
        html.push_str("</tbody></table></div>");
        html
    }

    /// Empty-state block: no header row, no footer.
    fn render_empty(&self) -> String {
        let action = match &self.empty.action {
            Some(action) => button(
                &action.label,
                action.variant,
                action.id.as_str(),
                false,
            ),
            None => String::new(),
        };
        format!(
            r#"<div class="data-table is-empty"><div class="table-empty">{}<p class="empty-message">{}</p>{}</div></div>"#,
            icon(&self.empty.icon),
            html_escape(&self.empty.message),
            action
        )
    }

    fn render_header(&self, visible: &[RowKey]) -> String {
        let mut html = String::from("<tr>");

        if self.selectable {
            let current = self.selection.get();
            html.push_str(&format!(
                r#"<th class="cell-select">{}</th>"#,
                checkbox(
                    "all",
                    selection::is_all_selected(visible, current),
                    selection::is_partially_selected(visible, current),
                )
            ));
        }
        if self.is_expandable() {
            html.push_str(r#"<th class="cell-expand"></th>"#);
        }

        for column in &self.columns {
            let width = match column.fixed_width() {
                Some(width) => format!(r#" style="width: {}""#, width),
                None => String::new(),
            };
            if column.is_sortable() {
                html.push_str(&format!(
                    r#"<th class="cell align-{} sortable" data-column="{}"{}>{}{}</th>"#,
                    column.alignment().as_class(),
                    html_escape(column.id().as_str()),
                    width,
                    html_escape(column.header()),
                    self.sort_indicator(column.id()),
                ));
            } else {
                html.push_str(&format!(
                    r#"<th class="cell align-{}"{}>{}</th>"#,
                    column.alignment().as_class(),
                    width,
                    html_escape(column.header()),
                ));
            }
        }

        if self.row_actions.is_some() {
            html.push_str(r#"<th class="cell-actions">Actions</th>"#);
        }
        html.push_str("</tr>");
        html
    }

    /// Two-glyph indicator; the active direction (if this column is sorted)
    /// gets the `active` class.
    fn sort_indicator(&self, column: &crate::ColumnId) -> String {
        let direction = self.sort.get().direction_of(column);
        let glyph_class = |this: Direction| {
            if direction == Some(this) {
                " active"
            } else {
                ""
            }
        };
        format!(
            r#"<span class="sort-indicator"><span class="glyph asc{}">▲</span><span class="glyph desc{}">▼</span></span>"#,
            glyph_class(Direction::Asc),
            glyph_class(Direction::Desc),
        )
    }

    fn render_row(&self, record: &R) -> String {
        let key = (self.row_key)(record);
        let expanded = self.is_expandable() && self.expansion.get().contains(&key);

        let mut html = format!(
            r#"<tr class="data-row{}" data-row="{}">"#,
            if expanded { " is-expanded" } else { "" },
            html_escape(key.as_str()),
        );

        if self.selectable {
            html.push_str(&format!(
                r#"<td class="cell-select">{}</td>"#,
                checkbox(key.as_str(), self.selection.get().contains(&key), false)
            ));
        }
        if self.is_expandable() {
            html.push_str(&format!(
                r#"<td class="cell-expand"><button class="expand-toggle" data-row="{}">{}</button></td>"#,
                html_escape(key.as_str()),
                if expanded { "▾" } else { "▸" },
            ));
        }

        for column in &self.columns {
            let value = match column.source() {
                CellSource::Text(value_of) => html_escape(&value_of(record)),
                CellSource::Html(value_of) => value_of(record),
            };
            html.push_str(&format!(
                r#"<td class="cell align-{}">{}</td>"#,
                column.alignment().as_class(),
                value
            ));
        }

        if let Some(actions_of) = &self.row_actions {
            html.push_str(r#"<td class="cell-actions">"#);
            for action in actions_of(record) {
                html.push_str(&format!(
                    r#"<button class="btn btn-{} row-action" data-action-id="{}" data-row="{}">{}</button>"#,
                    action.variant.as_class(),
                    html_escape(action.id.as_str()),
                    html_escape(key.as_str()),
                    html_escape(&action.label),
                ));
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>");

        if expanded {
            if let Some(detail) = &self.detail {
                html.push_str(&format!(
                    r#"<tr class="detail-row" data-row="{}"><td colspan="{}">{}</td></tr>"#,
                    html_escape(key.as_str()),
                    self.total_columns(),
                    detail(record),
                ));
            }
        }
        html
    }

    /// Bulk-action bar: selection count plus one button per action. Shown
    /// whenever the selection is non-empty, whether or not the selected rows
    /// are still visible.
    fn render_bulk_bar(&self) -> String {
        let count = self.selection.get().len();
        let mut html = format!(
            r#"<div class="bulk-bar"><span class="bulk-count">{} selected</span>"#,
            count
        );
        for action in &self.bulk_actions {
            html.push_str(&button(
                &action.label,
                action.variant,
                action.id.as_str(),
                false,
            ));
        }
        html.push_str("</div>");
        html
    }

    fn render_footer(&self, page: &crate::PageInfo) -> String {
        let mut html = format!(
            r#"<div class="table-footer"><span class="range">Showing {}-{} of {}</span>"#,
            page.start_item(),
            page.end_item(),
            page.total,
        );

        html.push_str(r#"<select class="page-size" data-action="page-size">"#);
        for size in &self.page_size_options {
            html.push_str(&format!(
                r#"<option value="{}"{}>{} / page</option>"#,
                size,
                if *size == page.per_page {
                    " selected"
                } else {
                    ""
                },
                size,
            ));
        }
        html.push_str("</select>");

        html.push_str(r#"<nav class="pages">"#);
        html.push_str(&format!(
            r#"<button class="page-prev" data-page="{}"{}>‹</button>"#,
            page.page - 1,
            if page.is_first() { " disabled" } else { "" },
        ));
        for number in page.page_numbers(5) {
            html.push_str(&format!(
                r#"<button class="page-link{}" data-page="{}">{}</button>"#,
                if number == page.page { " current" } else { "" },
                number,
                number,
            ));
        }
        html.push_str(&format!(
            r#"<button class="page-next" data-page="{}"{}>›</button>"#,
            page.page + 1,
            if page.is_last() { " disabled" } else { "" },
        ));
        html.push_str("</nav></div>");
        html
    }

    fn total_columns(&self) -> usize {
        self.columns.len()
            + usize::from(self.selectable)
            + usize::from(self.is_expandable())
            + usize::from(self.row_actions.is_some())
    }
}
