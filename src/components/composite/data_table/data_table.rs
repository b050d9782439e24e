//! DataTable Component
//!
//! A data table with loading and empty states and two pagination modes:
//! client-side slicing of the full row set, or manual (server-driven) paging
//! where the caller supplies one page of rows and owns the page number.

use std::ops::Range;

use gpui::{
    div, prelude::*, px, relative, Context, Div, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use super::column::{find_duplicate_id, Column, ColumnHeader, ColumnWidth};
use super::page_state::{FooterSummary, NavOutcome, PageNav, PageState, PaginationMode};
use super::pagination::{ManualPagination, PageChangeHandler, Pagination};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::i18n::{interpolate, t, Locale};
use crate::theme::colors::EasyColors;

/// What the table body shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// One loading row spanning `span` columns
    Loading { span: usize },
    /// One "no records" row spanning `span` columns
    Empty { span: usize },
    /// The rows at these indices
    Rows(Range<usize>),
}

/// User-facing strings of the table
#[derive(Debug, Clone)]
pub struct TableLabels {
    pub loading: SharedString,
    pub empty: SharedString,
    pub previous: SharedString,
    pub next: SharedString,
    /// Template with `{shown}` and `{total}`
    pub summary: SharedString,
    /// Template with `{page}` and `{pages}`, appended in manual mode
    pub summary_page: SharedString,
    /// Template with `{page}` and `{pages}`, shown between the buttons
    pub position: SharedString,
}

impl TableLabels {
    /// Labels for a locale
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            loading: t(locale, "table-loading"),
            empty: t(locale, "table-no-data"),
            previous: t(locale, "table-previous"),
            next: t(locale, "table-next"),
            summary: t(locale, "table-summary"),
            summary_page: t(locale, "table-summary-page"),
            position: t(locale, "table-position"),
        }
    }

    /// Footer summary text
    pub fn summary_text(&self, summary: &FooterSummary) -> String {
        let mut text = interpolate(
            &self.summary,
            &[
                ("shown", summary.shown.to_string()),
                ("total", summary.total.to_string()),
            ],
        );
        if summary.mode == PaginationMode::Manual {
            text.push_str(&interpolate(
                &self.summary_page,
                &[
                    ("page", summary.page.to_string()),
                    ("pages", summary.page_count.to_string()),
                ],
            ));
        }
        text
    }

    /// "page / pages" text between the navigation buttons
    pub fn position_text(&self, summary: &FooterSummary) -> String {
        interpolate(
            &self.position,
            &[
                ("page", summary.page.to_string()),
                ("pages", summary.page_count.to_string()),
            ],
        )
    }
}

impl Default for TableLabels {
    fn default() -> Self {
        Self::for_locale(Locale::EnUS)
    }
}

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    page_size: usize,
    /// 0-based; only meaningful in client mode
    client_page: usize,
    manual: Option<ManualPagination>,
    labels: TableLabels,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 44.0,
            header_height: 40.0,
            loading: false,
            page_size: DEFAULT_PAGE_SIZE,
            client_page: 0,
            manual: None,
            labels: TableLabels::default(),
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        if let Some(id) = find_duplicate_id(&columns) {
            tracing::warn!(column = %id, "Duplicate column id in data table");
        }
        self.columns = columns;
    }

    /// Set the rows. In client mode this returns to the first page.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        if self.manual.is_none() {
            self.client_page = 0;
        }
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the page size used for client-side slicing
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.client_page = 0;
    }

    /// Switch to manual pagination (`Some`) or back to client pagination (`None`)
    pub fn set_manual_pagination(&mut self, manual: Option<ManualPagination>) {
        if manual.is_none() && self.manual.is_some() {
            self.client_page = 0;
        }
        self.manual = manual;
    }

    /// Set the user-facing strings
    pub fn set_labels(&mut self, labels: TableLabels) {
        self.labels = labels;
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn labels(&self) -> &TableLabels {
        &self.labels
    }

    /// Column ids in rendering order
    pub fn column_ids(&self) -> Vec<SharedString> {
        self.columns.iter().map(|col| col.id.clone()).collect()
    }

    /// Derive the page state for the current inputs
    pub fn page_state(&self) -> PageState {
        PageState::derive(
            self.rows.len(),
            self.page_size,
            self.client_page,
            self.manual.as_ref().map(ManualPagination::page),
        )
    }

    /// Decide what the body shows for a page state
    pub fn body(&self, state: &PageState) -> TableBody {
        let span = self.columns.len();
        if self.loading {
            TableBody::Loading { span }
        } else if state.visible.is_empty() {
            TableBody::Empty { span }
        } else {
            TableBody::Rows(state.visible.clone())
        }
    }

    /// Apply a navigation request.
    ///
    /// Client mode moves the internal page. Manual mode leaves the table
    /// untouched and reports the target page; the caller is expected to
    /// invoke the page change handler.
    pub fn navigate(&mut self, nav: PageNav) -> NavOutcome {
        let state = self.page_state();
        let Some(page) = state.target(nav) else {
            return NavOutcome::Blocked;
        };

        match state.mode {
            PaginationMode::Client => {
                self.client_page = page - 1;
                NavOutcome::Moved { page }
            }
            PaginationMode::Manual => {
                if self.manual.as_ref().and_then(|m| m.handler()).is_some() {
                    NavOutcome::Requested { page }
                } else {
                    NavOutcome::Unhandled { page }
                }
            }
        }
    }

    /// The caller's handler and the 1-based page to call it with, for a
    /// navigation outcome that requests a page
    pub fn page_change(&self, outcome: NavOutcome) -> Option<(usize, PageChangeHandler)> {
        let NavOutcome::Requested { page } = outcome else {
            return None;
        };
        let handler = self.manual.as_ref().and_then(|m| m.handler()).cloned()?;
        Some((page, handler))
    }

    fn handle_navigate(&mut self, nav: PageNav, window: &mut Window, cx: &mut Context<Self>) {
        let outcome = self.navigate(nav);
        match outcome {
            NavOutcome::Moved { page } => {
                tracing::debug!(page, "Data table moved to page");
                cx.notify();
            }
            NavOutcome::Requested { page } => {
                tracing::debug!(page, "Data table requested page");
            }
            NavOutcome::Unhandled { page } => {
                tracing::debug!(page, "Page change ignored: no handler");
            }
            NavOutcome::Blocked => {}
        }

        if let Some((page, handler)) = self.page_change(outcome) {
            handler(page, window, cx);
        }
    }

    /// Apply a column width to a cell
    fn sized(cell: Div, width: ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min, max } => {
                let mut cell = cell.flex_1();
                if let Some(min) = min {
                    cell = cell.min_w(px(min));
                }
                if let Some(max) = max {
                    cell = cell.max_w(px(max));
                }
                cell
            }
            ColumnWidth::Percent(p) => cell.w(relative(p / 100.0)).flex_none(),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(EasyColors::table_header_bg())
            .border_b_1()
            .border_color(EasyColors::border())
            .children(self.columns.iter().map(|col| {
                let cell = div()
                    .px_6()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(EasyColors::text_secondary());
                let cell = Self::sized(cell, col.width);
                match &col.header {
                    ColumnHeader::Label(label) => cell.child(label.clone()),
                    ColumnHeader::Custom(render) => cell.child(render()),
                }
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R) -> impl IntoElement {
        div()
            .min_h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(EasyColors::content_bg())
            .hover(|s| s.bg(EasyColors::table_row_hover()))
            .border_b_1()
            .border_color(EasyColors::border_subtle())
            .children(self.columns.iter().map(|col| {
                let cell = div()
                    .px_6()
                    .py_3()
                    .text_sm()
                    .text_color(EasyColors::text_primary())
                    .overflow_hidden();
                Self::sized(cell, col.width).child(col.render_cell(row))
            }))
    }

    /// Single full-width row used for the loading and empty states
    fn render_spanning_row(&self, content: impl IntoElement) -> impl IntoElement {
        div()
            .h(px(96.0))
            .w_full()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(EasyColors::text_muted())
            .child(content)
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        self.render_spanning_row(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .size(px(14.0))
                        .rounded_full()
                        .border_2()
                        .border_color(EasyColors::primary()),
                )
                .child(self.labels.loading.clone()),
        )
    }
}

impl<R: Clone + Send + Sync + 'static> Default for DataTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.page_state();
        let summary = state.summary();

        let body = match self.body(&state) {
            TableBody::Loading { .. } => self.render_loading().into_any_element(),
            TableBody::Empty { .. } => self
                .render_spanning_row(self.labels.empty.clone())
                .into_any_element(),
            TableBody::Rows(range) => div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(self.rows[range].iter().map(|row| self.render_row(row)))
                .into_any_element(),
        };

        let footer = Pagination::new(
            self.labels.summary_text(&summary),
            self.labels.position_text(&summary),
        )
        .labels(self.labels.previous.clone(), self.labels.next.clone())
        .enabled(state.can_previous(), state.can_next())
        .on_navigate(cx.listener(|this, nav: &PageNav, window, cx| {
            this.handle_navigate(*nav, window, cx);
        }));

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .bg(EasyColors::content_bg())
                    .border_1()
                    .border_color(EasyColors::border())
                    .rounded_xl()
                    .overflow_hidden()
                    .child(self.render_header())
                    .child(body),
            )
            .child(footer)
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + Send + Sync + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|_| {
        let mut table = DataTable::new();
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use gpui::{div, IntoElement};

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        patient: &'static str,
        amount: u32,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("patient", "Patient", |row: &Row| {
                div().child(row.patient).into_any_element()
            }),
            Column::new("amount", "Amount", |row: &Row| {
                div().child(row.amount.to_string()).into_any_element()
            }),
        ]
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|amount| Row {
                patient: "Ana",
                amount,
            })
            .collect()
    }

    fn table(n: u32) -> DataTable<Row> {
        let mut table = DataTable::new();
        table.set_columns(columns());
        table.set_rows(rows(n));
        table
    }

    fn visible_amounts(table: &DataTable<Row>) -> Vec<u32> {
        match table.body(&table.page_state()) {
            TableBody::Rows(range) => table.rows()[range].iter().map(|r| r.amount).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn header_follows_column_order() {
        let table = table(0);
        assert_eq!(
            table.column_ids(),
            vec![SharedString::from("patient"), SharedString::from("amount")]
        );
        let labels: Vec<_> = table
            .columns()
            .iter()
            .filter_map(|c| c.header.label().cloned())
            .collect();
        assert_eq!(labels, vec![SharedString::from("Patient"), SharedString::from("Amount")]);
    }

    #[test]
    fn client_scenario_25_rows() {
        let mut table = table(25);
        let state = table.page_state();
        assert_eq!(visible_amounts(&table), (1..=10).collect::<Vec<_>>());
        assert!(!state.can_previous());
        assert!(state.can_next());

        assert_eq!(table.navigate(PageNav::Next), NavOutcome::Moved { page: 2 });
        assert_eq!(visible_amounts(&table), (11..=20).collect::<Vec<_>>());

        assert_eq!(table.navigate(PageNav::Next), NavOutcome::Moved { page: 3 });
        assert_eq!(visible_amounts(&table), (21..=25).collect::<Vec<_>>());
        assert_eq!(table.navigate(PageNav::Next), NavOutcome::Blocked);

        assert_eq!(table.navigate(PageNav::Previous), NavOutcome::Moved { page: 2 });
    }

    #[test]
    fn new_rows_return_to_first_page() {
        let mut table = table(25);
        table.navigate(PageNav::Next);
        table.set_rows(rows(25));
        assert_eq!(table.page_state().page, 1);
    }

    #[test]
    fn loading_replaces_rows_with_one_spanning_row() {
        let mut table = table(25);
        table.set_loading(true);
        assert_eq!(table.body(&table.page_state()), TableBody::Loading { span: 2 });

        let mut manual = table_manual(3, 2, 5);
        manual.set_loading(true);
        assert_eq!(manual.body(&manual.page_state()), TableBody::Loading { span: 2 });
    }

    #[test]
    fn empty_rows_render_no_records_row() {
        let table = table(0);
        assert_eq!(table.body(&table.page_state()), TableBody::Empty { span: 2 });
    }

    #[test]
    fn empty_columns_do_not_panic() {
        let mut table: DataTable<Row> = DataTable::new();
        assert_eq!(table.body(&table.page_state()), TableBody::Empty { span: 0 });
        table.set_rows(rows(3));
        assert_eq!(table.body(&table.page_state()), TableBody::Rows(0..3));
        assert_eq!(table.navigate(PageNav::Next), NavOutcome::Blocked);
    }

    fn table_manual(n: u32, page_index: usize, page_count: usize) -> DataTable<Row> {
        let mut table = table(n);
        table.set_manual_pagination(Some(
            ManualPagination::new(page_index, page_count, page_count * 10)
                .on_page_change(|_, _, _| {}),
        ));
        table
    }

    #[test]
    fn manual_rows_are_never_sliced() {
        for page_index in 1..=5 {
            let table = table_manual(3, page_index, 5);
            assert_eq!(visible_amounts(&table), vec![1, 2, 3]);
        }
    }

    #[test]
    fn manual_scenario_last_page() {
        let mut table = table_manual(4, 3, 3);
        let state = table.page_state();
        assert!(!state.can_next());
        assert!(state.can_previous());

        assert_eq!(table.navigate(PageNav::Previous), NavOutcome::Requested { page: 2 });
        // Nothing changes until the caller supplies new rows and a new bundle
        assert_eq!(table.page_state().page, 3);
        assert_eq!(visible_amounts(&table), vec![1, 2, 3, 4]);
        assert_eq!(table.navigate(PageNav::Next), NavOutcome::Blocked);
    }

    #[test]
    fn previous_on_last_manual_page_calls_handler_with_page_two() {
        let bundle = ManualPagination::new(3, 3, 30).on_page_change(|_, _, _| {});
        let installed = bundle.handler().cloned();

        let mut table = table(4);
        table.set_manual_pagination(Some(bundle));

        let outcome = table.navigate(PageNav::Previous);
        let (page, handler) = table.page_change(outcome).unwrap();
        assert_eq!(page, 2);
        assert!(Rc::ptr_eq(&handler, &installed.unwrap()));
    }

    #[test]
    fn no_handler_call_without_handler_or_in_client_mode() {
        let mut manual = table(3);
        manual.set_manual_pagination(Some(ManualPagination::new(2, 3, 23)));
        let outcome = manual.navigate(PageNav::Previous);
        assert!(manual.page_change(outcome).is_none());

        let mut client = table(25);
        let outcome = client.navigate(PageNav::Next);
        assert!(client.page_change(outcome).is_none());

        let mut edge = table_manual(4, 1, 3);
        let outcome = edge.navigate(PageNav::Previous);
        assert_eq!(outcome, NavOutcome::Blocked);
        assert!(edge.page_change(outcome).is_none());
    }

    #[test]
    fn manual_without_handler_is_a_no_op() {
        let mut table = table(3);
        table.set_manual_pagination(Some(ManualPagination::new(2, 3, 23)));

        let before = table.page_state();
        assert_eq!(table.navigate(PageNav::Next), NavOutcome::Unhandled { page: 3 });
        assert_eq!(table.navigate(PageNav::Previous), NavOutcome::Unhandled { page: 1 });
        assert_eq!(table.page_state(), before);
        assert_eq!(visible_amounts(&table), vec![1, 2, 3]);
    }

    #[test]
    fn leaving_manual_mode_starts_on_first_page() {
        let mut table = table_manual(25, 3, 3);
        table.set_manual_pagination(None);
        let state = table.page_state();
        assert_eq!(state.mode, PaginationMode::Client);
        assert_eq!(state.page, 1);
        assert_eq!(visible_amounts(&table), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn summary_text_per_mode() {
        let labels = TableLabels::for_locale(Locale::EnUS);

        let client = table(25);
        assert_eq!(
            labels.summary_text(&client.page_state().summary()),
            "Showing 10 of 25 records"
        );

        let mut manual = table(3);
        manual.set_manual_pagination(Some(ManualPagination::new(2, 5, 43)));
        let summary = manual.page_state().summary();
        assert_eq!(labels.summary_text(&summary), "Showing 3 of 43 records (Page 2 of 5)");
        assert_eq!(labels.position_text(&summary), "2 / 5");
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut table = table(25);
        table.navigate(PageNav::Next);
        table.set_page_size(5);
        let state = table.page_state();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_count, 5);
        assert_eq!(visible_amounts(&table), vec![1, 2, 3, 4, 5]);
    }
}
