//! Pagination
//!
//! The manual-pagination bundle a caller hands to the DataTable, and the
//! footer element with the row summary and page navigation.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use super::data_provider::PageMeta;
use super::page_state::{ManualPage, PageNav};
use crate::theme::colors::EasyColors;

/// Called with the requested 1-based page
pub type PageChangeHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

type NavHandler = Rc<dyn Fn(&PageNav, &mut Window, &mut App) + 'static>;

/// Server-driven pagination supplied by the page that owns the current page.
///
/// Handing one of these to the table switches it into manual mode. The table
/// never changes `page_index` itself; it reports navigation through the
/// handler and waits for the caller to pass back a new bundle.
#[derive(Clone)]
pub struct ManualPagination {
    page: ManualPage,
    on_page_change: Option<PageChangeHandler>,
}

impl ManualPagination {
    /// Create a bundle for `page_index` (1-based) of `page_count` pages
    pub fn new(page_index: usize, page_count: usize, total: usize) -> Self {
        Self {
            page: ManualPage {
                page_index,
                page_count,
                total,
            },
            on_page_change: None,
        }
    }

    /// Create a bundle from server page metadata
    pub fn from_meta(page_index: usize, meta: PageMeta) -> Self {
        Self::new(page_index, meta.total_pages, meta.total)
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    pub fn page(&self) -> ManualPage {
        self.page
    }

    pub fn handler(&self) -> Option<&PageChangeHandler> {
        self.on_page_change.as_ref()
    }
}

/// Pagination footer
#[derive(IntoElement)]
pub struct Pagination {
    summary: SharedString,
    position: SharedString,
    previous_label: SharedString,
    next_label: SharedString,
    can_previous: bool,
    can_next: bool,
    on_navigate: Option<NavHandler>,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(summary: impl Into<SharedString>, position: impl Into<SharedString>) -> Self {
        Self {
            summary: summary.into(),
            position: position.into(),
            previous_label: "Previous".into(),
            next_label: "Next".into(),
            can_previous: false,
            can_next: false,
            on_navigate: None,
        }
    }

    /// Set the button labels
    pub fn labels(mut self, previous: impl Into<SharedString>, next: impl Into<SharedString>) -> Self {
        self.previous_label = previous.into();
        self.next_label = next.into();
        self
    }

    /// Set which buttons are enabled
    pub fn enabled(mut self, can_previous: bool, can_next: bool) -> Self {
        self.can_previous = can_previous;
        self.can_next = can_next;
        self
    }

    /// Set the navigation handler
    pub fn on_navigate(mut self, handler: impl Fn(&PageNav, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        id: &'static str,
        label: SharedString,
        nav: PageNav,
        enabled: bool,
        handler: Option<NavHandler>,
    ) -> impl IntoElement {
        let mut btn = div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(EasyColors::border())
            .bg(EasyColors::content_bg())
            .text_sm()
            .text_color(if enabled {
                EasyColors::text_secondary()
            } else {
                EasyColors::text_muted()
            })
            .child(label);

        if enabled {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(EasyColors::table_row_hover()));

            if let Some(handler) = handler {
                btn = btn.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(&nav, window, cx);
                });
            }
        } else {
            btn = btn.opacity(0.5);
        }

        btn
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .mt(px(12.0))
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .text_color(EasyColors::text_secondary())
                    .child(self.summary),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::nav_button(
                        "prev-page",
                        self.previous_label,
                        PageNav::Previous,
                        self.can_previous,
                        self.on_navigate.clone(),
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(EasyColors::text_primary())
                            .child(self.position),
                    )
                    .child(Self::nav_button(
                        "next-page",
                        self.next_label,
                        PageNav::Next,
                        self.can_next,
                        self.on_navigate,
                    )),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_without_handler() {
        let bundle = ManualPagination::new(2, 5, 43);
        assert!(bundle.handler().is_none());
        assert_eq!(
            bundle.page(),
            ManualPage {
                page_index: 2,
                page_count: 5,
                total: 43
            }
        );
    }

    #[test]
    fn bundle_from_meta() {
        let bundle = ManualPagination::from_meta(1, PageMeta { total: 7, total_pages: 1 })
            .on_page_change(|_, _, _| {});
        assert!(bundle.handler().is_some());
        assert_eq!(bundle.page().page_count, 1);
        assert_eq!(bundle.page().total, 7);
    }
}
