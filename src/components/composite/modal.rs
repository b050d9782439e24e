//! Modal Component
//!
//! A dialog over a dimmed backdrop. Clicking the backdrop or the close button
//! calls the close handler; the owner decides whether the modal goes away.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::EasyColors;

type CloseHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Modal size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn max_width(self) -> f32 {
        match self {
            ModalSize::Small => 420.0,
            ModalSize::Medium => 560.0,
            ModalSize::Large => 760.0,
        }
    }
}

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    size: ModalSize,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            size: ModalSize::default(),
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Set the modal size
    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close.map(std::rc::Rc::new);
        let backdrop_close = on_close.clone();

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x0f172a88))
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                // Modal container; swallow clicks so they don't reach the backdrop
                div()
                    .id("modal-container")
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    .bg(EasyColors::content_bg())
                    .rounded_xl()
                    .shadow_lg()
                    .w_full()
                    .max_w(px(self.size.max_width()))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(EasyColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(18.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(EasyColors::text_primary())
                                    .child(self.title),
                            )
                            .child(
                                div()
                                    .id("modal-close")
                                    .size(px(28.0))
                                    .rounded_full()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(EasyColors::text_muted())
                                    .text_size(px(16.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(EasyColors::table_row_hover()))
                                    .when_some(on_close, |el, handler| {
                                        el.on_click(move |_event: &ClickEvent, window, cx| {
                                            handler(window, cx)
                                        })
                                    })
                                    .child("×"),
                            ),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    ),
            )
    }
}
