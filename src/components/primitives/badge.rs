//! Badge Component

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::{BadgeVariant, EasyColors};

/// A small colored label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Default,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg) = EasyColors::badge(self.variant);

        div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(bg)
            .text_color(fg)
            .text_size(px(11.0))
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(self.label)
    }
}
