//! Header Component
//!
//! The application header with logo, title, and language switcher.

use gpui::{
    div, px, rgba, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use tracing::info;

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::theme::colors::EasyColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        // The switch shows the language it switches to
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(EasyColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(EasyColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("E"),
                    )
                    .child(
                        div()
                            .text_color(EasyColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(rgba(0xffffff22))
                    .text_color(EasyColors::text_header())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        let locale = entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                            i18n.locale
                        });
                        entities.config.update(cx, |config, _cx| {
                            config.set_locale(locale);
                        });
                        info!(locale = locale.code(), "Locale switched");
                    })
                    .child(lang_label),
            )
    }
}
