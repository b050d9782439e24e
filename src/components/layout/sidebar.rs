//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    div, px, rgba, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{t, Locale};
use crate::theme::colors::EasyColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let label = t(locale, page.title_key());
        let entities = self.entities.clone();

        let transparent = rgba(0x00000000);
        let (bg_color, text_color, border_color) = if is_active {
            (
                EasyColors::primary_soft(),
                EasyColors::primary(),
                EasyColors::primary(),
            )
        } else {
            (transparent, EasyColors::text_secondary(), transparent)
        };

        div()
            .id(page.nav_id())
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(EasyColors::primary_soft()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |nav, cx| {
                    if nav.navigate(page) {
                        debug!(page = ?page, "Navigated");
                        cx.notify();
                    }
                });
            })
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.navigation.read(cx).active_page;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(EasyColors::sidebar_bg())
            .border_r_1()
            .border_color(EasyColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, locale, active_page)),
            )
    }
}
