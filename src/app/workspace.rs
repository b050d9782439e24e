//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header, sidebar and
//! content area. Pages are created the first time they are shown and kept.

use gpui::{div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::audit_logs::page::AuditLogsPage;
use crate::features::overdue::page::OverduePage;
use crate::theme::colors::EasyColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    audit_page: Option<Entity<AuditLogsPage>>,
    overdue_page: Option<Entity<OverduePage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            audit_page: None,
            overdue_page: None,
        }
    }

    /// Get or create the view for a page
    fn page_view(&mut self, page: ActivePage, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        match page {
            ActivePage::AuditLogs => self
                .audit_page
                .get_or_insert_with(|| cx.new(|cx| AuditLogsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::OverdueInstallments => self
                .overdue_page
                .get_or_insert_with(|| cx.new(|cx| OverduePage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.navigation.read(cx).active_page;
        let content = self.page_view(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(EasyColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(EasyColors::background())
                            .child(content),
                    ),
            )
    }
}
