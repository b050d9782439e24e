//! Audit Logs Page
//!
//! Displays the audit trail in a server-paged data table.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::{DataTable, TableLabels};
use crate::components::composite::data_table::pagination::ManualPagination;
use crate::components::composite::modal::{Modal, ModalSize};
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{Select, SelectOption};
use crate::constants::AUDIT_DETAILS_PREVIEW_LEN;
use crate::domain::audit_log::{ActionFilter, ActionKind, AuditLog, AuditPeriod};
use crate::features::audit_logs::controller::AuditLogsController;
use crate::i18n::{t, Locale};
use crate::theme::colors::{BadgeVariant, EasyColors};
use crate::utils::format::format_datetime;

/// Audit logs page component
pub struct AuditLogsPage {
    entities: AppEntities,
    controller: AuditLogsController,
    table: Entity<DataTable<AuditLog>>,
}

impl AuditLogsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = AuditLogsController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let table = cx.new(|_| {
            let mut table = DataTable::<AuditLog>::new();
            table.set_columns(Self::create_columns(locale));
            table.set_labels(TableLabels::for_locale(locale));
            table
        });

        // Mirror page state into the table
        let table_clone = table.clone();
        let page_controller = controller.clone();
        cx.observe(&entities.audit, move |_this, audit, cx| {
            let (rows, loading, manual) = {
                let state = audit.read(cx);
                let controller = page_controller.clone();
                let manual = ManualPagination::from_meta(state.page, state.page_meta())
                    .on_page_change(move |page, _window, cx| controller.go_to_page(page, cx));
                (state.rows.clone(), state.loading, manual)
            };
            table_clone.update(cx, |table, cx| {
                table.set_manual_pagination(Some(manual));
                table.set_rows(rows);
                table.set_loading(loading);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        // Observe i18n changes
        let table_clone = table.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            table_clone.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(locale));
                table.set_labels(TableLabels::for_locale(locale));
                cx.notify();
            });
        })
        .detach();

        controller.refresh(cx);

        Self {
            entities,
            controller,
            table,
        }
    }

    fn create_columns(locale: Locale) -> Vec<Column<AuditLog>> {
        vec![
            Column::new("timestamp", t(locale, "col-timestamp"), |row: &AuditLog| {
                div()
                    .text_sm()
                    .text_color(EasyColors::text_secondary())
                    .child(format_datetime(&row.timestamp))
                    .into_any_element()
            })
            .fixed_width(160.0),
            Column::new("user", t(locale, "col-user"), move |row: &AuditLog| {
                let (name, email, role) = match &row.user {
                    Some(user) => (
                        SharedString::from(user.name.clone()),
                        Some(user.email.clone()),
                        SharedString::from(user.role.clone()),
                    ),
                    None => (
                        t(locale, "audit-system-user"),
                        None,
                        t(locale, "audit-system-role"),
                    ),
                };
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(name),
                    )
                    .when_some(email, |el, email| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(EasyColors::text_secondary())
                                .child(email),
                        )
                    })
                    .child(
                        div()
                            .text_xs()
                            .text_color(EasyColors::text_muted())
                            .child(role),
                    )
                    .into_any_element()
            })
            .flex_width(Some(180.0), None),
            Column::new("action", t(locale, "col-action"), |row: &AuditLog| {
                let variant = match row.action_kind() {
                    ActionKind::Created => BadgeVariant::Success,
                    ActionKind::Removed => BadgeVariant::Error,
                    ActionKind::Updated => BadgeVariant::Info,
                    ActionKind::Other => BadgeVariant::Default,
                };
                div()
                    .flex()
                    .child(Badge::new(row.action_label()).variant(variant))
                    .into_any_element()
            })
            .fixed_width(200.0),
            Column::new("details", t(locale, "col-details"), |row: &AuditLog| {
                let Some(preview) = row.details_preview(AUDIT_DETAILS_PREVIEW_LEN) else {
                    return div()
                        .text_sm()
                        .text_color(EasyColors::text_muted())
                        .child("-")
                        .into_any_element();
                };
                let log = row.clone();
                div()
                    .id(SharedString::from(format!("details-{}", row.id)))
                    .text_xs()
                    .font_family("monospace")
                    .text_color(EasyColors::text_secondary())
                    .cursor_pointer()
                    .hover(|s| s.text_color(EasyColors::primary()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        let Some(entities) = cx.try_global::<AppEntities>().cloned() else {
                            return;
                        };
                        AuditLogsController::new(entities).select(Some(log.clone()), cx);
                    })
                    .child(preview.preview().to_string())
                    .into_any_element()
            })
            .flex_width(Some(240.0), None),
        ]
    }

    fn render_filters(&self, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let state = self.entities.audit.read(cx);
        let filter = state.filter;
        let loading = state.loading;

        let period_options = AuditPeriod::all()
            .iter()
            .map(|p| SelectOption::new(p.value(), t(locale, p.label_key())))
            .collect();
        let action_options = ActionFilter::all()
            .iter()
            .map(|a| SelectOption::new(a.value(), t(locale, a.label_key())))
            .collect();

        let period_controller = self.controller.clone();
        let action_controller = self.controller.clone();
        let refresh_controller = self.controller.clone();

        div()
            .w_full()
            .flex()
            .items_end()
            .gap_4()
            .p_4()
            .bg(EasyColors::content_bg())
            .border_1()
            .border_color(EasyColors::border())
            .rounded_xl()
            .child(
                Select::new("audit-period")
                    .label(t(locale, "audit-period"))
                    .options(period_options)
                    .selected(filter.period.value())
                    .on_change(move |value, _window, cx| period_controller.set_period(value, cx)),
            )
            .child(
                Select::new("audit-action")
                    .label(t(locale, "audit-action"))
                    .options(action_options)
                    .selected(filter.action.value())
                    .on_change(move |value, _window, cx| action_controller.set_action(value, cx)),
            )
            .child(div().flex_1())
            .child(
                Button::outline("audit-refresh", t(locale, "action-refresh"))
                    .disabled(loading)
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        refresh_controller.refresh(cx);
                    }),
            )
    }

    fn render_details(&self, log: &AuditLog, locale: Locale) -> impl IntoElement {
        let full = log
            .details_preview(usize::MAX)
            .map(|preview| preview.full().to_string())
            .unwrap_or_else(|| "-".to_string());
        let user = log
            .user
            .as_ref()
            .map(|user| SharedString::from(format!("{} <{}>", user.name, user.email)))
            .unwrap_or_else(|| t(locale, "audit-system-user"));
        let controller = self.controller.clone();

        Modal::new(t(locale, "audit-details-title"))
            .size(ModalSize::Large)
            .on_close(move |_window, cx| controller.select(None, cx))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .text_sm()
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(log.action_label()),
                    )
                    .child(
                        div()
                            .text_color(EasyColors::text_secondary())
                            .child(format!("{} · {}", format_datetime(&log.timestamp), user)),
                    ),
            )
            .child(
                div()
                    .id("audit-details-body")
                    .mt_4()
                    .p_3()
                    .max_h(px(420.0))
                    .overflow_y_scroll()
                    .bg(EasyColors::table_header_bg())
                    .rounded_md()
                    .text_xs()
                    .font_family("monospace")
                    .children(full.lines().map(|line| div().child(line.to_string()))),
            )
    }
}

impl Render for AuditLogsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (error, selected) = {
            let state = self.entities.audit.read(cx);
            (state.error.clone(), state.selected.clone())
        };

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .p_6()
            .gap_4()
            // Title
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(EasyColors::text_primary())
                            .child(t(locale, "nav-audit-logs")),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(EasyColors::text_secondary())
                            .child(t(locale, "audit-subtitle")),
                    ),
            )
            .child(self.render_filters(locale, cx))
            .when_some(error, |el, error| {
                el.child(
                    div()
                        .p_4()
                        .rounded_lg()
                        .bg(EasyColors::error_bg())
                        .border_1()
                        .border_color(EasyColors::error_border())
                        .text_sm()
                        .text_color(EasyColors::danger())
                        .child(format!("{} {}", t(locale, "audit-load-error"), error)),
                )
            })
            // Table
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.table.clone()),
            )
            .child(
                div()
                    .p_4()
                    .rounded_lg()
                    .bg(EasyColors::notice_bg())
                    .border_1()
                    .border_color(EasyColors::notice_border())
                    .text_sm()
                    .text_color(EasyColors::notice_text())
                    .child(t(locale, "audit-security-note")),
            )
            .when_some(selected, |el, log| el.child(self.render_details(&log, locale)))
    }
}
