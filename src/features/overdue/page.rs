//! Overdue Installments Page
//!
//! Displays every overdue installment in a client-paged data table.

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::Column;
use crate::components::composite::data_table::data_table::{data_table, DataTable, TableLabels};
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::domain::installment::OverdueInstallment;
use crate::features::overdue::controller::OverdueController;
use crate::i18n::{t, Locale};
use crate::theme::colors::{BadgeVariant, EasyColors};
use crate::utils::format::{format_amount, format_date};

/// Overdue installments page component
pub struct OverduePage {
    entities: AppEntities,
    controller: OverdueController,
    table: Entity<DataTable<OverdueInstallment>>,
}

impl OverduePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = OverdueController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let rows = entities.overdue.read(cx).rows.clone();
        let table = data_table(Self::create_columns(locale), rows, cx);
        table.update(cx, |table, _cx| {
            table.set_labels(TableLabels::for_locale(locale));
        });

        // Observe overdue state
        let table_clone = table.clone();
        cx.observe(&entities.overdue, move |_this, overdue, cx| {
            let (rows, loading) = {
                let state = overdue.read(cx);
                (state.rows.clone(), state.loading)
            };
            table_clone.update(cx, |table, cx| {
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

        if !entities.overdue.read(cx).loaded {
            controller.refresh(cx);
        }

        Self {
            entities,
            controller,
            table,
        }
    }

    fn create_columns(locale: Locale) -> Vec<Column<OverdueInstallment>> {
        vec![
            Column::new("patient", t(locale, "col-patient"), |row: &OverdueInstallment| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(row.patient_name.clone())
                    .into_any_element()
            })
            .flex_width(Some(200.0), None),
            Column::new(
                "installment",
                t(locale, "col-installment"),
                |row: &OverdueInstallment| {
                    div()
                        .text_sm()
                        .child(format!("#{}", row.installment_number))
                        .into_any_element()
                },
            )
            .fixed_width(110.0),
            Column::new("amount", t(locale, "col-amount"), |row: &OverdueInstallment| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(format_amount(row.expected_amount))
                    .into_any_element()
            })
            .fixed_width(140.0),
            Column::new("due_date", t(locale, "col-due-date"), |row: &OverdueInstallment| {
                div()
                    .text_sm()
                    .text_color(EasyColors::danger())
                    .child(format_date(&row.due_date))
                    .into_any_element()
            })
            .fixed_width(130.0),
            Column::new("status", t(locale, "col-status"), move |row: &OverdueInstallment| {
                let variant = if row.is_default {
                    BadgeVariant::Error
                } else {
                    BadgeVariant::Warning
                };
                div()
                    .flex()
                    .child(Badge::new(t(locale, row.status_key())).variant(variant))
                    .into_any_element()
            })
            .fixed_width(220.0),
        ]
    }
}

impl Render for OverduePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (error, loading) = {
            let state = self.entities.overdue.read(cx);
            (state.error.clone(), state.loading)
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_6()
            .gap_4()
            // Header
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
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
                                    .child(t(locale, "nav-overdue")),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(EasyColors::text_secondary())
                                    .child(t(locale, "overdue-subtitle")),
                            ),
                    )
                    .child(
                        Button::outline("overdue-refresh", t(locale, "action-refresh"))
                            .disabled(loading)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            })),
                    ),
            )
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
                        .child(format!("{} {}", t(locale, "overdue-load-error"), error)),
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
                    .text_xs()
                    .text_color(EasyColors::text_muted())
                    .child(t(locale, "overdue-note")),
            )
    }
}
