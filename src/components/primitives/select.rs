//! Select Component
//!
//! A compact selector: clicking it advances to the next option and wraps
//! around, reporting the newly selected value.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::EasyColors;

type ChangeHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Value following `current` in `options`, wrapping to the first
pub fn next_value<'a>(options: &'a [SelectOption], current: Option<&str>) -> Option<&'a str> {
    let position = current.and_then(|cur| options.iter().position(|opt| opt.value == cur));
    let next = match position {
        Some(i) => (i + 1) % options.len(),
        None => 0,
    };
    options.get(next).map(|opt| opt.value.as_str())
}

/// A select/dropdown component
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    label: Option<SharedString>,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            selected: None,
            options: Vec::new(),
            placeholder: "Select...".into(),
            disabled: false,
            on_change: None,
        }
    }

    /// Set the field label shown above the selector
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or(self.placeholder);

        let text_color = if self.selected.is_some() {
            EasyColors::text_primary()
        } else {
            EasyColors::input_placeholder()
        };

        let next = next_value(&self.options, self.selected.as_deref()).map(str::to_string);

        let mut field = div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(EasyColors::input_bg())
            .border_1()
            .border_color(EasyColors::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(180.0))
            .flex()
            .items_center()
            .justify_between()
            .child(display_text)
            .child(
                div()
                    .text_color(EasyColors::text_muted())
                    .text_size(px(10.0))
                    .child("▼"),
            );

        if self.disabled {
            field = field.opacity(0.5);
        } else {
            field = field.cursor_pointer();
            if let (Some(handler), Some(next)) = (self.on_change, next) {
                field = field.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(&next, window, cx);
                });
            }
        }

        div()
            .flex()
            .flex_col()
            .gap_2()
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(EasyColors::text_secondary())
                        .child(label),
                )
            })
            .child(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Today"),
            SelectOption::new("7", "Last 7 days"),
            SelectOption::new("30", "Last 30 days"),
        ]
    }

    #[test]
    fn next_value_advances_and_wraps() {
        let options = options();
        assert_eq!(next_value(&options, Some("1")), Some("7"));
        assert_eq!(next_value(&options, Some("30")), Some("1"));
    }

    #[test]
    fn next_value_without_selection() {
        let options = options();
        assert_eq!(next_value(&options, None), Some("1"));
        assert_eq!(next_value(&options, Some("unknown")), Some("1"));
        assert_eq!(next_value(&[], None), None);
    }
}
