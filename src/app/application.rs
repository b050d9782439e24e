//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::PathBuf;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::i18n::{t, Locale};

actions!(easycore, [Quit]);

/// Run the EasyCore admin application
pub fn run_app(config: AppConfig, config_path: Option<PathBuf>, locale: Locale) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(config, config_path, locale, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        match opened {
            Ok(_) => info!(locale = locale.code(), "Main window opened"),
            Err(err) => {
                error!(error = %err, "Failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
