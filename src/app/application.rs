//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::PathBuf;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{APP_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::AdminConfig;

actions!(pricing_admin, [Quit]);

/// Run the console with loaded settings
pub fn run_app(config: AdminConfig, config_path: Option<PathBuf>) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
            cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let width = config.window.width.max(MIN_WINDOW_WIDTH);
            let height = config.window.height.max(MIN_WINDOW_HEIGHT);

            let entities = AppEntities::init(cx, config, config_path);
            cx.set_global(entities.clone());

            let bounds = Bounds::centered(None, gpui::size(px(width), px(height)), cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from(APP_TITLE)),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                let workspace = cx.new(|cx| Workspace::new(entities.clone(), cx));
                cx.new(|cx| Root::new(workspace, window, cx))
            });

            match opened {
                Ok(_) => {
                    info!(width, height, "main window opened");
                    cx.activate(true);
                }
                Err(e) => {
                    error!(error = %e, "failed to open main window");
                    cx.quit();
                }
            }
        });
}
