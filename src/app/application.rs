//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, App, AppContext, Application, Bounds, Focusable, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::features::portfolio::controller::ViewController;
use crate::helpers::{new_key_bindings, MenuAction};
use crate::i18n::tr_current;
use crate::state::PortfolioConfig;

/// Run the portfolio application
pub fn run_app(config: PortfolioConfig) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let size = gpui::size(px(config.window.width), px(config.window.height));
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(tr_current("app.title")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let controller = cx.new(|cx| {
                let mut controller = ViewController::new(&config, cx);
                controller.load_avatar(cx);
                controller
            });
            let workspace = cx.new(|cx| Workspace::new(controller, cx));
            window.focus(&workspace.focus_handle(cx));
            workspace
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open the main window");
            cx.quit();
            return;
        }

        info!("Main window opened");
        cx.activate(true);
    });
}
