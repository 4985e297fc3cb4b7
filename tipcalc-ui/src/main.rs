use std::path::PathBuf;

use clap::Parser;
use gpui::{App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions};
use tracing::{error, info};

use tipcalc_ui::{
    components::{AppWindow, WindowPreferences},
    gui, logging,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Opens a single window: enter the bill subtotal, pick a tip percentage
/// and party size, and read off the tip, total, and per-person amounts.
#[derive(Debug, Parser)]
struct Cli {
    /// Default log filter (overridden by RUST_LOG).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Append log records to this file in addition to stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_file.as_deref())?;

    info!("Starting tip calculator");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|app_cx: &mut App| {
            gui::setup_app(app_cx);

            let preferences = WindowPreferences::default();
            let bounds = Bounds::centered(None, preferences.size, app_cx);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Tip Calculator".into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = app_cx.open_window(options, |window, cx| {
                let content = gui::build_main_content(window, cx);
                cx.new(|window_cx| {
                    let mut root = AppWindow::new(window_cx);
                    root.set_content(content);
                    root
                })
            });

            if let Err(error) = opened {
                error!(?error, "failed to open main window");
                app_cx.quit();
            }
        });

    Ok(())
}
