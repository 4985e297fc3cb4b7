pub mod components;
pub mod gui;
pub mod logging;
pub mod utils;

use gpui::{App, actions};
pub use gui::setup_app;
use tracing::info;

actions!(tipcalc, [Quit]);

/// Quit action handler, also invoked when the main window closes.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
