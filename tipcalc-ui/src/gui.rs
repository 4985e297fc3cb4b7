use gpui::{
    AnyElement, App, AppContext, Context, IntoElement, KeyBinding, Menu, MenuItem, ParentElement,
    Styled, Window,
};
use gpui_component::v_flex;

use crate::{Quit, components::TipCalcForm, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Tip Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Builds the primary window content.
///
/// Returns a factory suitable for passing to `AppWindow::set_content`,
/// producing the calculator form on each render frame.
pub fn build_main_content(
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let form = app_cx.new(|form_cx: &mut Context<TipCalcForm>| TipCalcForm::new(window, form_cx));

    move || {
        v_flex()
            .size_full()
            .p_5()
            .child(form.clone())
            .into_any_element()
    }
}
