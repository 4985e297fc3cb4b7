use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window,
    div,
};
use gpui_component::StyledExt;
use tracing::info;

use crate::{Quit, quit};

/// Root view for the single application window.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        // Single-window app: closing the window exits.
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Main window closed");
            quit(&Quit, cx);
        });

        Self {
            _window_close_subscription: subscription,
            content: None,
        }
    }

    /// Set a factory that produces the content to be rendered in the window.
    ///
    /// The factory is called on every render, ensuring stateless `RenderOnce`
    /// components like `Button` are reconstructed each frame.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());

        // Centered horizontally, pinned to the top of the window.
        div()
            .v_flex()
            .size_full()
            .items_center()
            .children(content)
    }
}
