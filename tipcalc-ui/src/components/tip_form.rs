use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState, MaskPattern},
    v_flex,
};
use tipcalc_core::Check;
use tracing::warn;

use crate::{
    components::{make_button, make_stepper_button},
    utils::{amount_display, parse_amount},
};

// Fixed column widths so the value cells line up, like the bottom of a
// printed receipt.
const FORM_WIDTH: f32 = 320.;
const LABEL_WIDTH: f32 = 110.;
const VALUE_WIDTH: f32 = 90.;

/// The single-screen tip calculator form.
///
/// The subtotal text lives in the input field; every change is parsed into
/// the [`Check`] immediately so the derived rows track typing live. Tip
/// percentage and party size are stepper-only and therefore always within
/// their bounds.
pub struct TipCalcForm {
    subtotal_input: Entity<InputState>,
    check: Check,
}

impl TipCalcForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let check = Check::default();

        let subtotal_input = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .mask_pattern(MaskPattern::Number {
                    separator: Some(','),
                    fraction: Some(2),
                })
                .placeholder("Price")
                .default_value(check.subtotal().to_string())
        });

        // Re-parse the subtotal and re-render the derived rows whenever the
        // input changes.
        cx.observe(&subtotal_input, Self::subtotal_changed).detach();

        Self {
            subtotal_input,
            check,
        }
    }

    fn subtotal_changed(
        &mut self,
        input: Entity<InputState>,
        cx: &mut Context<Self>,
    ) {
        let text = input.read(cx).value().to_string();
        match parse_amount(&text) {
            Ok(subtotal) => self.check.set_subtotal(subtotal),
            // Keep the previous subtotal; the input mask makes this rare.
            Err(error) => warn!(%error, "keeping previous subtotal"),
        }
        cx.notify();
    }

    /// The check state backing the form.
    pub fn check(&self) -> &Check {
        &self.check
    }
}

impl Render for TipCalcForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let breakdown = self.check.breakdown();

        let on_clear = cx.listener(|this, _: &ClickEvent, window, cx| {
            this.subtotal_input
                .update(cx, |input, input_cx| input.set_value("", window, input_cx));
        });
        let on_tip_down = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.check.decrement_tip_percentage();
            cx.notify();
        });
        let on_tip_up = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.check.increment_tip_percentage();
            cx.notify();
        });
        let on_party_down = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.check.decrement_party_size();
            cx.notify();
        });
        let on_party_up = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.check.increment_party_size();
            cx.notify();
        });

        v_flex()
            .gap_3()
            .w(px(FORM_WIDTH))
            .child(
                labeled_row("Subtotal")
                    .child(Input::new(&self.subtotal_input).w(px(VALUE_WIDTH)))
                    .child(make_button("clear-subtotal", "Clear", on_clear)),
            )
            .child(
                labeled_row("Tip %")
                    .child(value_cell(self.check.tip_percentage().to_string()))
                    .child(make_stepper_button("tip-down", "-", on_tip_down))
                    .child(make_stepper_button("tip-up", "+", on_tip_up)),
            )
            .child(
                labeled_row("Party of")
                    .child(value_cell(self.check.party_size().to_string()))
                    .child(make_stepper_button("party-down", "-", on_party_down))
                    .child(make_stepper_button("party-up", "+", on_party_up)),
            )
            .child(divider())
            .child(
                labeled_row("Tip")
                    .child(value_cell(amount_display(breakdown.as_ref().map(|b| b.tip)))),
            )
            .child(
                labeled_row("Total").child(value_cell(amount_display(
                    breakdown.as_ref().map(|b| b.total),
                ))),
            )
            .child(
                labeled_row("Per person").child(value_cell(amount_display(
                    breakdown.as_ref().map(|b| b.per_person),
                ))),
            )
    }
}

/// A row starting with a fixed-width, left-aligned label.
fn labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_2()
        .child(div().min_w(px(LABEL_WIDTH)).child(label.into()))
}

/// Right-aligned, fixed-width read-only value cell.
fn value_cell(content: impl Into<SharedString>) -> Div {
    div()
        .w(px(VALUE_WIDTH))
        .text_align(TextAlign::Right)
        .child(content.into())
}

fn divider() -> Div {
    div().w_full().h(px(1.)).bg(gpui::rgb(0xd4d4d8))
}
