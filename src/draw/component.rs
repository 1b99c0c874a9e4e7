use log::trace;

use super::types::BoxSpec;
use crate::canvas::{DrawingContext, TextAlign};
use crate::theme::Theme;

/// Corner radius for every box, independent of its size.
pub const CORNER_RADIUS: f64 = 10.0;

const BORDER_WIDTH: f64 = 1.0;
const TITLE_FONT_SIZE: f64 = 14.0;
const SUBTITLE_FONT_SIZE: f64 = 12.0;
const TITLE_BASELINE_OFFSET: f64 = 5.0;
const SUBTITLE_BASELINE_OFFSET: f64 = 25.0;

/// Draw a drop-shadowed rounded box with a centered title and optional subtitle.
///
/// The shadow applies to the fill pass only; it is cleared before the border
/// is stroked. An empty subtitle is treated as absent. Boxes narrower or
/// shorter than twice [`CORNER_RADIUS`] render degenerate corners.
pub fn draw_box<C: DrawingContext + ?Sized>(ctx: &mut C, spec: &BoxSpec<'_>, theme: &Theme) {
    trace!(
        "box '{}' at ({}, {}) {}x{}",
        spec.title, spec.center.x, spec.center.y, spec.width, spec.height
    );

    ctx.set_shadow_color(&theme.shadow_color);
    ctx.set_shadow_blur(theme.shadow_blur);
    ctx.set_shadow_offset_x(theme.shadow_offset_x);
    ctx.set_shadow_offset_y(theme.shadow_offset_y);

    rounded_rect_path(ctx, spec);
    ctx.set_fill_style(spec.fill);
    ctx.fill();

    ctx.set_shadow_color("transparent");
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_x(0.0);
    ctx.set_shadow_offset_y(0.0);

    ctx.set_stroke_style(&theme.border_color);
    ctx.set_line_width(BORDER_WIDTH);
    ctx.stroke();

    let x = spec.center.x;
    let y = spec.center.y;

    ctx.set_font(&theme.font(TITLE_FONT_SIZE, true));
    ctx.set_fill_style(&theme.text_color);
    ctx.set_text_align(TextAlign::Center);
    ctx.fill_text(spec.title, x, y + TITLE_BASELINE_OFFSET);

    if let Some(subtitle) = spec.subtitle.filter(|s| !s.is_empty()) {
        ctx.set_font(&theme.font(SUBTITLE_FONT_SIZE, false));
        ctx.set_fill_style(&theme.muted_text_color);
        ctx.fill_text(subtitle, x, y + SUBTITLE_BASELINE_OFFSET);
    }
}

/// Trace the box outline clockwise from the top edge, one quadratic curve per corner.
fn rounded_rect_path<C: DrawingContext + ?Sized>(ctx: &mut C, spec: &BoxSpec<'_>) {
    let r = CORNER_RADIUS;
    let (left, right) = (spec.left(), spec.right());
    let (top, bottom) = (spec.top(), spec.bottom());

    ctx.begin_path();
    ctx.move_to(left + r, top);
    ctx.line_to(right - r, top);
    ctx.quadratic_curve_to(right, top, right, top + r);
    ctx.line_to(right, bottom - r);
    ctx.quadratic_curve_to(right, bottom, right - r, bottom);
    ctx.line_to(left + r, bottom);
    ctx.quadratic_curve_to(left, bottom, left, bottom - r);
    ctx.line_to(left, top + r);
    ctx.quadratic_curve_to(left, top, left + r, top);
    ctx.close_path();
}
