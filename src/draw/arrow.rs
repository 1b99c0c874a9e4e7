use std::f64::consts::FRAC_PI_6;

use log::trace;

use super::types::{ArrowSpec, Point};
use crate::canvas::DrawingContext;
use crate::theme::Theme;

/// Distance from the tip to each trailing arrowhead vertex.
pub const HEAD_LENGTH: f64 = 10.0;
/// Offset of each trailing vertex from the reversed line direction (30 degrees).
pub const HEAD_ANGLE: f64 = FRAC_PI_6;

const LINE_WIDTH: f64 = 1.5;

/// Trailing vertices of the arrowhead whose tip sits at `to`.
pub fn head_points(from: Point, to: Point) -> [Point; 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let barb = |offset: f64| {
        Point::new(
            to.x - HEAD_LENGTH * (angle + offset).cos(),
            to.y - HEAD_LENGTH * (angle + offset).sin(),
        )
    };

    [barb(-HEAD_ANGLE), barb(HEAD_ANGLE)]
}

/// Draw a straight edge with a filled triangular head at its end point.
pub fn draw_arrow<C: DrawingContext + ?Sized>(ctx: &mut C, spec: &ArrowSpec, theme: &Theme) {
    let ArrowSpec { from, to } = *spec;
    trace!("arrow ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);

    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.set_stroke_style(&theme.edge_color);
    ctx.set_line_width(LINE_WIDTH);
    ctx.stroke();

    let [head1, head2] = head_points(from, to);
    ctx.begin_path();
    ctx.move_to(to.x, to.y);
    ctx.line_to(head1.x, head1.y);
    ctx.line_to(head2.x, head2.y);
    ctx.close_path();
    ctx.set_fill_style(&theme.edge_color);
    ctx.fill();
}
