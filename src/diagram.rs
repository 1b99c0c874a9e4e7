//! The fixed architecture diagram: an over-engineered Hello World deployment.
//!
//! Layout is declarative. [`COMPONENTS`] and [`CONNECTIONS`] hold literal
//! coordinates derived from the 800x600 surface, and one loop per table
//! draws them. Nothing adapts to label length or entry count.

use log::debug;

use crate::canvas::{DrawingContext, TextAlign};
use crate::draw::{ArrowSpec, BoxSpec, Point, draw_arrow, draw_box};
use crate::svg::SvgCanvas;
use crate::theme::Theme;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

pub const TITLE: &str = "Over-Engineered Hello World: System Architecture";
/// Describes patterns named by the deployment docs; nothing here implements them.
pub const FOOTNOTE: &str = "* The system combines circuit breaker, retry, rate limiting and bulkhead patterns for fault tolerance";

const TITLE_FONT_SIZE: f64 = 24.0;
const TITLE_BASELINE: f64 = 40.0;
const FOOTNOTE_FONT_SIZE: f64 = 12.0;
const FOOTNOTE_ORIGIN: Point = Point::new(50.0, 590.0);

const W: f64 = CANVAS_WIDTH;
const CENTER_X: f64 = W / 2.0;
const HELLO_X: f64 = W / 3.0 - 50.0;
const WORLD_X: f64 = W * 2.0 / 3.0 + 50.0;

const CLIENT_Y: f64 = 100.0;
const AGGREGATOR_Y: f64 = 220.0;
const SERVICE_Y: f64 = 340.0;
const STORAGE_Y: f64 = 460.0;
const INFRA_Y: f64 = 530.0;

const fn at(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Every box in draw order.
pub const COMPONENTS: &[BoxSpec<'static>] = &[
    BoxSpec::new(at(CENTER_X, CLIENT_Y), 200.0, 60.0, "#e1f5fe", "CLI Client")
        .with_subtitle("hello-world-client"),
    BoxSpec::new(at(CENTER_X, AGGREGATOR_Y), 280.0, 60.0, "#e8f5e9", "Aggregator Service")
        .with_subtitle("hello-world-aggregator"),
    BoxSpec::new(at(HELLO_X, SERVICE_Y), 200.0, 60.0, "#fff9c4", "Hello Service")
        .with_subtitle("hello-service"),
    BoxSpec::new(at(WORLD_X, SERVICE_Y), 200.0, 60.0, "#ffccbc", "World Service")
        .with_subtitle("world-service"),
    BoxSpec::new(at(HELLO_X, STORAGE_Y), 150.0, 60.0, "#d1c4e9", "PostgreSQL")
        .with_subtitle("Hello data"),
    BoxSpec::new(at(WORLD_X, STORAGE_Y), 150.0, 60.0, "#bbdefb", "MongoDB")
        .with_subtitle("World data"),
    BoxSpec::new(at(CENTER_X, STORAGE_Y), 150.0, 60.0, "#ffecb3", "Redis Cache"),
    BoxSpec::new(at(120.0, INFRA_Y), 100.0, 40.0, "#dcedc8", "Eureka")
        .with_subtitle("Service discovery"),
    BoxSpec::new(at(250.0, INFRA_Y), 100.0, 40.0, "#f8bbd0", "Zipkin")
        .with_subtitle("Tracing"),
    BoxSpec::new(at(380.0, INFRA_Y), 100.0, 40.0, "#b2dfdb", "Kafka")
        .with_subtitle("Message queue"),
    BoxSpec::new(at(510.0, INFRA_Y), 100.0, 40.0, "#d7ccc8", "Prometheus")
        .with_subtitle("Monitoring"),
    BoxSpec::new(at(640.0, INFRA_Y), 100.0, 40.0, "#c5cae9", "Grafana")
        .with_subtitle("Dashboards"),
];

/// Every arrow in draw order.
pub const CONNECTIONS: &[ArrowSpec] = &[
    // client -> aggregator
    ArrowSpec::new(at(CENTER_X, 130.0), at(CENTER_X, 190.0)),
    // aggregator -> services
    ArrowSpec::new(at(CENTER_X - 40.0, 250.0), at(W / 3.0, 320.0)),
    ArrowSpec::new(at(CENTER_X + 40.0, 250.0), at(W * 2.0 / 3.0, 320.0)),
    // services -> datastores
    ArrowSpec::new(at(HELLO_X, 370.0), at(HELLO_X, 430.0)),
    ArrowSpec::new(at(WORLD_X, 370.0), at(WORLD_X, 430.0)),
    // services -> shared cache
    ArrowSpec::new(at(W / 3.0, 370.0), at(CENTER_X - 40.0, 440.0)),
    ArrowSpec::new(at(W * 2.0 / 3.0, 370.0), at(CENTER_X + 40.0, 440.0)),
];

/// Draw the diagram with the default light theme.
pub fn draw_architecture<C: DrawingContext + ?Sized>(ctx: &mut C) {
    draw_architecture_with(ctx, &Theme::default());
}

/// Draw the complete diagram, overwriting the whole 800x600 surface.
pub fn draw_architecture_with<C: DrawingContext + ?Sized>(ctx: &mut C, theme: &Theme) {
    debug!(
        "drawing architecture diagram: {} components, {} connections",
        COMPONENTS.len(),
        CONNECTIONS.len()
    );

    ctx.set_fill_style(&theme.background_color);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    ctx.set_font(&theme.font(TITLE_FONT_SIZE, true));
    ctx.set_fill_style(&theme.heading_color);
    ctx.set_text_align(TextAlign::Center);
    ctx.fill_text(TITLE, CENTER_X, TITLE_BASELINE);

    for component in COMPONENTS {
        draw_box(ctx, component, theme);
    }

    for connection in CONNECTIONS {
        draw_arrow(ctx, connection, theme);
    }

    ctx.set_font(&theme.font(FOOTNOTE_FONT_SIZE, false));
    ctx.set_fill_style(&theme.caption_color);
    ctx.set_text_align(TextAlign::Left);
    ctx.fill_text(FOOTNOTE, FOOTNOTE_ORIGIN.x, FOOTNOTE_ORIGIN.y);
}

/// Render the diagram to a standalone SVG document.
pub fn render_svg(theme: &Theme) -> String {
    let mut canvas = SvgCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    draw_architecture_with(&mut canvas, theme);
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DrawCall, RecordingCanvas};

    fn record() -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        draw_architecture(&mut canvas);
        canvas
    }

    fn count(canvas: &RecordingCanvas, pred: impl Fn(&DrawCall) -> bool) -> usize {
        canvas.calls().iter().filter(|call| pred(*call)).count()
    }

    #[test]
    fn layout_tables_cover_every_component_and_connection() {
        assert_eq!(COMPONENTS.len(), 12);
        assert_eq!(CONNECTIONS.len(), 7);
        assert_eq!(
            COMPONENTS.iter().filter(|c| c.subtitle.is_none()).count(),
            1,
            "only the cache has no subtitle"
        );
    }

    #[test]
    fn first_op_clears_the_whole_surface() {
        let canvas = record();
        assert_eq!(
            canvas.drawing_ops().next(),
            Some(&DrawCall::FillRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn last_op_is_the_left_aligned_footnote() {
        let canvas = record();
        assert_eq!(
            canvas.drawing_ops().last(),
            Some(&DrawCall::FillText {
                text: FOOTNOTE.to_string(),
                x: 50.0,
                y: 590.0
            })
        );

        let last_align = canvas.calls().iter().rev().find_map(|call| match call {
            DrawCall::SetTextAlign { align } => Some(*align),
            _ => None,
        });
        assert_eq!(last_align, Some(TextAlign::Left));
    }

    #[test]
    fn draws_one_box_per_component_and_one_arrow_per_connection() {
        let canvas = record();
        let corners = count(&canvas, |c| matches!(c, DrawCall::QuadraticCurveTo { .. }));
        let fills = count(&canvas, |c| *c == DrawCall::Fill);
        let strokes = count(&canvas, |c| *c == DrawCall::Stroke);

        assert_eq!(corners, COMPONENTS.len() * 4);
        assert_eq!(fills, COMPONENTS.len() + CONNECTIONS.len());
        assert_eq!(strokes, COMPONENTS.len() + CONNECTIONS.len());
    }

    #[test]
    fn text_is_drawn_title_then_boxes_in_table_order_then_footnote() {
        let canvas = record();
        let drawn: Vec<String> = canvas
            .calls()
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();

        let mut expected = vec![TITLE.to_string()];
        for component in COMPONENTS {
            expected.push(component.title.to_string());
            if let Some(subtitle) = component.subtitle {
                expected.push(subtitle.to_string());
            }
        }
        expected.push(FOOTNOTE.to_string());

        assert_eq!(drawn, expected);
    }

    #[test]
    fn redraw_is_deterministic() {
        assert_eq!(record().into_calls(), record().into_calls());
    }

    #[test]
    fn boxes_stay_on_the_surface() {
        for component in COMPONENTS {
            assert!(component.left() >= 0.0, "{}", component.title);
            assert!(component.right() <= CANVAS_WIDTH, "{}", component.title);
            assert!(component.top() >= 0.0, "{}", component.title);
            assert!(component.bottom() <= CANVAS_HEIGHT, "{}", component.title);
        }
    }

    #[test]
    fn theme_colors_reach_background_title_and_caption() {
        let theme = Theme::from_builtin("dark").expect("dark theme");
        let mut canvas = RecordingCanvas::new();
        draw_architecture_with(&mut canvas, &theme);

        let calls = canvas.calls();
        assert_eq!(
            calls[0],
            DrawCall::SetFillStyle {
                color: theme.background_color.clone()
            }
        );
        assert!(calls.contains(&DrawCall::SetFillStyle {
            color: theme.heading_color.clone()
        }));
        assert!(calls.contains(&DrawCall::SetFillStyle {
            color: theme.caption_color.clone()
        }));
    }

    #[test]
    fn footnote_names_every_resilience_pattern() {
        for pattern in ["circuit breaker", "retry", "rate limiting", "bulkhead"] {
            assert!(FOOTNOTE.contains(pattern), "{pattern}");
        }
    }

    #[test]
    fn svg_output_contains_every_label() {
        let svg = render_svg(&Theme::default());
        assert!(svg.starts_with("<svg"));
        for component in COMPONENTS {
            assert!(svg.contains(component.title), "{}", component.title);
        }
    }
}
