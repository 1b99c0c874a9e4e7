//! The drawing-context capability every renderer in this crate targets.
//!
//! The operation set mirrors an HTML canvas 2D context: mutable style
//! properties plus path construction, fill, stroke and text. Colors and
//! fonts are CSS strings, so any 2D binding can interpret them.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment relative to the `fill_text` anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
    #[default]
    Start,
    End,
}

/// A stateful 2D surface.
///
/// Style setters change the state used by subsequent drawing operations.
/// Path operations build a single current path that `fill` and `stroke`
/// consume without clearing it; only `begin_path` starts a new one.
pub trait DrawingContext {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_shadow_color(&mut self, color: &str);
    fn set_shadow_blur(&mut self, blur: f64);
    fn set_shadow_offset_x(&mut self, offset: f64);
    fn set_shadow_offset_y(&mut self, offset: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}
