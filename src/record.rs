//! A drawing context that remembers every call instead of rasterizing.
//!
//! Used to assert call sequences in tests and to dump a diagram as JSON.

use serde::Serialize;

use crate::canvas::{DrawingContext, TextAlign};
use crate::error::Result;

/// One operation issued against a [`DrawingContext`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    SetFillStyle { color: String },
    SetStrokeStyle { color: String },
    SetLineWidth { width: f64 },
    SetFont { font: String },
    SetTextAlign { align: TextAlign },
    SetShadowColor { color: String },
    SetShadowBlur { blur: f64 },
    SetShadowOffsetX { offset: f64 },
    SetShadowOffsetY { offset: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cpx: f64, cpy: f64, x: f64, y: f64 },
    ClosePath,
    Fill,
    Stroke,
}

impl DrawCall {
    /// True for style-property mutations, false for drawing operations.
    pub fn is_style(&self) -> bool {
        matches!(
            self,
            DrawCall::SetFillStyle { .. }
                | DrawCall::SetStrokeStyle { .. }
                | DrawCall::SetLineWidth { .. }
                | DrawCall::SetFont { .. }
                | DrawCall::SetTextAlign { .. }
                | DrawCall::SetShadowColor { .. }
                | DrawCall::SetShadowBlur { .. }
                | DrawCall::SetShadowOffsetX { .. }
                | DrawCall::SetShadowOffsetY { .. }
        )
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Recorded calls with style mutations filtered out.
    pub fn drawing_ops(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|call| !call.is_style())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.calls)?)
    }

    fn push(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}

impl DrawingContext for RecordingCanvas {
    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCall::SetFillStyle {
            color: color.to_string(),
        });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCall::SetStrokeStyle {
            color: color.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCall::SetLineWidth { width });
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCall::SetFont {
            font: font.to_string(),
        });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCall::SetTextAlign { align });
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.push(DrawCall::SetShadowColor {
            color: color.to_string(),
        });
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.push(DrawCall::SetShadowBlur { blur });
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        self.push(DrawCall::SetShadowOffsetX { offset });
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        self.push(DrawCall::SetShadowOffsetY { offset });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn begin_path(&mut self) {
        self.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCall::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.push(DrawCall::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn close_path(&mut self) {
        self.push(DrawCall::ClosePath);
    }

    fn fill(&mut self) {
        self.push(DrawCall::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCall::Stroke);
    }
}
