//! A [`DrawingContext`] that writes an SVG document.
//!
//! Each `fill`, `stroke`, `fill_rect` and `fill_text` becomes one element
//! carrying the style that was current at the time of the call. Visible
//! shadows become `feDropShadow` filters, deduplicated by configuration.

use std::fmt::Write;

use crate::canvas::{DrawingContext, TextAlign};
use crate::font::FontSpec;
use crate::xml::escape_xml;

#[derive(Debug, Clone, PartialEq)]
struct Shadow {
    color: String,
    blur: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Shadow {
    fn is_visible(&self) -> bool {
        let color = self.color.trim();
        let transparent = color.is_empty() || color.eq_ignore_ascii_case("transparent");
        !transparent && (self.blur > 0.0 || self.offset_x != 0.0 || self.offset_y != 0.0)
    }
}

#[derive(Debug, Clone)]
struct State {
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    font: FontSpec,
    text_align: TextAlign,
    shadow: Shadow,
}

impl Default for State {
    fn default() -> Self {
        Self {
            fill_style: "#000".to_string(),
            stroke_style: "#000".to_string(),
            line_width: 1.0,
            font: FontSpec::default(),
            text_align: TextAlign::Start,
            shadow: Shadow {
                color: "transparent".to_string(),
                blur: 0.0,
                offset_x: 0.0,
                offset_y: 0.0,
            },
        }
    }
}

pub struct SvgCanvas {
    width: f64,
    height: f64,
    state: State,
    path: String,
    /// Whether the current path has a subpath that `line_to` can extend
    subpath_open: bool,
    shadows: Vec<Shadow>,
    svg_content: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: State::default(),
            path: String::new(),
            subpath_open: false,
            shadows: Vec::new(),
            svg_content: String::new(),
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let mut defs = String::new();
        if !self.shadows.is_empty() {
            defs.push_str("<defs>");
            for (idx, shadow) in self.shadows.iter().enumerate() {
                let _ = write!(
                    defs,
                    r#"<filter id="shadow-{}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="{:.2}" dy="{:.2}" stdDeviation="{:.2}" flood-color="{}" /></filter>"#,
                    idx,
                    shadow.offset_x,
                    shadow.offset_y,
                    shadow.blur / 2.0,
                    escape_xml(&shadow.color),
                );
            }
            defs.push_str("</defs>");
        }

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">{}{}</svg>"#,
            self.width, self.height, self.width, self.height, defs, self.svg_content,
        )
    }

    /// ` filter="..."` for the current shadow, or nothing when it is invisible.
    fn filter_attr(&mut self) -> String {
        let shadow = &self.state.shadow;
        if !shadow.is_visible() {
            return String::new();
        }

        let idx = match self.shadows.iter().position(|s| s == shadow) {
            Some(idx) => idx,
            None => {
                self.shadows.push(shadow.clone());
                self.shadows.len() - 1
            }
        };
        format!(r#" filter="url(#shadow-{})""#, idx)
    }

    fn push_path_command(&mut self, command: char, coords: &[f64]) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(command);
        for coord in coords {
            let _ = write!(self.path, " {:.2}", coord);
        }
    }
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left | TextAlign::Start => "start",
        TextAlign::Center => "middle",
        TextAlign::Right | TextAlign::End => "end",
    }
}

impl DrawingContext for SvgCanvas {
    fn set_fill_style(&mut self, color: &str) {
        self.state.fill_style = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.stroke_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_font(&mut self, font: &str) {
        if let Some(font) = FontSpec::parse(font) {
            self.state.font = font;
        }
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.state.shadow.color = color.to_string();
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        if blur.is_finite() && blur >= 0.0 {
            self.state.shadow.blur = blur;
        }
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        if offset.is_finite() {
            self.state.shadow.offset_x = offset;
        }
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        if offset.is_finite() {
            self.state.shadow.offset_y = offset;
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let filter = self.filter_attr();
        let _ = write!(
            self.svg_content,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"{} />"#,
            x,
            y,
            width,
            height,
            escape_xml(&self.state.fill_style),
            filter,
        );
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let filter = self.filter_attr();
        let font = &self.state.font;
        let weight_attr = if font.bold { " font-weight=\"700\"" } else { "" };
        let style_attr = if font.italic { " font-style=\"italic\"" } else { "" };

        let _ = write!(
            self.svg_content,
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.2}" fill="{}" text-anchor="{}"{}{}{}>{}</text>"#,
            x,
            y,
            escape_xml(&font.family_with_fallback()),
            font.size,
            escape_xml(&self.state.fill_style),
            text_anchor(self.state.text_align),
            weight_attr,
            style_attr,
            filter,
            escape_xml(text),
        );
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.subpath_open = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_path_command('M', &[x, y]);
        self.subpath_open = true;
    }

    // Without an open subpath, canvas treats the first point as a move.
    fn line_to(&mut self, x: f64, y: f64) {
        if !self.subpath_open {
            self.move_to(x, y);
            return;
        }
        self.push_path_command('L', &[x, y]);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        if !self.subpath_open {
            self.move_to(cpx, cpy);
        }
        self.push_path_command('Q', &[cpx, cpy, x, y]);
    }

    fn close_path(&mut self) {
        if self.subpath_open {
            self.push_path_command('Z', &[]);
        }
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let filter = self.filter_attr();
        let _ = write!(
            self.svg_content,
            r#"<path d="{}" fill="{}"{} />"#,
            self.path,
            escape_xml(&self.state.fill_style),
            filter,
        );
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let filter = self.filter_attr();
        let _ = write!(
            self.svg_content,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.2}"{} />"#,
            self.path,
            escape_xml(&self.state.stroke_style),
            self.state.line_width,
            filter,
        );
    }
}
