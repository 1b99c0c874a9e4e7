//! Draws a fixed microservice architecture diagram onto any [`DrawingContext`].
//!
//! The renderers only talk to the [`DrawingContext`] trait. [`SvgCanvas`]
//! turns the calls into an SVG document, [`RecordingCanvas`] keeps them as
//! data, and [`export`] converts SVG into PNG or PDF.

pub mod canvas;
pub mod diagram;
pub mod draw;
pub mod error;
pub mod export;
mod font;
pub mod record;
pub mod svg;
pub mod theme;
mod xml;

pub use canvas::{DrawingContext, TextAlign};
pub use diagram::{draw_architecture, draw_architecture_with, render_svg};
pub use error::{Error, Result};
pub use record::{DrawCall, RecordingCanvas};
pub use svg::SvgCanvas;
pub use theme::Theme;
