mod arrow;
mod component;
mod types;

pub use arrow::{HEAD_ANGLE, HEAD_LENGTH, draw_arrow, head_points};
pub use component::{CORNER_RADIUS, draw_box};
pub use types::{ArrowSpec, BoxSpec, Point};
