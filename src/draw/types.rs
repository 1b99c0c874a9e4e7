/// A coordinate in surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A rounded box, described by its center rather than its corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec<'a> {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// CSS fill color
    pub fill: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
}

impl<'a> BoxSpec<'a> {
    pub const fn new(
        center: Point,
        width: f64,
        height: f64,
        fill: &'a str,
        title: &'a str,
    ) -> Self {
        Self {
            center,
            width,
            height,
            fill,
            title,
            subtitle: None,
        }
    }

    pub const fn with_subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.height / 2.0
    }
}

/// A directed connection; the head is drawn at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSpec {
    pub from: Point,
    pub to: Point,
}

impl ArrowSpec {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}
