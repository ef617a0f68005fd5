//! Core geometry types for pattex.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = small stack values copy implicitly
//! - `PartialEq` = can compare with `==`
//!
//! Pattern generators never touch pixels. They return a list of [`Mark`]s
//! in surface coordinates (origin top-left, y down) and the surface
//! rasterizes them. That keeps tiling rules testable as plain numbers.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One ink primitive produced by a pattern generator.
///
/// ## Rust Lesson #8: Enums with Data
///
/// Each variant carries exactly the numbers it needs. A `match` on a
/// `Mark` must handle every variant, so adding a shape forces the
/// rasterizer to learn it.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Filled circle.
    Disc { center: Point, radius: f64 },
    /// Filled axis-aligned rectangle (x, y = top-left corner).
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Filled closed polygon.
    Polygon(Vec<Point>),
    /// Stroked segment; width comes from the pattern's line width.
    Stroke(Line),
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl Mark {
    /// Bounding box as (min_x, min_y, max_x, max_y), ignoring stroke width.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Mark::Disc { center, radius } => (
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            Mark::Rect { x, y, width, height } => (*x, *y, x + width, y + height),
            Mark::Polygon(points) => {
                let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
                let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
                let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
                let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
                (min_x, min_y, max_x, max_y)
            }
            Mark::Stroke(line) => (
                line.x1.min(line.x2),
                line.y1.min(line.y2),
                line.x1.max(line.x2),
                line.y1.max(line.y2),
            ),
        }
    }

    /// Does any part of this mark overlap the `width`×`height` canvas?
    pub fn touches_canvas(&self, width: f64, height: f64) -> bool {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        max_x >= 0.0 && max_y >= 0.0 && min_x <= width && min_y <= height
    }
}

// ============================================================================
// TESTS
// ============================================================================
