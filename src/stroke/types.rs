// src/stroke/types.rs
//! Raw pen input as delivered by the capture front ends

use serde::{Deserialize, Serialize};

/// One captured pen event
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Absolute canvas x, in pixels
    #[serde(default)]
    pub x: f64,
    /// Absolute canvas y, in pixels
    #[serde(default)]
    pub y: f64,
    /// x delta from the previous point of the same stroke
    #[serde(default)]
    pub dx: f64,
    /// y delta from the previous point of the same stroke
    #[serde(default)]
    pub dy: f64,
    /// Pen flag, 0 for every current producer
    #[serde(default, rename = "p")]
    pub pen_state: i32,
}

impl Point {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64, pen_state: i32) -> Self {
        Self { x, y, dx, dy, pen_state }
    }

    /// A point with no motion information, as at the start of a stroke
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0, 0)
    }

    /// Channel values in resampler order: `[x, y, dx, dy, pen_state]`
    pub fn channels(&self) -> [f64; 5] {
        [self.x, self.y, self.dx, self.dy, self.pen_state as f64]
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Points between a pen-down and the following pen-up
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a stroke from absolute positions, deriving `dx`/`dy` the way the
    /// capture canvases do
    pub fn from_positions(positions: &[(f64, f64)]) -> Self {
        let mut points = Vec::with_capacity(positions.len());
        let mut last: Option<(f64, f64)> = None;
        for &(x, y) in positions {
            let (dx, dy) = match last {
                Some((lx, ly)) => (x - lx, y - ly),
                None => (0.0, 0.0),
            };
            points.push(Point::new(x, y, dx, dy, 0));
            last = Some((x, y));
        }
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// One attempt at drawing one character, strokes in drawing order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    strokes: Vec<Stroke>,
}

impl Sample {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Parse the wire form: an array of strokes, each an array of point objects
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes as drawn, independent of point counts
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total points across all strokes
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// All points in stroke order then point order; stroke boundaries are lost
    pub fn flattened_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.strokes.iter().flat_map(|stroke| stroke.points.iter())
    }
}

impl From<Vec<Stroke>> for Sample {
    fn from(strokes: Vec<Stroke>) -> Self {
        Self::new(strokes)
    }
}
