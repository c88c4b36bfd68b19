// src/stroke/recorder.rs
//! Capture-side stroke recorder
//!
//! Turns pen-down / motion / pen-up events into a [`Sample`] with the same
//! delta convention every capture front end uses: the first point of a stroke
//! carries zero deltas, later points carry the difference from the previous
//! recorded position.

use super::types::{Point, Sample, Stroke};

#[derive(Debug, Default)]
pub struct StrokeRecorder {
    strokes: Vec<Stroke>,
    current: Vec<Point>,
    last: Option<(f64, f64)>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pen down. Any unfinished stroke is discarded.
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        self.current.clear();
        self.current.push(Point::at(x, y));
        self.last = Some((x, y));
    }

    /// Pen motion; ignored while the pen is up
    pub fn extend_stroke(&mut self, x: f64, y: f64) {
        let Some((last_x, last_y)) = self.last else {
            return;
        };
        self.current.push(Point::new(x, y, x - last_x, y - last_y, 0));
        self.last = Some((x, y));
    }

    /// Pen up. Commits the stroke when it holds at least one point.
    pub fn end_stroke(&mut self) {
        if !self.current.is_empty() {
            self.strokes.push(Stroke::new(std::mem::take(&mut self.current)));
        }
        self.last = None;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current.clear();
        self.last = None;
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_drawing(&self) -> bool {
        self.last.is_some()
    }

    /// Committed strokes so far; an in-progress stroke is not included
    pub fn finish(self) -> Sample {
        Sample::new(self.strokes)
    }
}
