// Turning raw pointer samples into a smoothed path.
// Visual: wobbly mouse input becomes a clean curved line.

use crate::types::Point;

/// Moves smaller than this on both axes are treated as jitter and dropped.
pub const TOUCH_TOLERANCE: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    QuadTo { ctrl: Point, to: Point },
    LineTo(Point),
}

/// The stroke currently under the finger.
#[derive(Clone, Debug, Default)]
pub struct ActivePath {
    segments: Vec<Segment>,
    last: Option<Point>, // last accepted sample; None when no stroke is in progress
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any previous stroke and start a new one at `p`.
    pub fn start(&mut self, p: Point) {
        self.segments.clear();
        self.segments.push(Segment::MoveTo(p));
        self.last = Some(p);
    }

    /// Feed one pointer sample. Returns true if the path grew.
    ///
    /// The curve goes from the previous sample through the midpoint of the
    /// previous and current samples, so consecutive curves meet smoothly.
    pub fn extend(&mut self, p: Point) -> bool {
        let Some(last) = self.last else { return false };
        let dx = (p.x - last.x).abs();
        let dy = (p.y - last.y).abs();
        if dx < TOUCH_TOLERANCE && dy < TOUCH_TOLERANCE {
            return false;
        }
        self.segments.push(Segment::QuadTo { ctrl: last, to: last.midpoint(p) });
        self.last = Some(p);
        true
    }

    /// Close the stroke with a straight run to the last accepted sample.
    /// Returns false if no stroke was in progress.
    pub fn finish(&mut self) -> bool {
        let Some(last) = self.last.take() else { return false };
        self.segments.push(Segment::LineTo(last));
        true
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.last = None;
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[cfg(test)]
    pub fn last_point(&self) -> Option<Point> {
        self.last
    }

    /// Build the renderable path. None while there is nothing but a cursor move.
    pub fn to_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo(p) => pb.move_to(p.x, p.y),
                Segment::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
                Segment::LineTo(p) => pb.line_to(p.x, p.y),
            }
        }
        pb.finish()
    }
}
