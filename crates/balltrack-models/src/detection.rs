//! Ball detections reported by the vision feed.

/// One ball position with its confidence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// X position in field coordinates (mm, origin at field center)
    pub x: f64,
    /// Y position in field coordinates (mm, origin at field center)
    pub y: f64,
    /// Detection confidence [0, 1]
    pub confidence: f64,
}

impl Detection {
    /// Create a new detection.
    pub fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// Get the position as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
