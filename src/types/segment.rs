//! Line segment endpoints as recorded from a CAD layer

/// A line segment defined by two 2D endpoints, in raw CAD length units.
///
/// Immutable once read from the host; the collector owns it for the
/// duration of one layer's traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// X coordinate of the start point
    pub x1: f64,
    /// Y coordinate of the start point
    pub y1: f64,
    /// X coordinate of the end point
    pub x2: f64,
    /// Y coordinate of the end point
    pub y2: f64,
}

impl Segment {
    /// Create a segment from endpoint coordinates
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Segment { x1, y1, x2, y2 }
    }

    /// Signed extent along the x axis
    pub fn dx(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed extent along the y axis
    pub fn dy(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }
}

/// One layer's segments in discovery order, plus the layer's display name.
///
/// Order matters: the reducer dereferences fixed discovery indices.
#[derive(Debug, Clone, Default)]
pub struct LayerSegments {
    /// Layer display name as reported by the host
    pub name: String,
    /// Segments in host traversal order
    pub segments: Vec<Segment>,
}

impl LayerSegments {
    /// Create an empty collection for a named layer
    pub fn new(name: impl Into<String>) -> Self {
        LayerSegments {
            name: name.into(),
            segments: Vec::new(),
        }
    }

    /// Create a collection with pre-recorded segments
    pub fn with_segments(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        LayerSegments {
            name: name.into(),
            segments,
        }
    }

    /// Number of recorded segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check whether no segments were recorded
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_extents() {
        let seg = Segment::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(seg.dx(), 3.0);
        assert_eq!(seg.dy(), 4.0);
        assert_eq!(seg.length(), 5.0);
    }

    #[test]
    fn test_segment_negative_extent() {
        let seg = Segment::new(10.0, 0.0, 2.0, 0.0);
        assert_eq!(seg.dx(), -8.0);
        assert_eq!(seg.length(), 8.0);
    }

    #[test]
    fn test_layer_segments_order_preserved() {
        let layer = LayerSegments::with_segments(
            "Base",
            vec![Segment::new(0.0, 0.0, 0.0, 1.0), Segment::new(0.0, 0.0, 1.0, 0.0)],
        );
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.segments[0].dy(), 1.0);
        assert_eq!(layer.segments[1].dx(), 1.0);
    }
}
