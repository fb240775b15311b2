//! Projection reduction: one layer's segments down to three scalar lengths
//!
//! The source drawings follow a fixed convention: the first segment recorded
//! on a layer is the vertical reference (it supplies the y extent), the
//! second is the horizontal/depth reference (it supplies the x extent and,
//! through its y extent, the z value). This is a drawing-authoring
//! convention, not a geometric property; the indices below encode it and
//! must not be generalized to arbitrary segment order.

use crate::error::{ExportError, Result};
use crate::types::segment::LayerSegments;

/// Discovery index of the vertical reference segment (supplies y)
pub const VERTICAL_REF: usize = 0;

/// Discovery index of the horizontal/depth reference segment (supplies x and z)
pub const HORIZONTAL_REF: usize = 1;

/// Number of segments the reduction rule dereferences
pub const REFERENCE_SEGMENTS: usize = 2;

/// Scale from raw CAD length units to exported units
pub const UNIT_SCALE: f64 = 1e-3;

/// Three non-negative projection lengths derived from a layer's
/// reference segments, in document-length-units x 10^-3, rounded to
/// 3 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionTriple {
    /// X projection, from the horizontal reference's x extent
    pub x: f64,
    /// Y projection, from the vertical reference's y extent
    pub y: f64,
    /// Z projection, from the horizontal reference's y extent
    pub z: f64,
}

impl ProjectionTriple {
    /// Reduce one layer's segments to its projection triple.
    ///
    /// Fails with [`ExportError::MissingGeometry`] when the layer holds
    /// fewer than [`REFERENCE_SEGMENTS`] segments; callers must treat that
    /// as fatal for the whole export, not just this layer.
    pub fn reduce(layer: &LayerSegments) -> Result<Self> {
        if layer.segments.len() < REFERENCE_SEGMENTS {
            return Err(ExportError::MissingGeometry {
                layer: layer.name.clone(),
                found: layer.segments.len(),
                needed: REFERENCE_SEGMENTS,
            });
        }
        let vertical = &layer.segments[VERTICAL_REF];
        let horizontal = &layer.segments[HORIZONTAL_REF];
        Ok(ProjectionTriple {
            x: project(horizontal.dx()),
            y: project(vertical.dy()),
            z: project(horizontal.dy()),
        })
    }
}

/// Scale a raw coordinate delta to exported units, round, take the
/// absolute value. Scale-then-round order matches the source convention.
fn project(delta: f64) -> f64 {
    round3(delta * UNIT_SCALE).abs()
}

/// Round to 3 decimal places, half away from zero.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::segment::Segment;

    fn layer(segments: Vec<Segment>) -> LayerSegments {
        LayerSegments::with_segments("Test", segments)
    }

    #[test]
    fn test_reduce_reference_layout() {
        // Vertical reference first, horizontal/depth reference second.
        let triple = ProjectionTriple::reduce(&layer(vec![
            Segment::new(0.0, 0.0, 0.0, 5000.0),
            Segment::new(0.0, 0.0, 3000.0, 2000.0),
        ]))
        .unwrap();
        assert_eq!(triple.x, 3.0);
        assert_eq!(triple.y, 5.0);
        assert_eq!(triple.z, 2.0);
    }

    #[test]
    fn test_reduce_negative_extents_absolute() {
        let triple = ProjectionTriple::reduce(&layer(vec![
            Segment::new(0.0, 4000.0, 0.0, 0.0),
            Segment::new(2500.0, 1500.0, 0.0, 0.0),
        ]))
        .unwrap();
        assert_eq!(triple.x, 2.5);
        assert_eq!(triple.y, 4.0);
        assert_eq!(triple.z, 1.5);
    }

    #[test]
    fn test_reduce_rounds_to_three_decimals() {
        let triple = ProjectionTriple::reduce(&layer(vec![
            Segment::new(0.0, 0.0, 0.0, 1.2345),
            Segment::new(0.0, 0.0, 1.2344, 0.6),
        ]))
        .unwrap();
        // 1.2344 * 1e-3 = 0.0012344 -> 0.001
        assert_eq!(triple.x, 0.001);
        assert_eq!(triple.y, 0.001);
        assert_eq!(triple.z, 0.001);
    }

    #[test]
    fn test_reduce_ignores_extra_segments() {
        let triple = ProjectionTriple::reduce(&layer(vec![
            Segment::new(0.0, 0.0, 0.0, 1000.0),
            Segment::new(0.0, 0.0, 2000.0, 0.0),
            Segment::new(9.0, 9.0, 99.0, 99.0),
        ]))
        .unwrap();
        assert_eq!(triple.x, 2.0);
        assert_eq!(triple.y, 1.0);
        assert_eq!(triple.z, 0.0);
    }

    #[test]
    fn test_reduce_empty_layer_fails() {
        let err = ProjectionTriple::reduce(&layer(vec![])).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingGeometry { found: 0, needed: 2, .. }
        ));
    }

    #[test]
    fn test_reduce_single_segment_fails() {
        let err =
            ProjectionTriple::reduce(&layer(vec![Segment::new(0.0, 0.0, 1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, ExportError::MissingGeometry { found: 1, .. }));
    }
}
