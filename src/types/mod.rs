//! Data model: segments, projection triples, and the export table

pub mod projection;
pub mod segment;
pub mod table;

pub use projection::{ProjectionTriple, HORIZONTAL_REF, REFERENCE_SEGMENTS, UNIT_SCALE, VERTICAL_REF};
pub use segment::{LayerSegments, Segment};
pub use table::ExportTable;
