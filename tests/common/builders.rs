//! Test document builders shared across the integration suite.
//!
//! Drawings here follow the reference-segment convention the reducer
//! expects: the first segment on a layer is the vertical reference, the
//! second the horizontal/depth reference.

#![allow(dead_code)]

use layerproj::host::{MemoryCad, MemoryDocument, MemorySheet};
use layerproj::{Segment, SpreadsheetHost};

/// A layer whose references reduce to x=3.0, y=5.0, z=2.0
pub fn reference_segments() -> Vec<Segment> {
    vec![
        Segment::new(0.0, 0.0, 0.0, 5000.0),
        Segment::new(0.0, 0.0, 3000.0, 2000.0),
    ]
}

/// A layer reducing to the given whole-unit extents (inputs are raw CAD
/// units, outputs come back scaled by 1e-3)
pub fn layer_with_extents(x: f64, y: f64, z: f64) -> Vec<Segment> {
    vec![
        Segment::new(0.0, 0.0, 0.0, y * 1000.0),
        Segment::new(0.0, 0.0, x * 1000.0, z * 1000.0),
    ]
}

/// Three-layer document with names deliberately out of sort order
pub fn three_layer_document() -> MemoryDocument {
    MemoryDocument::new("parts.cdw")
        .with_view("Front view")
        .add_layer("Zulu", layer_with_extents(1.0, 2.0, 3.0))
        .add_layer("Alpha", layer_with_extents(4.0, 5.0, 6.0))
        .add_layer("Mike", layer_with_extents(7.0, 8.0, 9.0))
}

/// A CAD host focused on `document`
pub fn cad_with(document: MemoryDocument) -> MemoryCad {
    MemoryCad::with_document(document)
}

/// A spreadsheet host's bound workbook and active sheet
pub fn open_sheet(sheets: &MemorySheet) -> <MemorySheet as SpreadsheetHost>::Sheet {
    let workbook = sheets
        .open_workbook("fixture.xlsx".as_ref())
        .expect("open workbook");
    sheets.active_sheet(&workbook).expect("active sheet")
}
