//! # layerproj
//!
//! Extracts per-layer line-segment geometry from the active view of a 2D
//! CAD document and exports each layer's x/y/z projection lengths to a
//! spreadsheet.
//!
//! The CAD and spreadsheet applications are reached through automation
//! adapters ([`CadHost`], [`SpreadsheetHost`]); this crate owns the
//! traversal, reduction, and export semantics, not the host file formats.
//!
//! ## Features
//!
//! - Layer enumeration and ordered per-layer segment collection
//! - Fixed-index projection reduction (vertical/horizontal reference
//!   segments, unit scale 1e-3, 3-decimal rounding)
//! - Atomic export: the sheet is untouched unless every layer reduces
//! - Scoped host iterator cursors, released on every exit path
//! - Session facades with display labels and workbook binding
//! - In-memory hosts for tests and demos
//!
//! ## Quick Start
//!
//! ```rust
//! use layerproj::host::{MemoryCad, MemoryDocument, MemorySheet};
//! use layerproj::{export_active_document, Segment, SpreadsheetHost};
//!
//! let cad = MemoryCad::with_document(
//!     MemoryDocument::new("bracket.cdw").add_layer(
//!         "Contour",
//!         vec![
//!             Segment::new(0.0, 0.0, 0.0, 5000.0),
//!             Segment::new(0.0, 0.0, 3000.0, 2000.0),
//!         ],
//!     ),
//! );
//! let sheets = MemorySheet::new();
//! let workbook = sheets.open_workbook("out.xlsx".as_ref())?;
//! let sheet = sheets.active_sheet(&workbook)?;
//!
//! let table = export_active_document(&cad, &sheets, &sheet)?;
//! assert_eq!(table.get("Contour").unwrap().x, 3.0);
//! # Ok::<(), layerproj::ExportError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod collect;
pub mod error;
pub mod export;
pub mod host;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{ExportError, Result};
pub use types::{
    ExportTable, LayerSegments, ProjectionTriple, Segment, HORIZONTAL_REF, REFERENCE_SEGMENTS,
    UNIT_SCALE, VERTICAL_REF,
};

// Re-export the host seams
pub use host::{CadHost, CellValue, HostIterator, ScopedIterator, SpreadsheetHost};

// Re-export the core entry points
pub use collect::{collect_document, collect_layer};
pub use export::{build_table, export_active_document, write_table};
pub use session::{CadSession, SheetSession, NOT_SELECTED};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
