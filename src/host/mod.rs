//! Host adapter traits for the CAD and spreadsheet automation sessions
//!
//! Every call into either host is a blocking automation call against
//! process-wide session state (active document, active layer, active
//! sheet). The traits keep that state behind an explicit host value passed
//! by reference; the core holds no globals of its own.

use crate::error::Result;
use crate::types::Segment;
use std::fmt;
use std::path::Path;

pub mod iterator;
pub mod memory;

pub use iterator::{HostIterator, ScopedIterator};
pub use memory::{MemoryCad, MemoryDocument, MemoryLayer, MemorySheet};

/// Adapter over the CAD automation host.
///
/// Handle types are host-native references; the core never inspects them
/// beyond passing them back into the adapter.
pub trait CadHost {
    /// Host-native document handle
    type Document;
    /// Host-native layer reference
    type LayerRef;
    /// Host-native drawing-object reference
    type ObjectRef;
    /// Host-side iterator over line-segment objects
    type Iter: HostIterator<ObjectRef = Self::ObjectRef>;

    /// Make the host application visible if it is not already
    fn ensure_visible(&self) -> Result<()>;

    /// Handle to the document currently focused in the host
    fn active_document(&self) -> Result<Self::Document>;

    /// Display name of a document
    fn document_name(&self, doc: &Self::Document) -> Result<String>;

    /// Display name of the document's active view
    fn active_view_name(&self, doc: &Self::Document) -> Result<String>;

    /// Number of layers in the document.
    ///
    /// Zero-based, inclusive count of actual layers: callers iterate
    /// `0..count` and visit every real layer. Adapters over hosts with a
    /// different native counting convention translate internally.
    fn layer_count(&self, doc: &Self::Document) -> Result<usize>;

    /// Resolve the native reference for the layer at `index`
    fn layer_reference(&self, doc: &Self::Document, index: usize) -> Result<Self::LayerRef>;

    /// Display name of a layer
    fn layer_name(&self, layer: &Self::LayerRef) -> Result<String>;

    /// Mark the layer at `index` as the active drawing layer.
    ///
    /// The host requires this before object queries on the layer are
    /// valid.
    fn select_active_layer(&self, doc: &Self::Document, index: usize) -> Result<()>;

    /// Create a host iterator over the line-segment objects of `layer`.
    ///
    /// The host supports one live iterator at a time; wrap the result in
    /// a [`ScopedIterator`] so it is released on every exit path.
    fn segment_iterator(&self, doc: &Self::Document, layer: &Self::LayerRef) -> Result<Self::Iter>;

    /// Read the endpoint parameter block of a line-segment object
    fn segment_params(&self, object: &Self::ObjectRef) -> Result<Segment>;
}

/// Adapter over the spreadsheet automation host.
pub trait SpreadsheetHost {
    /// Host-native workbook handle
    type Workbook;
    /// Host-native worksheet handle
    type Sheet;

    /// Make the host application visible if it is not already
    fn ensure_visible(&self) -> Result<()>;

    /// Open the workbook at `path` and return its handle
    fn open_workbook(&self, path: &Path) -> Result<Self::Workbook>;

    /// Display name of a workbook
    fn workbook_name(&self, workbook: &Self::Workbook) -> Result<String>;

    /// Handle to the workbook's active worksheet
    fn active_sheet(&self, workbook: &Self::Workbook) -> Result<Self::Sheet>;

    /// Write one cell. `row` and `col` are 1-based, matching the host's
    /// cell addressing.
    fn write_cell(&self, sheet: &Self::Sheet, row: u32, col: u32, value: CellValue) -> Result<()>;
}

/// Value written into a spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text cell (layer names)
    Text(String),
    /// Numeric cell (projection lengths)
    Number(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}
