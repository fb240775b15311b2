//! In-memory host implementations
//!
//! Stand-ins for the external CAD and spreadsheet automation hosts, used
//! by the integration tests and the demo binary. They model the host
//! quirks the core has to respect: an active-layer selection that gates
//! object queries, one live iterator cursor at a time, and explicit
//! cursor release.

use crate::error::{ExportError, Result};
use crate::host::iterator::HostIterator;
use crate::host::{CadHost, CellValue, SpreadsheetHost};
use crate::types::Segment;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

/// A named layer holding line segments in drawing order
#[derive(Debug, Clone)]
pub struct MemoryLayer {
    /// Layer display name
    pub name: String,
    /// Segments in drawing order
    pub segments: Vec<Segment>,
}

/// A document held by [`MemoryCad`]
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    /// Document display name
    pub name: String,
    /// Active view display name
    pub view: String,
    /// Layers in document order
    pub layers: Vec<MemoryLayer>,
}

impl MemoryDocument {
    /// Create an empty document with a default view name
    pub fn new(name: impl Into<String>) -> Self {
        MemoryDocument {
            name: name.into(),
            view: "Main view".to_string(),
            layers: Vec::new(),
        }
    }

    /// Set the active view name
    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = view.into();
        self
    }

    /// Append a layer with the given segments
    pub fn add_layer(mut self, name: impl Into<String>, segments: Vec<Segment>) -> Self {
        self.layers.push(MemoryLayer {
            name: name.into(),
            segments,
        });
        self
    }
}

/// Resolved layer reference handed back to the core
#[derive(Debug, Clone)]
pub struct MemoryLayerRef {
    index: usize,
    name: String,
    segments: Vec<Segment>,
}

/// In-memory CAD host.
///
/// Enforces the session protocol of the real host: a layer must be
/// selected as active before its segments can be iterated, and only one
/// cursor may be live at a time. Leak detection: a cursor that is never
/// released keeps [`MemoryCad::live_cursors`] non-zero.
#[derive(Debug, Default)]
pub struct MemoryCad {
    document: RefCell<Option<Rc<MemoryDocument>>>,
    visible: Cell<bool>,
    active_layer: Cell<Option<usize>>,
    live_cursors: Rc<Cell<usize>>,
}

impl MemoryCad {
    /// Create a host with no open document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with `document` already open and focused
    pub fn with_document(document: MemoryDocument) -> Self {
        let host = Self::new();
        host.set_document(Some(document));
        host
    }

    /// Replace (or close) the focused document
    pub fn set_document(&self, document: Option<MemoryDocument>) {
        *self.document.borrow_mut() = document.map(Rc::new);
        self.active_layer.set(None);
    }

    /// Whether the host window is visible
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Index of the currently active layer, if any
    pub fn active_layer(&self) -> Option<usize> {
        self.active_layer.get()
    }

    /// Number of cursors created but not yet released
    pub fn live_cursors(&self) -> usize {
        self.live_cursors.get()
    }
}

impl CadHost for MemoryCad {
    type Document = Rc<MemoryDocument>;
    type LayerRef = MemoryLayerRef;
    type ObjectRef = Segment;
    type Iter = MemoryCursor;

    fn ensure_visible(&self) -> Result<()> {
        self.visible.set(true);
        Ok(())
    }

    fn active_document(&self) -> Result<Self::Document> {
        self.document
            .borrow()
            .clone()
            .ok_or_else(|| ExportError::HostUnavailable("no active document".to_string()))
    }

    fn document_name(&self, doc: &Self::Document) -> Result<String> {
        Ok(doc.name.clone())
    }

    fn active_view_name(&self, doc: &Self::Document) -> Result<String> {
        Ok(doc.view.clone())
    }

    fn layer_count(&self, doc: &Self::Document) -> Result<usize> {
        Ok(doc.layers.len())
    }

    fn layer_reference(&self, doc: &Self::Document, index: usize) -> Result<Self::LayerRef> {
        let layer = doc.layers.get(index).ok_or(ExportError::LayerOutOfRange {
            index,
            count: doc.layers.len(),
        })?;
        Ok(MemoryLayerRef {
            index,
            name: layer.name.clone(),
            segments: layer.segments.clone(),
        })
    }

    fn layer_name(&self, layer: &Self::LayerRef) -> Result<String> {
        Ok(layer.name.clone())
    }

    fn select_active_layer(&self, doc: &Self::Document, index: usize) -> Result<()> {
        if index >= doc.layers.len() {
            return Err(ExportError::LayerOutOfRange {
                index,
                count: doc.layers.len(),
            });
        }
        self.active_layer.set(Some(index));
        Ok(())
    }

    fn segment_iterator(&self, _doc: &Self::Document, layer: &Self::LayerRef) -> Result<Self::Iter> {
        if self.active_layer.get() != Some(layer.index) {
            return Err(ExportError::HostUnavailable(format!(
                "layer '{}' is not the active layer",
                layer.name
            )));
        }
        if self.live_cursors.get() > 0 {
            return Err(ExportError::HostUnavailable(
                "another iterator cursor is still live".to_string(),
            ));
        }
        self.live_cursors.set(self.live_cursors.get() + 1);
        Ok(MemoryCursor {
            segments: layer.segments.clone(),
            cursor: 0,
            live: self.live_cursors.clone(),
            released: false,
        })
    }

    fn segment_params(&self, object: &Self::ObjectRef) -> Result<Segment> {
        Ok(*object)
    }
}

/// Cursor over one layer's segments.
///
/// Deliberately has no `Drop` of its own: release happens through
/// [`ScopedIterator`](crate::host::ScopedIterator), and a cursor dropped
/// without one shows up as a leak in [`MemoryCad::live_cursors`].
#[derive(Debug)]
pub struct MemoryCursor {
    segments: Vec<Segment>,
    cursor: usize,
    live: Rc<Cell<usize>>,
    released: bool,
}

impl HostIterator for MemoryCursor {
    type ObjectRef = Segment;

    fn first(&mut self) -> Result<Option<Segment>> {
        self.cursor = 1;
        Ok(self.segments.first().copied())
    }

    fn next(&mut self) -> Result<Option<Segment>> {
        let item = self.segments.get(self.cursor).copied();
        self.cursor += 1;
        Ok(item)
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.live.set(self.live.get().saturating_sub(1));
        }
    }
}

/// Workbook handle held by [`MemorySheet`]
#[derive(Debug, Clone)]
pub struct MemoryWorkbook {
    /// Workbook display name (file name of the opened path)
    pub name: String,
}

/// Worksheet handle; the in-memory host has a single active sheet
#[derive(Debug, Clone, Copy)]
pub struct MemorySheetRef;

/// In-memory spreadsheet host backed by a sparse cell grid.
#[derive(Debug, Default)]
pub struct MemorySheet {
    visible: Cell<bool>,
    cells: RefCell<BTreeMap<(u32, u32), CellValue>>,
}

impl MemorySheet {
    /// Create a host with an empty active sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the host window is visible
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Read back a written cell
    pub fn cell(&self, row: u32, col: u32) -> Option<CellValue> {
        self.cells.borrow().get(&(row, col)).cloned()
    }

    /// Number of cells written so far
    pub fn cell_count(&self) -> usize {
        self.cells.borrow().len()
    }

    /// All written cells in (row, col) order
    pub fn cells(&self) -> Vec<((u32, u32), CellValue)> {
        self.cells
            .borrow()
            .iter()
            .map(|(pos, value)| (*pos, value.clone()))
            .collect()
    }
}

impl SpreadsheetHost for MemorySheet {
    type Workbook = Rc<MemoryWorkbook>;
    type Sheet = MemorySheetRef;

    fn ensure_visible(&self) -> Result<()> {
        self.visible.set(true);
        Ok(())
    }

    fn open_workbook(&self, path: &Path) -> Result<Self::Workbook> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ExportError::HostUnavailable(format!("cannot open workbook at {}", path.display()))
            })?;
        Ok(Rc::new(MemoryWorkbook { name }))
    }

    fn workbook_name(&self, workbook: &Self::Workbook) -> Result<String> {
        Ok(workbook.name.clone())
    }

    fn active_sheet(&self, _workbook: &Self::Workbook) -> Result<Self::Sheet> {
        Ok(MemorySheetRef)
    }

    fn write_cell(&self, _sheet: &Self::Sheet, row: u32, col: u32, value: CellValue) -> Result<()> {
        if row == 0 || col == 0 {
            return Err(ExportError::Custom(format!(
                "cell addresses are 1-based, got ({}, {})",
                row, col
            )));
        }
        self.cells.borrow_mut().insert((row, col), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScopedIterator;

    fn two_layer_doc() -> MemoryDocument {
        MemoryDocument::new("bracket.cdw")
            .add_layer("Base", vec![Segment::new(0.0, 0.0, 0.0, 10.0)])
            .add_layer("Top", vec![])
    }

    #[test]
    fn test_layer_count_matches_layers() {
        let cad = MemoryCad::with_document(two_layer_doc());
        let doc = cad.active_document().unwrap();
        assert_eq!(cad.layer_count(&doc).unwrap(), 2);
    }

    #[test]
    fn test_no_document_is_unavailable() {
        let cad = MemoryCad::new();
        assert!(matches!(
            cad.active_document(),
            Err(ExportError::HostUnavailable(_))
        ));
    }

    #[test]
    fn test_iterator_requires_active_layer() {
        let cad = MemoryCad::with_document(two_layer_doc());
        let doc = cad.active_document().unwrap();
        let layer = cad.layer_reference(&doc, 0).unwrap();
        assert!(cad.segment_iterator(&doc, &layer).is_err());

        cad.select_active_layer(&doc, 0).unwrap();
        assert!(cad.segment_iterator(&doc, &layer).is_ok());
    }

    #[test]
    fn test_second_live_cursor_rejected() {
        let cad = MemoryCad::with_document(two_layer_doc());
        let doc = cad.active_document().unwrap();
        let layer = cad.layer_reference(&doc, 0).unwrap();
        cad.select_active_layer(&doc, 0).unwrap();

        let guard = ScopedIterator::new(cad.segment_iterator(&doc, &layer).unwrap());
        assert!(cad.segment_iterator(&doc, &layer).is_err());
        drop(guard);
        assert_eq!(cad.live_cursors(), 0);
        assert!(cad.segment_iterator(&doc, &layer).is_ok());
    }

    #[test]
    fn test_cursor_walk_order() {
        let cad = MemoryCad::with_document(
            MemoryDocument::new("walk.cdw").add_layer(
                "L",
                vec![
                    Segment::new(0.0, 0.0, 1.0, 0.0),
                    Segment::new(0.0, 0.0, 2.0, 0.0),
                    Segment::new(0.0, 0.0, 3.0, 0.0),
                ],
            ),
        );
        let doc = cad.active_document().unwrap();
        let layer = cad.layer_reference(&doc, 0).unwrap();
        cad.select_active_layer(&doc, 0).unwrap();

        let mut iter = ScopedIterator::new(cad.segment_iterator(&doc, &layer).unwrap());
        let mut seen = Vec::new();
        let mut object = iter.first().unwrap();
        while let Some(obj) = object {
            seen.push(cad.segment_params(&obj).unwrap().dx());
            object = iter.next().unwrap();
        }
        assert_eq!(seen, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sheet_write_and_read_back() {
        let sheets = MemorySheet::new();
        let workbook = sheets.open_workbook(Path::new("/tmp/out.xlsx")).unwrap();
        assert_eq!(sheets.workbook_name(&workbook).unwrap(), "out.xlsx");

        let sheet = sheets.active_sheet(&workbook).unwrap();
        sheets.write_cell(&sheet, 2, 1, "Base".into()).unwrap();
        sheets.write_cell(&sheet, 2, 2, 3.5.into()).unwrap();
        assert_eq!(sheets.cell(2, 1), Some(CellValue::Text("Base".to_string())));
        assert_eq!(sheets.cell(2, 2), Some(CellValue::Number(3.5)));
        assert_eq!(sheets.cell_count(), 2);
    }

    #[test]
    fn test_sheet_rejects_zero_based_address() {
        let sheets = MemorySheet::new();
        let workbook = sheets.open_workbook(Path::new("a.xlsx")).unwrap();
        let sheet = sheets.active_sheet(&workbook).unwrap();
        assert!(sheets.write_cell(&sheet, 0, 1, "x".into()).is_err());
    }
}
