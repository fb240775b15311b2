//! Export orchestration: collect, reduce, assemble, write
//!
//! The spreadsheet is only touched after the whole table has been
//! assembled, so a reduction failure on any layer aborts the export with
//! zero cells written.

use crate::collect::collect_document;
use crate::error::Result;
use crate::host::{CadHost, SpreadsheetHost};
use crate::types::{ExportTable, ProjectionTriple};
use log::{debug, info};

/// First spreadsheet row that receives layer data (row 1 is left for
/// headings)
pub const START_ROW: u32 = 2;

/// 1-based columns for layer name and the x/y/z projections
pub const NAME_COL: u32 = 1;

/// Build the complete export table for a document, or fail before any
/// output is produced.
pub fn build_table<C: CadHost>(cad: &C, doc: &C::Document) -> Result<ExportTable> {
    let layers = collect_document(cad, doc)?;
    let mut table = ExportTable::new();
    for layer in &layers {
        let triple = ProjectionTriple::reduce(layer)?;
        debug!(
            "layer '{}': x={} y={} z={}",
            layer.name, triple.x, triple.y, triple.z
        );
        table.insert(layer.name.clone(), triple);
    }
    Ok(table)
}

/// Write a table to the active sheet: one row per layer starting at
/// [`START_ROW`], layer name in column 1, x/y/z in columns 2-4, rows in
/// table iteration order.
pub fn write_table<S: SpreadsheetHost>(
    sheets: &S,
    sheet: &S::Sheet,
    table: &ExportTable,
) -> Result<()> {
    for (offset, (name, triple)) in table.iter().enumerate() {
        let row = START_ROW + offset as u32;
        sheets.write_cell(sheet, row, NAME_COL, name.into())?;
        sheets.write_cell(sheet, row, NAME_COL + 1, triple.x.into())?;
        sheets.write_cell(sheet, row, NAME_COL + 2, triple.y.into())?;
        sheets.write_cell(sheet, row, NAME_COL + 3, triple.z.into())?;
    }
    Ok(())
}

/// Run one complete export: active document in, populated sheet out.
///
/// Returns the table that was written. Any error leaves the sheet
/// untouched.
pub fn export_active_document<C, S>(
    cad: &C,
    sheets: &S,
    sheet: &S::Sheet,
) -> Result<ExportTable>
where
    C: CadHost,
    S: SpreadsheetHost,
{
    let doc = cad.active_document()?;
    let table = build_table(cad, &doc)?;
    write_table(sheets, sheet, &table)?;
    info!("exported {} layer(s)", table.len());
    Ok(table)
}
