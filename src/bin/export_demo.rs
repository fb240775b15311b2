/// Demo tool: runs a full export against the in-memory hosts and prints
/// the resulting sheet.
///
/// Usage:
///     cargo run --bin export_demo
///     cargo run --bin export_demo -- <workbook_name.xlsx>
use anyhow::Result;
use layerproj::host::{MemoryCad, MemoryDocument, MemorySheet};
use layerproj::{session, CadSession, Segment, SheetSession};
use std::env;
use std::path::Path;

fn demo_document() -> MemoryDocument {
    MemoryDocument::new("bracket-assembly.cdw")
        .with_view("Front view")
        .add_layer(
            "Contour",
            vec![
                Segment::new(0.0, 0.0, 0.0, 5000.0),
                Segment::new(0.0, 0.0, 3000.0, 2000.0),
            ],
        )
        .add_layer(
            "Rib",
            vec![
                Segment::new(100.0, 0.0, 100.0, 1250.0),
                Segment::new(100.0, 0.0, 850.0, 400.0),
            ],
        )
        .add_layer(
            "Flange",
            vec![
                Segment::new(0.0, 200.0, 0.0, 3600.0),
                Segment::new(0.0, 200.0, 1200.0, 950.0),
            ],
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let workbook_path = env::args().nth(1).unwrap_or_else(|| "demo.xlsx".to_string());

    let cad = CadSession::open(MemoryCad::with_document(demo_document()))?;
    let mut sheets = SheetSession::open(MemorySheet::new())?;
    sheets.bind_workbook(Some(Path::new(&workbook_path)))?;

    println!("document: {}", cad.document_label());
    println!("view:     {}", cad.view_label());
    println!("workbook: {}", sheets.workbook_label());
    println!();

    let table = session::export(&cad, &sheets)?;

    println!("{:<12} {:>8} {:>8} {:>8}", "layer", "x", "y", "z");
    for (name, triple) in table.iter() {
        println!("{:<12} {:>8} {:>8} {:>8}", name, triple.x, triple.y, triple.z);
    }
    println!();
    println!("cells written: {}", sheets.host().cell_count());

    Ok(())
}
