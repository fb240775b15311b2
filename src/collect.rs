//! Layer enumeration and per-layer segment collection

use crate::error::Result;
use crate::host::{CadHost, HostIterator, ScopedIterator};
use crate::types::LayerSegments;
use log::debug;

/// Collect the segments of every layer in the document, in layer
/// discovery order.
///
/// Layer indices are zero-based and `0..layer_count` visits every real
/// layer (see [`CadHost::layer_count`]).
pub fn collect_document<C: CadHost>(cad: &C, doc: &C::Document) -> Result<Vec<LayerSegments>> {
    let count = cad.layer_count(doc)?;
    debug!("collecting segments from {} layer(s)", count);
    let mut layers = Vec::with_capacity(count);
    for index in 0..count {
        layers.push(collect_layer(cad, doc, index)?);
    }
    Ok(layers)
}

/// Collect one layer's segments in host traversal order.
///
/// Resolves the layer reference, reads its display name, marks the layer
/// active (the host requires this before object queries), then walks a
/// scoped segment cursor. The cursor is released on every exit path,
/// including early error returns.
pub fn collect_layer<C: CadHost>(
    cad: &C,
    doc: &C::Document,
    index: usize,
) -> Result<LayerSegments> {
    let layer_ref = cad.layer_reference(doc, index)?;
    let name = cad.layer_name(&layer_ref)?;
    cad.select_active_layer(doc, index)?;

    let mut cursor = ScopedIterator::new(cad.segment_iterator(doc, &layer_ref)?);
    let mut layer = LayerSegments::new(name);
    let mut object = cursor.first()?;
    while let Some(obj) = object {
        layer.segments.push(cad.segment_params(&obj)?);
        object = cursor.next()?;
    }
    debug!(
        "layer {} '{}': {} segment(s)",
        index,
        layer.name,
        layer.len()
    );
    Ok(layer)
}
