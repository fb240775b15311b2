//! Export table: projection triples keyed by layer name

use crate::types::projection::ProjectionTriple;
use indexmap::IndexMap;

/// Mapping from layer name to projection triple, in layer discovery order.
///
/// Created fresh per export invocation and consumed immediately by the
/// spreadsheet writer. A layer-name collision silently overwrites the
/// earlier entry while keeping its original position, so row order stays
/// stable across duplicates.
#[derive(Debug, Clone, Default)]
pub struct ExportTable {
    entries: IndexMap<String, ProjectionTriple>,
}

impl ExportTable {
    /// Create an empty table
    pub fn new() -> Self {
        ExportTable {
            entries: IndexMap::new(),
        }
    }

    /// Insert a layer's triple, overwriting any earlier entry of the
    /// same name
    pub fn insert(&mut self, layer: impl Into<String>, triple: ProjectionTriple) {
        self.entries.insert(layer.into(), triple);
    }

    /// Look up a layer's triple by name
    pub fn get(&self, layer: &str) -> Option<&ProjectionTriple> {
        self.entries.get(layer)
    }

    /// Number of layers in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion (layer discovery) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectionTriple)> {
        self.entries.iter().map(|(name, triple)| (name.as_str(), triple))
    }
}
