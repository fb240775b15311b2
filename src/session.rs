//! Session facades over the two hosts
//!
//! [`CadSession`] and [`SheetSession`] hold the currently bound document
//! and workbook handles and answer the informational queries a shell
//! displays: document/view/workbook labels with placeholder fallbacks,
//! document refresh, and workbook binding from a user-chosen path.
//! Informational calls recover from host unavailability locally by
//! substituting a placeholder; the export path does not.

use crate::error::{ExportError, Result};
use crate::export;
use crate::host::{CadHost, SpreadsheetHost};
use crate::types::ExportTable;
use log::debug;
use std::path::Path;

/// Placeholder label when no document, view, or workbook is bound
pub const NOT_SELECTED: &str = "not selected";

/// Labels longer than this many characters get abbreviated
const LABEL_MAX: usize = 10;

/// Session over the CAD host, tracking the bound document.
pub struct CadSession<C: CadHost> {
    host: C,
    document: Option<C::Document>,
}

impl<C: CadHost> CadSession<C> {
    /// Open a session: make the host visible and bind whatever document
    /// is currently active (possibly none).
    pub fn open(host: C) -> Result<Self> {
        host.ensure_visible()?;
        let mut session = CadSession {
            host,
            document: None,
        };
        session.reload_document();
        Ok(session)
    }

    /// Re-bind the active document, dropping the previous binding.
    ///
    /// A host with no focused document leaves the session unbound; the
    /// labels then show the placeholder.
    pub fn reload_document(&mut self) {
        self.document = self.host.active_document().ok();
        debug!(
            "document binding {}",
            if self.document.is_some() { "set" } else { "cleared" }
        );
    }

    /// The bound document handle, if any
    pub fn document(&self) -> Option<&C::Document> {
        self.document.as_ref()
    }

    /// Borrow the underlying host adapter
    pub fn host(&self) -> &C {
        &self.host
    }

    /// Display label for the bound document, abbreviated for narrow
    /// labels
    pub fn document_label(&self) -> String {
        match &self.document {
            Some(doc) => match self.host.document_name(doc) {
                Ok(name) => abbreviate(&name, 4),
                Err(_) => NOT_SELECTED.to_string(),
            },
            None => NOT_SELECTED.to_string(),
        }
    }

    /// Display label for the document's active view
    pub fn view_label(&self) -> String {
        match &self.document {
            Some(doc) => self
                .host
                .active_view_name(doc)
                .unwrap_or_else(|_| NOT_SELECTED.to_string()),
            None => NOT_SELECTED.to_string(),
        }
    }
}

/// Session over the spreadsheet host, tracking the bound workbook.
pub struct SheetSession<S: SpreadsheetHost> {
    host: S,
    workbook: Option<S::Workbook>,
}

impl<S: SpreadsheetHost> SheetSession<S> {
    /// Open a session with no workbook bound yet
    pub fn open(host: S) -> Result<Self> {
        host.ensure_visible()?;
        Ok(SheetSession {
            host,
            workbook: None,
        })
    }

    /// Bind the workbook at `path`.
    ///
    /// `None` means the user cancelled the file dialog: a no-op that
    /// keeps the previous binding. Returns whether the binding changed.
    pub fn bind_workbook(&mut self, path: Option<&Path>) -> Result<bool> {
        let Some(path) = path else {
            debug!("workbook selection cancelled, keeping current binding");
            return Ok(false);
        };
        self.workbook = Some(self.host.open_workbook(path)?);
        Ok(true)
    }

    /// The bound workbook handle, if any
    pub fn workbook(&self) -> Option<&S::Workbook> {
        self.workbook.as_ref()
    }

    /// Borrow the underlying host adapter
    pub fn host(&self) -> &S {
        &self.host
    }

    /// Display label for the bound workbook
    pub fn workbook_label(&self) -> String {
        match &self.workbook {
            Some(workbook) => match self.host.workbook_name(workbook) {
                Ok(name) => abbreviate(&name, 5),
                Err(_) => NOT_SELECTED.to_string(),
            },
            None => NOT_SELECTED.to_string(),
        }
    }

    /// Active sheet of the bound workbook, or `HostUnavailable` when
    /// nothing is bound
    pub fn active_sheet(&self) -> Result<S::Sheet> {
        let workbook = self
            .workbook
            .as_ref()
            .ok_or_else(|| ExportError::HostUnavailable("no workbook bound".to_string()))?;
        self.host.active_sheet(workbook)
    }
}

/// Run one export from a CAD session into a sheet session.
///
/// Hard-fails with `HostUnavailable` when no document or workbook is
/// bound; geometry errors abort atomically before any cell is written.
pub fn export<C, S>(cad: &CadSession<C>, sheets: &SheetSession<S>) -> Result<ExportTable>
where
    C: CadHost,
    S: SpreadsheetHost,
{
    let doc = cad
        .document()
        .ok_or_else(|| ExportError::HostUnavailable("no document bound".to_string()))?;
    let sheet = sheets.active_sheet()?;
    let table = export::build_table(cad.host(), doc)?;
    export::write_table(sheets.host(), &sheet, &table)?;
    Ok(table)
}

/// Abbreviate a display name to `first 6 + "... " + last tail`
/// characters when it exceeds the label width.
fn abbreviate(name: &str, tail: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= LABEL_MAX {
        return name.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}... {}", head, end)
}
