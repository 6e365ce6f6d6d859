//! Workbook reading backed by `calamine`

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use super::{Sheet, WorkbookReader};
use crate::{Error, Result};

/// Reads `.xlsx` / `.xls` workbooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineReader;

impl WorkbookReader for CalamineReader {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| Error::extraction("spreadsheet", path, e))?;

        let names = workbook.sheet_names();
        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| Error::extraction("spreadsheet", path, e))?;
            sheets.push(Sheet::new(name, range_to_csv(&range)));
        }
        Ok(sheets)
    }
}

fn range_to_csv(range: &Range<Data>) -> String {
    rows_to_csv(
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>()),
    )
}

/// Serialize rows as comma-separated lines.
///
/// Cells containing commas or quotes are quoted, line breaks inside a cell
/// are flattened to spaces, and rows with no content become blank lines.
pub fn rows_to_csv<I, R, S>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = rows
        .into_iter()
        .map(|row| {
            let cells: Vec<String> = row.into_iter().map(|c| escape_cell(c.as_ref())).collect();
            if cells.iter().all(|c| c.trim().is_empty()) {
                String::new()
            } else {
                cells.join(",")
            }
        })
        .collect();
    lines.join("\n")
}

fn escape_cell(cell: &str) -> String {
    let flat = cell.replace(['\r', '\n'], " ");
    if flat.contains([',', '"']) {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}
