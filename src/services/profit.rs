//! Daily-profit workbook handling: parse the first sheet for a preview and
//! encode the untouched file bytes for the upload payload.
//!
//! The preview and the upload are independent reads of the same file, the
//! same way the web client ran two FileReaders. The backend re-parses the
//! workbook itself, which is why the payload is the raw bytes and not the
//! preview rows.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use super::table;

#[derive(Debug, Error)]
pub enum ProfitError {
    #[error("Failed to read workbook: {0}")]
    Workbook(String),
    #[error("The workbook has no sheets")]
    NoSheet,
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parsed preview of a profit sheet: first row as headers, the rest as data.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    /// One preview page of data rows. The header row is not part of the
    /// paginated set.
    pub fn preview_page(&self, current_page: usize, rows_per_page: usize) -> &[Vec<String>] {
        table::paginate(&self.rows, current_page, rows_per_page)
    }

    pub fn total_pages(&self, rows_per_page: usize) -> usize {
        table::total_pages(self.rows.len(), rows_per_page)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Read the first sheet of an `.xlsx`/`.xls` workbook into string rows.
pub fn read_sheet(path: &Path) -> Result<SheetData, ProfitError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ProfitError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ProfitError::NoSheet)?
        .map_err(|e| ProfitError::Workbook(e.to_string()))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(SheetData { headers, rows })
}

/// Base64 of the original file bytes, as the upload endpoint expects.
pub fn encode_for_upload(path: &Path) -> Result<String, ProfitError> {
    let bytes = std::fs::read(path)?;
    Ok(BASE64.encode(bytes))
}
