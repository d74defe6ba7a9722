//! Extract header-keyed records from a worksheet range

use calamine::{Data, Range};
use thiserror::Error;

use super::record::{Record, RecordSet};

/// Errors surfaced while turning worksheets into records.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    /// A cell could not be rendered as display text.
    #[error("sheet '{sheet}', row {row}, column {col}: {detail}")]
    MalformedSheet {
        sheet: String,
        row: usize,
        col: usize,
        detail: String,
    },
    /// The workbook contains no sheets at all.
    #[error("workbook contains no sheets")]
    EmptyWorkbook,
    /// A configured sheet resolves to nothing, by name or by position.
    #[error("worksheet '{name}' not found and fallback position {position} is out of range")]
    MissingSheet { name: String, position: usize },
}

/// Convert one worksheet into an ordered sequence of records.
///
/// Row 0 supplies the field names. A row where every cell's string form is
/// empty produces no record. Data rows are zipped against the headers
/// positionally; cells beyond the headers are ignored, and trailing empty
/// cells leave their fields absent from the record.
pub fn extract(sheet: &str, range: &Range<Data>) -> Result<RecordSet, ExtractError> {
    let mut rows = range.rows();

    let header_row = match rows.next() {
        Some(row) => row,
        None => return Ok(RecordSet::default()),
    };

    let mut headers = Vec::with_capacity(header_row.len());
    for (col, cell) in header_row.iter().enumerate() {
        headers.push(format_cell(cell).map_err(|detail| malformed(sheet, 1, col + 1, detail))?);
    }

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.iter().all(|c| c.to_string().trim().is_empty()) {
            continue;
        }

        // Trailing empty cells stay absent so the record only carries the
        // fields the row actually populated.
        let extent = row
            .iter()
            .rposition(|c| !matches!(c, Data::Empty))
            .map_or(0, |p| p + 1);

        let mut record = Record::new();
        for (col, cell) in row[..extent].iter().enumerate().take(headers.len()) {
            let text =
                format_cell(cell).map_err(|detail| malformed(sheet, index + 2, col + 1, detail))?;
            record.insert(&headers[col], text);
        }
        records.push(record);
    }

    Ok(RecordSet { headers, records })
}

fn malformed(sheet: &str, row: usize, col: usize, detail: String) -> ExtractError {
    ExtractError::MalformedSheet {
        sheet: sheet.to_string(),
        row,
        col,
        detail,
    }
}

/// Display text for one cell, the way it would appear in the sheet.
fn format_cell(cell: &Data) -> Result<String, String> {
    match cell {
        Data::Empty => Ok(String::new()),
        Data::String(s) => Ok(s.clone()),
        Data::Int(i) => Ok(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Ok((*f as i64).to_string())
            } else {
                Ok(f.to_string())
            }
        }
        Data::Bool(b) => Ok(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%m-%d-%y").to_string())
            .ok_or_else(|| "date/time cell has no calendar representation".to_string()),
        Data::DateTimeIso(s) => Ok(s.clone()),
        Data::DurationIso(s) => Ok(s.clone()),
        Data::Error(e) => Err(format!("cell error {}", e)),
    }
}
