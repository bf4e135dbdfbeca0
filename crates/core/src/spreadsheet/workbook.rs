//! Calamine-backed decoder (xlsx, xlsm, xlsb, xls, ods).

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use tracing::debug;

use super::error::DecodeError;
use super::traits::SpreadsheetDecoder;
use super::types::{Cell, Grid};

/// Decodes the first worksheet of a workbook with `calamine`.
///
/// Decoding is CPU-bound and runs on the blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineDecoder;

impl CalamineDecoder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpreadsheetDecoder for CalamineDecoder {
    fn name(&self) -> &str {
        "calamine"
    }

    async fn decode(&self, bytes: Vec<u8>) -> Result<Grid, DecodeError> {
        tokio::task::spawn_blocking(move || decode_first_sheet(bytes))
            .await
            .map_err(|e| DecodeError::Unavailable(format!("decoder task failed: {}", e)))?
    }
}

fn decode_first_sheet(bytes: Vec<u8>) -> Result<Grid, DecodeError> {
    let size = bytes.len();
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DecodeError::NoWorksheet)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| DecodeError::Worksheet {
            sheet: sheet.clone(),
            reason: e.to_string(),
        })?;

    let grid = grid_from_range(&range);
    debug!(sheet = %sheet, bytes = size, rows = grid.len(), "Decoded worksheet");
    Ok(grid)
}

/// Builds a grid whose column indices are absolute sheet columns.
///
/// Calamine ranges start at the first used cell; leading empty columns are
/// padded back so that column 25 is always column Z. Rows start at the first
/// used row, which is treated as the header.
fn grid_from_range(range: &Range<Data>) -> Grid {
    let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let rows = range
        .rows()
        .map(|row| {
            let mut cells = vec![Cell::Empty; col_offset];
            cells.extend(row.iter().map(cell_from_data));
            cells
        })
        .collect();

    Grid::new(rows)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Serial date numbers, the same way spreadsheet exports hand them out
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn xlsx_bytes(build: impl FnOnce(&mut rust_xlsxwriter::Worksheet)) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        build(sheet);
        workbook.save_to_buffer().unwrap()
    }

    #[tokio::test]
    async fn test_decode_garbage_is_invalid_format() {
        let result = CalamineDecoder::new()
            .decode(b"definitely not a workbook".to_vec())
            .await;
        assert!(matches!(result, Err(DecodeError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_decode_reads_first_sheet_cells() {
        let bytes = xlsx_bytes(|sheet| {
            sheet.write_string(0, 0, "Header").unwrap();
            sheet.write_string(1, 0, "Acme").unwrap();
            sheet.write_number(1, 1, 120.0).unwrap();
            sheet.write_boolean(1, 2, true).unwrap();
        });

        let grid = CalamineDecoder::new().decode(bytes).await.unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.cell(0, 0), &Cell::from("Header"));
        assert_eq!(grid.cell(1, 0), &Cell::from("Acme"));
        assert_eq!(grid.cell(1, 1), &Cell::Number(120.0));
        assert_eq!(grid.cell(1, 2), &Cell::Bool(true));
    }

    #[tokio::test]
    async fn test_decode_keeps_absolute_column_positions() {
        // Nothing written in columns A..C: the used range starts at D.
        let bytes = xlsx_bytes(|sheet| {
            sheet.write_string(0, 3, "Cliente").unwrap();
            sheet.write_string(1, 3, "Acme").unwrap();
            sheet.write_string(1, 25, "A1").unwrap();
        });

        let grid = CalamineDecoder::new().decode(bytes).await.unwrap();

        assert_eq!(grid.cell(1, 3), &Cell::from("Acme"));
        assert_eq!(grid.cell(1, 25), &Cell::from("A1"));
        assert_eq!(grid.cell(1, 0), &Cell::Empty);
    }
}
