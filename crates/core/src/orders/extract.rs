//! Maps fixed spreadsheet columns onto [`Order`] records.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::debug;

use crate::config::ColumnMapping;
use crate::spreadsheet::{Cell, Grid};

use super::error::ExtractError;
use super::types::{Order, MISSING, UNDEFINED_ID};

/// Leading float literal, in the lenient style of spreadsheet exports:
/// `"120 min"` reads as 120, `".5h"` as 0.5.
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("float prefix pattern is valid")
});

/// Extracts orders from a decoded grid using a fixed column mapping.
#[derive(Debug, Clone, Default)]
pub struct OrderExtractor {
    columns: ColumnMapping,
}

impl OrderExtractor {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    /// Extracts every accepted data row, in sheet order.
    ///
    /// Row 0 is the header and is always skipped. Fails with
    /// [`ExtractError::NoValidData`] when no row is accepted.
    pub fn extract(&self, grid: &Grid) -> Result<Vec<Order>, ExtractError> {
        let data_rows = grid.data_rows();

        let orders: Vec<Order> = data_rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.order_from_row(index, row))
            .filter(is_accepted)
            .collect();

        debug!(
            rows = data_rows.len(),
            accepted = orders.len(),
            "Extracted orders from grid"
        );

        if orders.is_empty() {
            return Err(ExtractError::NoValidData {
                rows_scanned: data_rows.len(),
            });
        }

        Ok(orders)
    }

    /// `index` is the 0-based position among data rows (header excluded).
    fn order_from_row(&self, index: usize, row: &[Cell]) -> Order {
        let cols = &self.columns;
        Order {
            id: text_at(row, cols.id).unwrap_or_else(|| format!("row-{}", index)),
            client: text_or_missing(row, cols.client),
            article: text_or_missing(row, cols.article),
            color: text_or_missing(row, cols.color),
            finishing: text_or_missing(row, cols.finishing),
            minutes_to_complete: parse_minutes(cell_at(row, cols.minutes)),
        }
    }
}

fn is_accepted(order: &Order) -> bool {
    !order.id.is_empty() && order.id != UNDEFINED_ID && order.client != MISSING
}

fn cell_at(row: &[Cell], col: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    row.get(col).unwrap_or(&EMPTY)
}

fn text_at(row: &[Cell], col: usize) -> Option<String> {
    cell_at(row, col).as_text()
}

fn text_or_missing(row: &[Cell], col: usize) -> String {
    text_at(row, col).unwrap_or_else(|| MISSING.to_string())
}

/// Reads a duration cell as minutes.
///
/// Numbers are taken as-is, text is read up to the end of its leading float
/// literal. Anything else, and any non-finite result, is `f64::INFINITY`.
pub fn parse_minutes(cell: &Cell) -> f64 {
    let value = match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => FLOAT_PREFIX
            .find(s.trim_start())
            .and_then(|m| m.as_str().parse::<f64>().ok()),
        Cell::Empty | Cell::Bool(_) => None,
    };

    match value {
        Some(v) if v.is_finite() => v,
        _ => f64::INFINITY,
    }
}
