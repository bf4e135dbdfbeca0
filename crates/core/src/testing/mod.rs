//! Testing utilities and mock implementations.
//!
//! [`MockDecoder`] stands in for the workbook decoder so pipeline and server
//! tests can feed grids directly, and [`fixtures`] builds orders and grids
//! in the export layout.
//!
//! # Example
//!
//! ```rust,ignore
//! use finplan_core::testing::{fixtures, MockDecoder};
//!
//! let decoder = MockDecoder::with_grid(fixtures::grid(vec![
//!     fixtures::OrderRow::new("A1", "Acme").minutes("120"),
//! ]));
//! ```

mod mock_decoder;

pub use mock_decoder::MockDecoder;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::config::ColumnMapping;
    use crate::orders::Order;
    use crate::spreadsheet::{Cell, Grid};

    /// One data row of the order export, with reasonable defaults.
    ///
    /// Empty strings become [`Cell::Empty`]; everything else is text, which
    /// is how most exports store these columns.
    #[derive(Debug, Clone)]
    pub struct OrderRow {
        pub id: String,
        pub client: String,
        pub article: String,
        pub color: String,
        pub finishing: String,
        pub minutes: String,
    }

    impl OrderRow {
        pub fn new(id: &str, client: &str) -> Self {
            Self {
                id: id.to_string(),
                client: client.to_string(),
                article: "Popeline".to_string(),
                color: "Blu".to_string(),
                finishing: "Ram".to_string(),
                minutes: "60".to_string(),
            }
        }

        pub fn article(mut self, article: &str) -> Self {
            self.article = article.to_string();
            self
        }

        pub fn color(mut self, color: &str) -> Self {
            self.color = color.to_string();
            self
        }

        pub fn finishing(mut self, finishing: &str) -> Self {
            self.finishing = finishing.to_string();
            self
        }

        pub fn minutes(mut self, minutes: &str) -> Self {
            self.minutes = minutes.to_string();
            self
        }

        /// Lays the row out at the mapping's column positions.
        pub fn into_cells(self, columns: &ColumnMapping) -> Vec<Cell> {
            let mut cells = vec![Cell::Empty; columns.width()];
            let values = [
                (columns.id, self.id),
                (columns.client, self.client),
                (columns.article, self.article),
                (columns.color, self.color),
                (columns.finishing, self.finishing),
                (columns.minutes, self.minutes),
            ];
            for (col, value) in values {
                cells[col] = text_cell(value);
            }
            cells
        }
    }

    fn text_cell(value: String) -> Cell {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }

    /// Header row in the default export layout.
    pub fn header_row() -> Vec<Cell> {
        let columns = ColumnMapping::default();
        let mut cells = vec![Cell::Empty; columns.width()];
        for (name, col) in columns.positions() {
            cells[col] = Cell::from(name);
        }
        cells
    }

    /// A grid with a header row followed by `rows` in the default layout.
    pub fn grid(rows: Vec<OrderRow>) -> Grid {
        let columns = ColumnMapping::default();
        let mut all = vec![header_row()];
        all.extend(rows.into_iter().map(|r| r.into_cells(&columns)));
        Grid::new(all)
    }

    /// Create a test order with reasonable defaults.
    pub fn order(id: &str, client: &str, minutes: f64) -> Order {
        Order {
            id: id.to_string(),
            client: client.to_string(),
            article: "Popeline".to_string(),
            color: "Blu".to_string(),
            finishing: "Ram".to_string(),
            minutes_to_complete: minutes,
        }
    }

    /// Create a test order for a given finishing machine.
    pub fn order_with_finishing(id: &str, finishing: &str, minutes: f64) -> Order {
        Order {
            finishing: finishing.to_string(),
            ..order(id, "Acme", minutes)
        }
    }
}
