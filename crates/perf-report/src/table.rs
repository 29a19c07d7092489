// Dweve Perf Report - Tracker performance log reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fixed-width, pipe-delimited table rendering.
//!
//! Every cell is `width` characters wide: one leading space, the content
//! padded to `width - 2`, and a closing `|`. Content wider than the column is
//! never truncated, so an overlong value pushes the rest of the row right.
//!
//! ```text
//!  Metric                                | Max     | Min     | Mean    | Last    |
//! --------------------------------------------------------------------------------
//!  mocked emitter and mocked session     | 1.0s    | 1.0s    | 1.0s    | 1.0s    |
//! ```

/// Width of the metric-name column.
pub const LABEL_WIDTH: usize = 40;

/// Width of each numeric column.
pub const VALUE_WIDTH: usize = 10;

/// Unit suffix appended to timings.
pub const SECONDS_SUFFIX: &str = "s";

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Column specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    /// Left-aligned column.
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }
}

/// A value to place in a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Duration in seconds, rendered by [`format_seconds`]
    Seconds(f64),
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Seconds(secs) => format_seconds(*secs),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<f64> for Cell {
    fn from(secs: f64) -> Self {
        Cell::Seconds(secs)
    }
}

/// Round to two decimals and append the seconds suffix.
///
/// Halfway cases round to even. The rounded value is printed in its shortest
/// round-trip form with at least one fractional digit, so `1.0` renders as
/// `1.0s` and `2.345` as `2.34s`. A negative value that rounds to zero
/// prints as `0.0s`, and large magnitudes use a signed exponent (`1e+17s`).
pub fn format_seconds(secs: f64) -> String {
    // adding +0.0 turns -0.0 into 0.0
    let rounded = (secs * 100.0).round_ties_even() / 100.0 + 0.0;
    let text = format!("{:?}", rounded);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => {
            format!("{}e+{}{}", mantissa, exp, SECONDS_SUFFIX)
        }
        _ => format!("{}{}", text, SECONDS_SUFFIX),
    }
}

/// Render `content` into a cell of `width` characters.
pub fn format_cell(content: &str, width: usize, align: Align) -> String {
    let inner = width.saturating_sub(2);
    match align {
        Align::Left => format!(" {:<inner$}|", content),
        Align::Right => format!(" {:>inner$}|", content),
    }
}

/// A table layout built from column specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Sum of the column widths.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Row of column headers.
    pub fn header_line(&self) -> String {
        self.columns
            .iter()
            .map(|c| format_cell(&c.header, c.width, c.align))
            .collect()
    }

    /// Dashes spanning the table width.
    pub fn separator_line(&self) -> String {
        "-".repeat(self.width())
    }

    /// Render one data row. Extra cells are ignored; missing cells are blank.
    pub fn row_line(&self, cells: &[Cell]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = cells.get(i).map(Cell::render).unwrap_or_default();
                format_cell(&content, col.width, col.align)
            })
            .collect()
    }
}

/// The Metric / Max / Min / Mean / Last layout.
pub fn summary_table() -> Table {
    Table::new(vec![
        Column::new("Metric", LABEL_WIDTH),
        Column::new("Max", VALUE_WIDTH),
        Column::new("Min", VALUE_WIDTH),
        Column::new("Mean", VALUE_WIDTH),
        Column::new("Last", VALUE_WIDTH),
    ])
}
