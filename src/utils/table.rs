//! Table rendering utilities for CLI outputs.
//! Widths are computed on the plain text; colors are applied after padding.

use super::colors::{RESET, colorize_optional};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

impl Cell {
    pub fn colored(text: String, color: &'static str) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.text.chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, width) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *width, col.align));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, (col, width)) in self.columns.iter().zip(&widths).enumerate() {
                let cell = row.get(i).cloned().unwrap_or_default();
                let padded = pad(&cell.text, *width, col.align);
                match cell.color {
                    Some(color) => out.push_str(&format!("{color}{padded}{RESET}")),
                    None => out.push_str(&colorize_optional(&padded)),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", s, width = width),
        Align::Right => format!("{:>width$}", s, width = width),
    }
}
