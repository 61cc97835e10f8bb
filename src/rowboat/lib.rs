//! # Rowboat - Tables out of comma-separated text
//!
//! Command-line admin tools spend a lot of time doing the same three things
//! with the output of *other* tools: split comma-separated text into rows,
//! show those rows as an aligned table, and save them back out as a CSV file.
//! Rowboat is that pipeline, and nothing else.
//!
//! ## The Problem
//!
//! Listing commands (directory tools, exporters, batch jobs) emit plain
//! comma-separated text: a header line followed by data lines. That text is:
//! - not guaranteed rectangular (short rows happen in the wild)
//! - sometimes empty, or just whitespace
//! - unreadable when printed raw at any real column count
//!
//! ## The Solution
//!
//! A single [`Table`] type with three capabilities:
//! - **Parse**: [`Table::parse`] turns captured text into a header row plus
//!   data rows, trimming fields and dropping blank lines. Empty input is an
//!   empty table, never an error.
//! - **Render**: [`Table::render`] writes an aligned, human-readable table.
//!   Column widths are the maximum of the header cell and every data cell in
//!   that column; rows shorter than the header are padded, never indexed out
//!   of bounds. A table without data rows renders a "no data" notice.
//! - **Export**: [`Table::write_csv`] writes a conventional CSV file (header
//!   row first, standard quoting) whose parsed-back content matches the
//!   table exactly.
//!
//! ## Quick Example
//!
//! ```rust
//! use rowboat::Table;
//!
//! let table = Table::parse("email,role\na@example.com,member\n");
//! let mut out = Vec::new();
//! table.render(&mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("a@example.com | member"));
//! assert!(text.contains("-+-"));
//! ```
//!
//! ## What Rowboat Does Not Do
//!
//! No column type inference, no alignment options, no wrapping, no color.
//! Quoting semantics are whatever the underlying CSV reader does; records it
//! cannot read are dropped rather than surfaced.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Separator between cells in a rendered row.
const CELL_JOINT: &str = " | ";
/// Separator between dash runs in the rule under the header.
const RULE_JOINT: &str = "-+-";

/// Notice emitted instead of a table when there are no data rows.
pub const NO_DATA_NOTICE: &str = "No data.";

/// An ordered sequence of string fields. Field counts may vary row to row.
pub type Row = Vec<String>;

/// A header row plus data rows, parsed from comma-separated text.
///
/// The first row is the header. Anything after it is data. A table may also
/// be empty (no rows at all) when parsed from empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from rows that are already split. The first row is
    /// taken as the header.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse comma-separated text, as captured from a command's stdout.
    ///
    /// Fields are whitespace-trimmed, blank lines are dropped, and short
    /// rows are kept as-is. Empty or whitespace-only input yields an empty
    /// table. Records the CSV reader cannot make sense of are skipped.
    pub fn parse(text: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(_) => continue,
            };
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }
        Self { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row, if the table has one.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// The data rows (everything after the header).
    pub fn data(&self) -> &[Row] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }

    /// True when the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when there is at least one data row beyond the header.
    pub fn has_data(&self) -> bool {
        self.rows.len() >= 2
    }

    /// Display width of each header column: the widest of the header cell
    /// and every data cell at that index. Data rows shorter than the header
    /// contribute nothing to the missing columns.
    pub fn column_widths(&self) -> Vec<usize> {
        let header = match self.rows.first() {
            Some(header) => header,
            None => return Vec::new(),
        };
        header
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let mut width = cell.width();
                for row in &self.rows[1..] {
                    if let Some(cell) = row.get(i) {
                        width = width.max(cell.width());
                    }
                }
                width
            })
            .collect()
    }

    /// Write the table as aligned text: header, dashed rule, data rows.
    ///
    /// A table with fewer than two rows (no data) writes [`NO_DATA_NOTICE`]
    /// and nothing else.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.has_data() {
            writeln!(out, "{}", NO_DATA_NOTICE)?;
            return Ok(());
        }

        let widths = self.column_widths();
        writeln!(out, "{}", format_row(&self.rows[0], &widths))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(out, "{}", rule.join(RULE_JOINT))?;
        for row in &self.rows[1..] {
            writeln!(out, "{}", format_row(row, &widths))?;
        }
        Ok(())
    }

    /// Render to a string. Convenience over [`Table::render`].
    pub fn render_to_string(&self) -> String {
        let mut out = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.render(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Write the table as CSV with standard quoting, header row first.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(out);
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// One rendered line: each header column left-justified to its width,
/// joined by `" | "`. Cells missing from short rows render as blanks.
fn format_row(row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    cells.join(CELL_JOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(row: &[&str]) -> Row {
        row.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_splits_lines_and_fields() {
        let table = Table::parse("email,role\na@x.com,member\nb@x.com,manager\n");
        assert_eq!(table.header().unwrap(), &owned(&["email", "role"])[..]);
        assert_eq!(table.data().len(), 2);
        assert_eq!(table.data()[1], owned(&["b@x.com", "manager"]));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let table = Table::parse("email , role\n  a@x.com ,  member \n");
        assert_eq!(table.header().unwrap(), &owned(&["email", "role"])[..]);
        assert_eq!(table.data()[0], owned(&["a@x.com", "member"]));
    }

    #[test]
    fn parse_empty_input_is_empty_table() {
        assert!(Table::parse("").is_empty());
        assert!(Table::parse("   \n \n").is_empty());
    }

    #[test]
    fn parse_drops_blank_lines_keeps_short_rows() {
        let table = Table::parse("a,b,c\n\n1,2\n\n");
        assert_eq!(table.data().len(), 1);
        assert_eq!(table.data()[0], owned(&["1", "2"]));
    }

    #[test]
    fn parse_handles_quoted_fields() {
        let table = Table::parse("name,title\n\"Doe, Jane\",Admin\n");
        assert_eq!(table.data()[0], owned(&["Doe, Jane", "Admin"]));
    }

    #[test]
    fn widths_take_the_longer_of_header_and_data() {
        let table = Table::new(vec![
            owned(&["id", "name"]),
            owned(&["abc123", "x"]),
            owned(&["7", "a much longer name"]),
        ]);
        assert_eq!(table.column_widths(), vec![6, 18]);
    }

    #[test]
    fn widths_fall_back_to_header_for_missing_cells() {
        let table = Table::new(vec![owned(&["email", "role", "status"]), owned(&["a@x.com"])]);
        assert_eq!(table.column_widths(), vec![7, 4, 6]);
    }

    #[test]
    fn render_aligns_and_rules() {
        let table = Table::new(vec![
            owned(&["email", "role"]),
            owned(&["a@x.com", "member"]),
        ]);
        let text = table.render_to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "email   | role  ");
        assert_eq!(lines[1], "--------+-------");
        assert_eq!(lines[2], "a@x.com | member");
    }

    #[test]
    fn rendered_lines_match_width_budget() {
        let table = Table::new(vec![
            owned(&["a", "bb", "ccc"]),
            owned(&["dddd", "e", "f"]),
        ]);
        let widths = table.column_widths();
        let budget: usize = widths.iter().sum::<usize>() + CELL_JOINT.len() * (widths.len() - 1);
        for line in table.render_to_string().lines() {
            assert_eq!(line.len(), budget);
        }
    }

    #[test]
    fn render_short_row_pads_missing_columns() {
        let table = Table::new(vec![
            owned(&["email", "role", "status"]),
            owned(&["a@x.com", "member"]),
        ]);
        let text = table.render_to_string();
        assert!(text.lines().nth(2).unwrap().ends_with("|       "));
    }

    #[test]
    fn render_header_only_is_no_data() {
        let table = Table::new(vec![owned(&["email", "role"])]);
        let text = table.render_to_string();
        assert_eq!(text.trim_end(), NO_DATA_NOTICE);
        assert!(!text.contains('|'));
    }

    #[test]
    fn render_empty_table_is_no_data() {
        let text = Table::parse("").render_to_string();
        assert_eq!(text.trim_end(), NO_DATA_NOTICE);
    }

    #[test]
    fn csv_export_round_trips() {
        let table = Table::parse("email,role\na@x.com,member\nb@x.com,manager\n");
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let back = Table::parse(&String::from_utf8(buf).unwrap());
        assert_eq!(back, table);
    }

    #[test]
    fn csv_export_two_line_file() {
        let table = Table::new(vec![owned(&["A", "B"]), owned(&["1", "2"])]);
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        let back = Table::parse(&text);
        assert_eq!(back.header().unwrap(), &owned(&["A", "B"])[..]);
        assert_eq!(back.data(), &[owned(&["1", "2"])]);
    }

    #[test]
    fn csv_export_quotes_embedded_commas() {
        let table = Table::new(vec![owned(&["name"]), owned(&["Doe, Jane"])]);
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Doe, Jane\""));
        assert_eq!(Table::parse(&text), table);
    }
}
