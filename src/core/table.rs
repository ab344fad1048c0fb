//! # Text Tables
//!
//! Append-only tables rendered to a fixed-width character grid:
//!
//! ```text
//! ┌-----┬----┐
//! |  A  | BB |
//! ├-----┼----┤
//! |  x  | y  |
//! | zzz | w  |
//! └-----┴----┘
//! ```
//!
//! Column widths grow as rows arrive and are only read at render time, so a
//! row appended early is still laid out against the final widths.
//!
//! Widths count `char`s. Wide glyphs are not measured specially.

use std::fmt;

/// Characters used for each border position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub top: [char; 3],
    pub middle: [char; 3],
    pub bottom: [char; 3],
    pub horizontal: char,
    pub vertical: char,
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            top: ['┌', '┬', '┐'],
            middle: ['├', '┼', '┤'],
            bottom: ['└', '┴', '┘'],
            horizontal: '-',
            vertical: '|',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub width: usize,
}

impl Column {
    fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let width = text_len(&title);
        Self { title, width }
    }

    fn widen(&mut self, cell: &str) {
        self.width = self.width.max(text_len(cell));
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    borders: Borders,
    empty_message: String,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            title: None,
            columns: Vec::new(),
            rows: Vec::new(),
            borders: Borders::default(),
            empty_message: super::strings::Strings::default().table_empty,
        }
    }

    /// A table with a line of text printed above it.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new()
        }
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Text rendered instead of the grid when no rows were appended.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn add_columns<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Column::new));
        self
    }

    /// Appends a row, formatting each item with `Display`.
    pub fn append<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let cells = items.into_iter().map(|item| item.to_string()).collect();
        self.push_row(cells)
    }

    /// Appends a row where absent values render as empty cells.
    pub fn append_optional<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: fmt::Display,
    {
        let cells = items
            .into_iter()
            .map(|item| item.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        self.push_row(cells)
    }

    fn push_row(&mut self, cells: Vec<String>) -> &mut Self {
        // Rows wider than the header grow untitled columns; shorter rows
        // keep their length and render the gap as blanks.
        while self.columns.len() < cells.len() {
            self.columns.push(Column::new(""));
        }
        for (column, cell) in self.columns.iter_mut().zip(&cells) {
            column.widen(cell);
        }
        self.rows.push(cells);
        self
    }

    /// Renders the table, or the empty message if no rows were appended.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return self.empty_message.clone();
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 5);
        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(title.to_string());
        }

        lines.push(self.border_line(self.borders.top));
        lines.push(self.row_line(self.columns.iter().map(|c| c.title.as_str())));
        lines.push(self.border_line(self.borders.middle));
        for row in &self.rows {
            lines.push(self.row_line(
                (0..self.columns.len()).map(|i| row.get(i).map(String::as_str).unwrap_or("")),
            ));
        }
        lines.push(self.border_line(self.borders.bottom));

        lines.join("\n")
    }

    fn border_line(&self, [left, junction, right]: [char; 3]) -> String {
        let fill = self.borders.horizontal.to_string();
        let segments: Vec<String> = self
            .columns
            .iter()
            .map(|c| fill.repeat(c.width + 2))
            .collect();
        format!("{left}{}{right}", segments.join(junction.to_string().as_str()))
    }

    fn row_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let v = self.borders.vertical;
        let cells: Vec<String> = cells
            .zip(&self.columns)
            .map(|(text, column)| pad_center(text, column.width))
            .collect();
        format!("{v} {} {v}", cells.join(format!(" {v} ").as_str()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Centers `text` in a field of `width` chars. The extra space of an odd
/// remainder goes to the right. Text wider than the field is returned as is.
pub fn pad_center(text: &str, width: usize) -> String {
    let len = text_len(text);
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(table: &Table) -> Vec<usize> {
        table.columns().iter().map(|c| c.width).collect()
    }

    #[test]
    fn test_pad_center_even_and_odd_remainders() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("", 3), "   ");
        assert_eq!(pad_center("abc", 3), "abc");
    }

    #[test]
    fn test_pad_center_total_length_equals_width() {
        for width in 0..12 {
            for len in 1..=width {
                let text = "x".repeat(len);
                let padded = pad_center(&text, width);
                assert_eq!(padded.chars().count(), width);
                assert_eq!(padded.len() - padded.trim_start().len(), (width - len) / 2);
            }
        }
    }

    #[test]
    fn test_pad_center_counts_chars_not_bytes() {
        assert_eq!(pad_center("été", 5), " été ");
    }

    #[test]
    fn test_widths_track_header_and_cells() {
        let mut table = Table::new();
        table.add_columns(["A", "BB"]);
        assert_eq!(widths(&table), vec![1, 2]);

        table.append(["x", "y"]).append(["zzz", "w"]);
        assert_eq!(widths(&table), vec![3, 2]);
    }

    #[test]
    fn test_widths_never_shrink() {
        let mut table = Table::new();
        table.add_columns(["Name"]);
        table.append(["Alexandra"]);
        table.append(["Al"]);
        assert_eq!(widths(&table), vec![9]);
    }

    #[test]
    fn test_empty_table_renders_message_only() {
        let mut table = Table::with_title("Users");
        table.add_columns(["Id", "Name"]);
        assert_eq!(table.render(), "The table is empty.");

        let custom = Table::new().empty_message("rien");
        assert_eq!(custom.render(), "rien");
    }

    #[test]
    fn test_render_two_column_table() {
        let mut table = Table::new();
        table.add_columns(["A", "BB"]);
        table.append(["x", "y"]).append(["zzz", "w"]);

        let expected = [
            "┌-----┬----┐",
            "|  A  | BB |",
            "├-----┼----┤",
            "|  x  | y  |",
            "| zzz | w  |",
            "└-----┴----┘",
        ]
        .join("\n");
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_border_fill_is_width_plus_two() {
        let mut table = Table::new();
        table.add_columns(["one", "three", "x"]);
        table.append([1, 2, 3]);

        let rendered = table.render();
        let top = rendered.lines().next().unwrap();
        let segments: Vec<usize> = top
            .trim_start_matches('┌')
            .trim_end_matches('┐')
            .split('┬')
            .map(|s| s.chars().count())
            .collect();
        assert_eq!(segments, vec![5, 7, 3]);
        assert_eq!(top.matches('┬').count(), 2);
    }

    #[test]
    fn test_title_rendered_above_grid() {
        let mut table = Table::with_title("Scores");
        table.add_columns(["P"]).append(["1"]);
        assert_eq!(table.render().lines().next(), Some("Scores"));
    }

    #[test]
    fn test_blank_title_is_skipped() {
        let mut table = Table::with_title("   ");
        table.add_columns(["P"]).append(["1"]);
        assert!(table.render().starts_with('┌'));
    }

    #[test]
    fn test_short_row_renders_blank_cells() {
        let mut table = Table::new();
        table.add_columns(["Key", "Value"]);
        table.append(["k"]);

        assert_eq!(table.rows()[0].len(), 1);
        assert_eq!(table.render().lines().nth(3), Some("|  k  |       |"));
    }

    #[test]
    fn test_wide_row_extends_columns() {
        let mut table = Table::new();
        table.add_columns(["A"]);
        table.append(["1"]);
        table.append(["2", "extra"]);

        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.columns()[1].title, "");
        assert_eq!(widths(&table), vec![1, 5]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "| A |       |");
        assert_eq!(lines[3], "| 1 |       |");
        assert_eq!(lines[4], "| 2 | extra |");
    }

    #[test]
    fn test_append_optional_renders_absent_as_empty() {
        let mut table = Table::new();
        table.add_columns(["Name", "Email"]);
        table.append_optional([Some("ann"), None]);

        assert_eq!(table.rows()[0], vec!["ann".to_string(), String::new()]);
        assert_eq!(widths(&table), vec![4, 5]);
    }

    #[test]
    fn test_display_matches_render() {
        let mut table = Table::new();
        table.add_columns(["n"]).append([42]);
        assert_eq!(table.to_string(), table.render());
    }

    #[test]
    fn test_custom_borders() {
        let mut table = Table::new().borders(Borders {
            top: ['+', '+', '+'],
            middle: ['+', '+', '+'],
            bottom: ['+', '+', '+'],
            horizontal: '=',
            vertical: '!',
        });
        table.add_columns(["a", "b"]).append(["1", "2"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+===+===+");
        assert_eq!(lines[1], "! a ! b !");
    }
}
