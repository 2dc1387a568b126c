/// A plain-text table renderer for terminal output. Columns grow to fit
/// their widest cell up to a cap, numeric columns can be right-aligned, and
/// overlong cells are truncated with an ellipsis.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    right_align: Vec<bool>,
}

const MAX_CELL_WIDTH: usize = 36;

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len().min(MAX_CELL_WIDTH)).collect();
        let right_align = vec![false; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            right_align,
        }
    }

    /// Right-align a column (amounts, counts).
    pub fn right_align(mut self, column: usize) -> Self {
        if column < self.right_align.len() {
            self.right_align[column] = true;
        }
        self
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len().min(MAX_CELL_WIDTH));
            }
        }
        self.rows.push(row);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                let cell = truncate(col, width);
                if self.right_align[i] {
                    line.push_str(&format!("{:>width$}", cell, width = width));
                } else {
                    line.push_str(&format!("{:<width$}", cell, width = width));
                }
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

fn truncate(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Name", "Amount", "Status"]);
        table.add_row(vec!["Alice".into(), "100".into(), "completed".into()]);
        table.add_row(vec!["Bob".into(), "50".into(), "pending".into()]);

        let rendered = table.render();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("pending"));
        assert!(rendered.contains("-+-"));
    }

    #[test]
    fn right_aligned_column_pads_on_the_left() {
        let mut table = Table::new(vec!["User", "Amount"]).right_align(1);
        table.add_row(vec!["Alice".into(), "5".into()]);
        let rendered = table.render();
        let data_line = rendered.lines().nth(2).unwrap();
        assert!(data_line.ends_with("     5"));
    }

    #[test]
    fn overlong_cells_are_truncated() {
        let mut table = Table::new(vec!["Note"]);
        table.add_row(vec!["x".repeat(80)]);
        let rendered = table.render();
        let data_line = rendered.lines().nth(2).unwrap();
        assert!(data_line.chars().count() <= MAX_CELL_WIDTH);
        assert!(data_line.ends_with('…'));
    }
}
