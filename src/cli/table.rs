use crate::expenses::ExpenseRecord;

/// Describes how a column aligns its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Minimal aligned-column table for console views.
pub struct Table {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[(&str, Alignment)]) -> Self {
        Self {
            headers: columns.iter().map(|(header, _)| (*header).to_string()).collect(),
            alignments: columns.iter().map(|(_, alignment)| *alignment).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|header| header.chars().count())
            .collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                let pad = width.saturating_sub(text.chars().count());
                match self.alignments[idx] {
                    Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
                    Alignment::Right => format!("{}{}", " ".repeat(pad), text),
                }
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule_width =
            widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let mut out = String::new();
        out.push_str(&self.render_row(&self.headers, &widths));
        out.push('\n');
        out.push_str(&"-".repeat(rule_width));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }
        out
    }
}

/// Prints the record list; `numbered` adds the 1-based position column used
/// by the delete picker.
pub fn print_records(records: &[ExpenseRecord], numbered: bool) {
    let mut columns = vec![
        ("Date", Alignment::Left),
        ("Category", Alignment::Left),
        ("Name", Alignment::Left),
        ("Amount ($)", Alignment::Right),
    ];
    if numbered {
        columns.insert(0, ("#", Alignment::Right));
    }
    let mut table = Table::new(&columns);
    for (index, record) in records.iter().enumerate() {
        let mut row = vec![
            record.date.clone(),
            record.category.to_string(),
            record.name.clone(),
            format!("{:.2}", record.amount),
        ];
        if numbered {
            row.insert(0, (index + 1).to_string());
        }
        table.push_row(row);
    }
    println!("{}", table.render());
}

pub fn print_months(totals: &[(String, f64)]) {
    let mut table = Table::new(&[("Month", Alignment::Left), ("Total Spent", Alignment::Right)]);
    for (month, total) in totals {
        table.push_row(vec![month.clone(), format!("${:.2}", total)]);
    }
    println!("{}", table.render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_and_pad_to_the_widest_cell() {
        let mut table = Table::new(&[("Name", Alignment::Left), ("Amount", Alignment::Right)]);
        table.push_row(vec!["coffee".into(), "3.50".into()]);
        table.push_row(vec!["bus".into(), "112.00".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name    Amount");
        assert_eq!(lines[2], "coffee    3.50");
        assert_eq!(lines[3], "bus     112.00");
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut table = Table::new(&[("A", Alignment::Left), ("B", Alignment::Left)]);
        table.push_row(vec!["x".into()]);
        let rendered = table.render();
        assert!(rendered.lines().last().unwrap().starts_with('x'));
    }
}
