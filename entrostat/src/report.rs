// entrostat/src/report.rs
//! Tabular rendering of per-group entropy results.
//!
//! Failed groups never reach this module: the rows handed in are the
//! surviving (label, value) pairs, already in encounter order. Rendering is
//! a plain aligned table with no borders, labels left-aligned and values
//! right-aligned at a fixed number of decimal digits.

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};

/// One successful group's contribution to the final report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: f64,
}

/// Renders the report rows as a plain aligned table.
///
/// Returns `None` when there are no rows, in which case nothing at all
/// should be printed. With `suppress_labels` only the value column is
/// emitted.
pub fn render_table(rows: &[ReportRow], precision: usize, suppress_labels: bool) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);

    for row in rows {
        let value = Cell::new(format!("{:.*}", precision, row.value));
        if suppress_labels {
            table.add_row(vec![value]);
        } else {
            table.add_row(vec![Cell::new(&row.label), value]);
        }
    }

    let value_column = if suppress_labels { 0 } else { 1 };
    for (index, column) in table.column_iter_mut().enumerate() {
        if index == value_column {
            column.set_cell_alignment(CellAlignment::Right);
            column.set_padding((0, 0));
        } else {
            column.set_padding((0, 2));
        }
    }

    Some(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                label: "weights.txt".to_string(),
                value: 1.0397207708399179,
            },
            ReportRow {
                label: "counts.txt".to_string(),
                value: 0.6931471805599453,
            },
        ]
    }

    #[test]
    fn test_empty_rows_render_nothing() {
        assert_eq!(render_table(&[], 3, false), None);
    }

    #[test]
    fn test_rows_render_label_and_value_at_precision() {
        let table = render_table(&rows(), 3, false).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("weights.txt"));
        assert!(lines[0].contains("1.040"));
        assert!(lines[1].contains("counts.txt"));
        assert!(lines[1].contains("0.693"));
    }

    #[test]
    fn test_precision_zero_prints_integers() {
        let table = render_table(&rows(), 0, false).unwrap();
        assert!(table.contains("1"));
        assert!(!table.contains("1.0"));
    }

    #[test]
    fn test_suppressed_labels_leave_only_values() {
        let table = render_table(&rows(), 3, true).unwrap();
        assert!(!table.contains("weights.txt"));
        assert!(table.contains("1.040"));
        assert!(table.contains("0.693"));
    }

    #[test]
    fn test_values_align_on_the_right() {
        let rows = vec![
            ReportRow {
                label: "a".to_string(),
                value: 10.5,
            },
            ReportRow {
                label: "b".to_string(),
                value: 0.5,
            },
        ];
        let table = render_table(&rows, 3, false).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].ends_with("10.500"));
        assert!(lines[1].ends_with("0.500"));
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
