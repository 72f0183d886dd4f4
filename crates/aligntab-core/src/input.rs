//! Delimited text input
//!
//! Splits raw text into lines of cell values. Blank lines are skipped; CRLF
//! line endings are accepted.

use crate::error::Result;
use crate::table::Table;

/// One parsed input line with its 1-based position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub number: usize,
    pub fields: Vec<String>,
}

pub fn parse_lines(text: &str, delimiter: char) -> Vec<InputLine> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            if line.is_empty() {
                return None;
            }
            Some(InputLine {
                number: index + 1,
                fields: line.split(delimiter).map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Field count of the first line, if any
pub fn infer_columns(lines: &[InputLine]) -> Option<usize> {
    lines.first().map(|line| line.fields.len())
}

/// Write parsed lines into `table`, optionally turning the first into a label row
///
/// # Errors
///
/// Returns [`crate::AligntabError::InputLine`] carrying the source line number of the
/// first line the table rejects.
pub fn fill_table(table: &mut Table, lines: &[InputLine], label: bool) -> Result<()> {
    let mut rest = lines;
    if label {
        if let Some((first, tail)) = lines.split_first() {
            table
                .add_label(first.fields.as_slice())
                .map_err(|e| e.at_line(first.number))?;
            rest = tail;
        }
    }

    for line in rest {
        table
            .write_line(line.fields.as_slice())
            .map_err(|e| e.at_line(line.number))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AligntabError;

    #[test]
    fn test_parse_lines_splits_and_skips_blank() {
        let lines = parse_lines("a\tb\n\nc\td\r\n", '\t');
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].fields, vec!["a", "b"]);
        assert_eq!(lines[1].number, 3);
        assert_eq!(lines[1].fields, vec!["c", "d"]);
    }

    #[test]
    fn test_parse_lines_keeps_empty_fields() {
        let lines = parse_lines("a,,c", ',');
        assert_eq!(lines[0].fields, vec!["a", "", "c"]);
    }

    #[test]
    fn test_infer_columns() {
        assert_eq!(infer_columns(&parse_lines("x;y;z\n1;2", ';')), Some(3));
        assert_eq!(infer_columns(&[]), None);
    }

    #[test]
    fn test_fill_table_with_label() {
        let lines = parse_lines("Name,Qty\nbolt,12\n", ',');
        let mut table = Table::new(2, 2).unwrap();
        fill_table(&mut table, &lines, true).unwrap();

        assert_eq!(table.render(), "Name  Qty\n----  ---\nbolt  12 \n");
    }

    #[test]
    fn test_fill_table_reports_source_line_number() {
        let lines = parse_lines("a,b\n\nc\n", ',');
        let mut table = Table::new(2, 2).unwrap();
        let err = fill_table(&mut table, &lines, false).unwrap_err();

        assert!(matches!(err, AligntabError::InputLine { line: 3, .. }));
        assert_eq!(table.row_count(), 1);
    }
}
