//! Tests for table width tracking and re-alignment

use super::{Table, DEFAULT_SPACING};
use crate::error::AligntabError;

fn demo_table() -> Table {
    let mut table = Table::new(3, DEFAULT_SPACING).unwrap();
    table.add_label(&["Name", "age", "Address"]).unwrap();
    table.write_line(&["abc", "999", "abc"]).unwrap();
    table.write_line(&["adf", "123", "ope"]).unwrap();
    table
}

#[test]
fn test_new_rejects_zero_columns() {
    let result = Table::new(0, 2);
    assert!(matches!(result, Err(AligntabError::NoColumns)));
}

#[test]
fn test_new_table_is_empty() {
    let table = Table::new(2, 2).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.column_widths(), &[0, 0]);
    assert_eq!(table.render(), "");
}

#[test]
fn test_demo_scenario() {
    let table = demo_table();

    assert_eq!(table.column_widths(), &[4, 3, 7]);
    let expected = "Name  age  Address\n\
                    ----  ---  -------\n\
                    abc   999  abc    \n\
                    adf   123  ope    \n";
    assert_eq!(table.render(), expected);
}

#[test]
fn test_later_wider_value_realigns_earlier_rows() {
    let mut table = Table::new(2, 1).unwrap();
    table.write_line(&["a", "b"]).unwrap();
    table.write_line(&["ccc", "d"]).unwrap();
    table.write_line(&["e", "ffff"]).unwrap();

    let lines: Vec<String> = table.rows().iter().map(|r| r.render()).collect();
    assert_eq!(lines, vec!["a   b   ", "ccc d   ", "e   ffff"]);
}

#[test]
fn test_widths_are_monotonic_and_track_maximum() {
    let mut table = Table::new(2, 2).unwrap();
    let lines = [["abcd", "x"], ["a", "xyz"], ["ab", ""], ["abcdef", "x"]];

    let mut previous = vec![0, 0];
    let mut maximum = vec![0, 0];
    for line in lines {
        table.write_line(&line).unwrap();
        for (i, value) in line.iter().enumerate() {
            maximum[i] = maximum[i].max(value.len());
        }
        let widths = table.column_widths().to_vec();
        assert!(widths.iter().zip(&previous).all(|(now, before)| now >= before));
        assert_eq!(widths, maximum);
        previous = widths;
    }
}

#[test]
fn test_every_row_has_same_boundaries() {
    let mut table = Table::new(3, 3).unwrap();
    table.write_line(&["x", "yy", "zzz"]).unwrap();
    table.write_line(&["longer one", "", "z"]).unwrap();
    table.write_line(&["", "middle!", ""]).unwrap();
    table.write_line(&["q", "r", "a much longer last cell"]).unwrap();

    let widths = table.column_widths().to_vec();
    for row in table.rows() {
        assert_eq!(row.widths(), widths);
        let rendered = row.render();
        assert_eq!(rendered.len(), widths.iter().sum::<usize>() + 3 * 2);

        let second = widths[0] + 3;
        let third = second + widths[1] + 3;
        assert_eq!(&rendered[widths[0]..second], "   ");
        assert_eq!(&rendered[second + widths[1]..third], "   ");
    }
}

#[test]
fn test_short_value_padded_to_existing_watermark() {
    let mut table = Table::new(1, 2).unwrap();
    table.write_line(&["abcdef"]).unwrap();
    table.write_line(&["a"]).unwrap();

    assert_eq!(table.rows()[1].render(), "a     ");
}

#[test]
fn test_arity_mismatch_leaves_table_unchanged() {
    let mut table = demo_table();
    let before_rows = table.row_count();
    let before_widths = table.column_widths().to_vec();
    let before_render = table.render();

    let too_few = table.write_line(&["only", "two"]);
    assert!(matches!(
        too_few,
        Err(AligntabError::ArityMismatch {
            expected: 3,
            found: 2
        })
    ));

    let too_many = table.write_line(&["a", "b", "c", "a very long fourth value"]);
    assert!(matches!(
        too_many,
        Err(AligntabError::ArityMismatch {
            expected: 3,
            found: 4
        })
    ));

    assert_eq!(table.row_count(), before_rows);
    assert_eq!(table.column_widths(), before_widths.as_slice());
    assert_eq!(table.render(), before_render);
}

#[test]
fn test_add_label_underline_matches_name_width() {
    let mut table = Table::new(2, 2).unwrap();
    table.add_label(&["Name", "Age"]).unwrap();

    let underline = &table.rows()[1];
    assert_eq!(underline.cells()[0].render(), "----");
    assert_eq!(underline.cells()[1].render(), "---");
}

#[test]
fn test_add_label_underline_is_padded_like_any_cell() {
    let mut table = Table::new(2, 2).unwrap();
    table.add_label(&["id", "n"]).unwrap();
    table.write_line(&["12345", "value"]).unwrap();

    let underline = &table.rows()[1];
    assert_eq!(underline.render(), "--     -    ");
}

#[test]
fn test_add_label_wrong_arity_writes_nothing() {
    let mut table = Table::new(3, 2).unwrap();
    let result = table.add_label(&["a", "b"]);
    assert!(result.is_err());
    assert!(table.is_empty());
}

#[test]
fn test_header_and_footer() {
    let mut table = Table::new(2, 1).unwrap();
    table.set_header("== report ==");
    table.set_footer("-- end --");
    table.write_line(&["a", "b"]).unwrap();

    assert_eq!(table.render(), "== report ==\na b\n-- end --");
}

#[test]
fn test_empty_header_is_omitted_and_footer_has_no_newline() {
    let table = Table::new(1, 2).unwrap().with_footer("done");
    assert_eq!(table.render(), "done");

    let mut replaced = Table::new(1, 2).unwrap().with_header("old");
    replaced.set_header("");
    replaced.write_line(&["x"]).unwrap();
    assert_eq!(replaced.render(), "x\n");
}

#[test]
fn test_render_is_repeatable() {
    let mut table = demo_table();
    assert_eq!(table.render(), table.render());
    assert_eq!(table.to_string(), table.render());

    table.write_line(&["much longer name", "1", "2"]).unwrap();
    assert!(table.render().starts_with("Name              age"));
}

#[test]
fn test_extend_lines_reports_rejected_line() {
    let mut table = Table::new(2, 2).unwrap();
    let lines = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string()],
        vec!["d".to_string(), "e".to_string()],
    ];

    let err = table.extend_lines(lines).unwrap_err();
    assert!(matches!(err, AligntabError::InputLine { line: 2, .. }));
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_wide_glyph_columns_align() {
    let mut table = Table::new(2, 1).unwrap();
    table.write_line(&["名前", "x"]).unwrap();
    table.write_line(&["abcde", "y"]).unwrap();

    assert_eq!(table.column_widths(), &[5, 1]);
    assert_eq!(table.rows()[0].render(), "名前  x");
}
