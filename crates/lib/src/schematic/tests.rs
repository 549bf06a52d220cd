use crate::grid::GridExt;
use crate::input::IStr;

use super::{extract_number, gear_ratio, Schematic, SchematicError};

const SAMPLE: &[u8] = b"467..114..\n...*......\n..35..633.\n......#...\n617*......\n.....+.58.\n..592.....\n......755.\n...$.*....\n.664.598..\n";

fn schematic(data: &'static [u8]) -> Schematic {
    Schematic::from_input(IStr::new(data, 0)).unwrap()
}

#[test]
fn test_sample() {
    let mut s = schematic(SAMPLE);
    assert_eq!(s.sum_gear_ratios(), 467835);
}

#[test]
fn test_dimensions() {
    let s = schematic(SAMPLE);
    assert_eq!(s.rows_len(), 10);
    assert_eq!(s.columns_len(), 10);
    assert!(s.rows().all(|row| row.len() == 10));
}

#[test]
fn test_single_gear() {
    let mut s = schematic(b"1*1\n");
    assert_eq!(s.sum_gear_ratios(), 1);
}

#[test]
fn test_bare_star() {
    let mut s = schematic(b"*..\n");
    assert_eq!(s.sum_gear_ratios(), 0);
}

#[test]
fn test_no_gears() {
    let mut s = schematic(b"123\n");
    assert_eq!(s.sum_gear_ratios(), 0);
}

#[test]
fn test_exactly_two() {
    let mut s = schematic(b"*1\n");
    assert_eq!(s.sum_gear_ratios(), 0);

    let mut s = schematic(b"1.1\n.*.\n1..\n");
    assert_eq!(s.sum_gear_ratios(), 0);

    let mut s = schematic(b"2.\n*3\n");
    assert_eq!(s.sum_gear_ratios(), 6);
}

#[test]
fn test_consumed_once() {
    // The first gear consumes both of its neighbors, leaving the second gear
    // with a single number. Its neighbor is still consumed even though the
    // gear ends up invalid.
    let mut s = schematic(b"1*1*1\n");
    assert_eq!(s.sum_gear_ratios(), 1);
    assert_eq!(s.to_string(), ".*.*.\n");
    assert_eq!(s.sum_gear_ratios(), 0);
}

#[test]
fn test_corner_clipping() {
    let mut s = schematic(b"*1\n1.\n");
    assert_eq!(s.sum_gear_ratios(), 1);

    let mut s = schematic(b"1.2\n.*.\n");
    assert_eq!(s.sum_gear_ratios(), 2);
}

#[test]
fn test_full_window() {
    // The densest window possible: two runs in every covered row, filling
    // the collection buffer completely.
    let mut s = schematic(b"1.2\n3*4\n5.6\n");
    assert_eq!(s.sum_gear_ratios(), 0);
    assert_eq!(s.to_string(), "...\n.*.\n...\n");
}

#[test]
fn test_zero_number_invisible() {
    // A zero extracts to the same value as a blank cell, so it neither
    // pairs with another number nor spoils an otherwise valid pair. It is
    // still consumed off the grid.
    let mut s = schematic(b"1.3\n.*.\n");
    assert_eq!(s.sum_gear_ratios(), 3);

    let mut s = schematic(b"0.3\n.*.\n.7.\n");
    assert_eq!(s.sum_gear_ratios(), 21);
    assert_eq!(s.to_string(), "...\n.*.\n...\n");
}

#[test]
fn test_not_a_gear() {
    let mut cells = *b"1.1";
    let mut grid = cells.as_grid_mut(3);

    assert_eq!(gear_ratio(&mut grid, 0, 1), 0);
    assert_eq!(gear_ratio(&mut grid, 9, 9), 0);
    assert_eq!(&cells, b"1.1");
}

#[test]
fn test_extract_full_number() {
    let mut cells = *b"123";
    assert_eq!(extract_number(&mut cells, 1), 123);
    assert_eq!(&cells, b"...");
}

#[test]
fn test_extract_any_column() {
    for column in 1..=4 {
        let mut cells = *b".4567.";
        assert_eq!(extract_number(&mut cells, column), 4567);
        assert_eq!(&cells, b"......");
    }
}

#[test]
fn test_extract_non_digit() {
    let mut cells = *b"12.34";
    assert_eq!(extract_number(&mut cells, 2), 0);
    assert_eq!(extract_number(&mut cells, 10), 0);
    assert_eq!(&cells, b"12.34");
}

#[test]
fn test_ragged() {
    let err = Schematic::from_input(IStr::new(b"abc\nab\n", 0)).unwrap_err();
    assert!(matches!(
        err,
        SchematicError::Ragged {
            line: 2,
            len: 2,
            columns: 3
        }
    ));
    assert_eq!(err.to_string(), "line 2 has 2 columns, expected 3");
}

#[test]
fn test_empty() {
    let err = Schematic::from_input(IStr::new(b"", 0)).unwrap_err();
    assert!(matches!(err, SchematicError::Empty));

    let err = Schematic::from_input(IStr::new(b"\n", 0)).unwrap_err();
    assert!(matches!(err, SchematicError::Empty));
}

#[test]
fn test_display_round_trip() {
    let first = schematic(SAMPLE);
    assert_eq!(first.to_string().as_bytes(), SAMPLE);

    let rendered = first.to_string().into_bytes();
    let second = Schematic::from_input(IStr::new(Box::leak(rendered.into_boxed_slice()), 0)).unwrap();
    assert_eq!(first, second);
}
