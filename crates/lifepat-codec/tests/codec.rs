//! Integration tests for the text codec.

use lifepat_codec::{PatternExport, decode, encode, find_preset};
use lifepat_model::{AliveSet, Cell, GridDims, alive_set, bounding_box};
use proptest::prelude::*;

fn dims(rows: i32, cols: i32) -> GridDims {
    GridDims::new(rows, cols).expect("valid dims")
}

/// Places `cells` so that their bounding box sits where a centred pattern would.
fn place_centred(cells: &AliveSet, grid: GridDims) -> AliveSet {
    let rect = bounding_box(cells).expect("non-empty pattern");
    let top = (grid.rows() - rect.height()).div_euclid(2);
    let left = (grid.cols() - rect.width()).div_euclid(2);
    cells
        .iter()
        .map(|cell| {
            cell.offset(top - rect.min_row, left - rect.min_col)
                .expect("offset stays in range")
        })
        .collect()
}

#[test]
fn glider_wrapped_snapshot() {
    let glider = find_preset("glider").expect("glider preset");
    let cells = glider.decode(dims(12, 12)).expect("decode glider");
    let wrapped = encode(&cells).wrapped(glider.name);
    insta::assert_snapshot!("glider_wrapped", wrapped);
}

#[test]
fn encode_then_decode_keeps_block_text() {
    let text = ".O..O\nO....\nO...O\nOOOO.";
    let cells = decode(text, dims(20, 20)).expect("decode");
    assert_eq!(encode(&cells), PatternExport::Block(text.to_string()));
}

#[test]
fn every_preset_fits_large_grid() {
    for preset in lifepat_codec::PRESETS {
        let cells = preset.decode(dims(40, 40)).expect("decode preset");
        let expected = preset.text.chars().filter(|ch| *ch == 'O').count();
        assert_eq!(cells.len(), expected, "{} lost cells", preset.name);
    }
}

#[test]
fn wide_pattern_is_clipped_not_rejected() {
    let cells = decode("O.......O", dims(3, 5)).expect("decode");
    // start_col = (5 - 9) div 2 = -2: the first glyph lands at -2, the last at 6.
    assert!(cells.is_empty());

    let cells = decode("OOOOOOOOO", dims(3, 5)).expect("decode");
    assert_eq!(cells.len(), 5);
    assert!(cells.iter().all(|cell| cell.row == 1));
}

#[test]
fn single_line_centres_on_middle_row() {
    let cells = decode("OOO", dims(5, 5)).expect("decode");
    assert_eq!(cells, alive_set([(2, 1), (2, 2), (2, 3)]));
}

fn pattern_strategy() -> impl Strategy<Value = AliveSet> {
    prop::collection::btree_set((0i32..8, 0i32..8), 1..24)
        .prop_map(|cells| cells.into_iter().map(Cell::from).collect())
}

proptest! {
    #[test]
    fn decode_inverts_encode_for_centred_patterns(
        pattern in pattern_strategy(),
        rows in 8i32..20,
        cols in 8i32..20,
    ) {
        let grid = dims(rows, cols);
        let placed = place_centred(&pattern, grid);
        let export = encode(&placed);
        let block = export.block().expect("non-empty export");
        prop_assert_eq!(decode(block, grid).expect("decode"), placed);
    }

    #[test]
    fn encoded_rows_share_one_width(pattern in pattern_strategy()) {
        let export = encode(&pattern);
        let block = export.block().expect("non-empty export");
        let rect = bounding_box(&pattern).expect("box");
        prop_assert_eq!(block.lines().count(), rect.height() as usize);
        prop_assert!(block.lines().all(|line| line.len() == rect.width() as usize));
    }
}
