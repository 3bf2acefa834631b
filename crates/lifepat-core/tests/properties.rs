//! Property tests for transforms and history.

use lifepat_core::{Axis, PatternEditor, transform};
use lifepat_model::{AliveSet, Cell, GridDims};
use proptest::prelude::*;

const ROWS: i32 = 11;
const COLS: i32 = 11;

fn grid() -> GridDims {
    GridDims::new(ROWS, COLS).expect("valid dims")
}

fn cells_in(lo: i32, hi: i32) -> impl Strategy<Value = AliveSet> {
    prop::collection::btree_set((lo..hi, lo..hi).prop_map(Cell::from), 0..20)
}

#[derive(Debug, Clone)]
enum Op {
    Toggle(i32, i32),
    Shift(i32, i32),
    Rotate,
    FlipH,
    FlipV,
    Center,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ROWS, 0..COLS).prop_map(|(r, c)| Op::Toggle(r, c)),
        (-3i32..=3, -3i32..=3).prop_map(|(dx, dy)| Op::Shift(dx, dy)),
        Just(Op::Rotate),
        Just(Op::FlipH),
        Just(Op::FlipV),
        Just(Op::Center),
        Just(Op::Clear),
    ]
}

fn run(ed: &mut PatternEditor, op: &Op) {
    match *op {
        Op::Toggle(r, c) => ed.toggle(r, c),
        Op::Shift(dx, dy) => ed.shift(dx, dy),
        Op::Rotate => ed.rotate90(),
        Op::FlipH => ed.flip(Axis::Horizontal),
        Op::FlipV => ed.flip(Axis::Vertical),
        Op::Center => ed.center(),
        Op::Clear => ed.clear(),
    }
}

proptest! {
    #[test]
    fn center_is_idempotent(cells in cells_in(0, ROWS)) {
        let once = transform::center(&cells, grid());
        prop_assert_eq!(transform::center(&once, grid()), once.clone());
        prop_assert_eq!(once.len(), cells.len());
    }

    #[test]
    fn flips_are_involutions(cells in cells_in(0, ROWS)) {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let twice = transform::flip(&transform::flip(&cells, grid(), axis), grid(), axis);
            prop_assert_eq!(&twice, &cells);
        }
    }

    #[test]
    fn four_rotations_restore_pattern_away_from_edges(cells in cells_in(1, ROWS)) {
        let mut rotated = cells.clone();
        for _ in 0..4 {
            rotated = transform::rotate90_clockwise(&rotated, grid());
        }
        prop_assert_eq!(rotated, cells);
    }

    #[test]
    fn undo_restores_and_redo_reapplies(ops in prop::collection::vec(op(), 1..12), last in op()) {
        let mut ed = PatternEditor::new(grid(), 50);
        for op in &ops {
            run(&mut ed, op);
        }
        let before = ed.alive().clone();
        run(&mut ed, &last);
        let after = ed.alive().clone();

        prop_assert!(ed.undo());
        prop_assert_eq!(ed.alive(), &before);
        prop_assert!(ed.redo());
        prop_assert_eq!(ed.alive(), &after);
    }

    #[test]
    fn export_then_import_matches_centred_pattern(cells in cells_in(0, ROWS)) {
        prop_assume!(!cells.is_empty());
        let centred = transform::center(&cells, grid());

        let mut source = PatternEditor::new(grid(), 50);
        source.execute(lifepat_core::EditCommand::Replace(cells));
        let block = source.export().block().map(str::to_owned).expect("non-empty export");

        let mut target = PatternEditor::new(grid(), 50);
        target.import_text(&block).expect("import");
        prop_assert_eq!(target.alive(), &centred);
    }
}

#[test]
fn history_keeps_only_newest_fifty() {
    let mut ed = PatternEditor::new(grid(), 50);
    for i in 0..60 {
        ed.toggle(i / COLS, i % COLS);
    }
    assert_eq!(ed.history().undo_depth(), 50);

    let mut steps = 0;
    while ed.undo() {
        steps += 1;
    }
    assert_eq!(steps, 50);
    // The ten oldest toggles can no longer be undone.
    assert_eq!(ed.alive().len(), 10);
}
