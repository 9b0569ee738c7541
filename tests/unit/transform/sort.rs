use super::*;
use crate::{CellId, Diagram, GridPos, StageKind, TransformKind};

#[test]
fn sorts_the_showcase_partition() {
    let mut d = Diagram::from_parts(vec![3, 11, 8, 12, 7, 14]).unwrap();
    let plan = sort_parts(&mut d);
    assert_eq!(d.partition().parts(), &[14, 12, 11, 8, 7, 3]);
    assert!(plan.changed);
    assert_eq!(plan.stages.len(), 1);
    assert_eq!(plan.stages[0].kind, StageKind::Reorder);
}

#[test]
fn columns_never_change() {
    let mut d = Diagram::from_parts(vec![2, 5, 3]).unwrap();
    let before: Vec<(CellId, usize)> = d.cells().iter().map(|c| (c.id, c.pos.col)).collect();
    sort_parts(&mut d);
    let after: Vec<(CellId, usize)> = d.cells().iter().map(|c| (c.id, c.pos.col)).collect();
    assert_eq!(before, after);
}

#[test]
fn already_sorted_input_is_a_benign_no_op() {
    let mut d = Diagram::from_parts(vec![5, 5, 3, 1]).unwrap();
    let before: Vec<GridPos> = d.cells().iter().map(|c| c.pos).collect();
    let plan = sort_parts(&mut d);
    assert_eq!(plan.transform, TransformKind::SortParts);
    assert!(!plan.changed);
    assert!(plan.stages.is_empty());
    let after: Vec<GridPos> = d.cells().iter().map(|c| c.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn sorting_twice_equals_sorting_once() {
    let mut d = Diagram::from_parts(vec![1, 4, 2, 4]).unwrap();
    sort_parts(&mut d);
    let once: Vec<GridPos> = d.cells().iter().map(|c| c.pos).collect();
    let plan = sort_parts(&mut d);
    assert!(!plan.changed);
    let twice: Vec<GridPos> = d.cells().iter().map(|c| c.pos).collect();
    assert_eq!(once, twice);
}

#[test]
fn equal_parts_keep_their_input_order() {
    // Parts 1 and 3 are both of size 4; after sorting, part 1's cells must
    // occupy the higher of the two rows.
    let mut d = Diagram::from_parts(vec![1, 4, 2, 4]).unwrap();
    let first_of_part_1 = d.cell_at(GridPos::new(1, 0)).unwrap();
    let first_of_part_3 = d.cell_at(GridPos::new(3, 0)).unwrap();
    sort_parts(&mut d);
    assert_eq!(d.cell(first_of_part_1).unwrap().pos, GridPos::new(0, 0));
    assert_eq!(d.cell(first_of_part_3).unwrap().pos, GridPos::new(1, 0));
    assert_eq!(d.partition().parts(), &[4, 4, 2, 1]);
}

#[test]
fn displacement_is_applied_to_whole_parts() {
    let mut d = Diagram::from_parts(vec![2, 3]).unwrap();
    let plan = sort_parts(&mut d);
    // Every cell of both parts moves exactly one row.
    assert_eq!(plan.move_count(), 5);
    for mv in plan.moves() {
        assert_eq!(mv.from.col, mv.to.col);
        assert_eq!(mv.from.row.abs_diff(mv.to.row), 1);
    }
    assert_eq!(d.partition().parts(), &[3, 2]);
}
