use super::*;
use crate::{Diagram, GridPos, StageKind, TransformKind};

#[test]
fn conjugates_the_showcase_partition() {
    let mut d = Diagram::from_parts(vec![7, 6, 5, 3, 1]).unwrap();
    let plan = conjugate(&mut d);
    assert_eq!(d.partition().parts(), &[5, 4, 3, 3, 2, 2, 1]);
    assert_eq!(plan.transform, TransformKind::Conjugate);
    assert!(plan.changed);
    assert_eq!(plan.stages.len(), 1);
    assert_eq!(plan.stages[0].kind, StageKind::Transpose);
}

#[test]
fn conjugation_is_an_involution_on_cell_positions() {
    let mut d = Diagram::from_parts(vec![7, 6, 5, 3, 1]).unwrap();
    let before: Vec<GridPos> = d.cells().iter().map(|c| c.pos).collect();
    conjugate(&mut d);
    conjugate(&mut d);
    let after: Vec<GridPos> = d.cells().iter().map(|c| c.pos).collect();
    assert_eq!(before, after);
    assert_eq!(d.partition().parts(), &[7, 6, 5, 3, 1]);
}

#[test]
fn corner_is_a_fixed_point_and_emits_no_move() {
    let mut d = Diagram::from_parts(vec![3, 2]).unwrap();
    let corner = d.corner().unwrap();
    let plan = conjugate(&mut d);
    assert!(plan.moves().all(|m| m.cell != corner));
    assert_eq!(d.corner(), Some(corner));
}

#[test]
fn single_cell_diagram_reports_no_motion() {
    let mut d = Diagram::from_parts(vec![1]).unwrap();
    let plan = conjugate(&mut d);
    assert!(!plan.changed);
    assert_eq!(plan.move_count(), 0);
    assert_eq!(d.partition().parts(), &[1]);
}

#[test]
fn cell_count_is_conserved() {
    let mut d = Diagram::from_parts(vec![4, 4, 2, 1]).unwrap();
    let total = d.partition().total();
    conjugate(&mut d);
    assert_eq!(d.partition().total(), total);
    assert_eq!(d.cell_count() as u64, total);
}

#[test]
fn layers_are_invariant_as_sets() {
    let mut d = Diagram::from_parts(vec![4, 3, 1]).unwrap();
    let sizes_before = d.layers().unwrap().sizes();
    conjugate(&mut d);
    assert_eq!(d.layers().unwrap().sizes(), sizes_before);
}
