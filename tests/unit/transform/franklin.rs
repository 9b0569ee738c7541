use super::*;
use crate::{Diagram, FerryteError, GridPos, StageKind, TransformKind};

fn positions(d: &Diagram) -> Vec<GridPos> {
    d.cells().iter().map(|c| c.pos).collect()
}

#[test]
fn rejects_unsorted_diagrams() {
    let mut d = Diagram::from_parts(vec![5, 8, 2]).unwrap();
    let err = franklin_involute(&mut d).unwrap_err();
    assert!(matches!(err, FerryteError::UnsortedDiagram(_)));
    assert_eq!(d.partition().parts(), &[5, 8, 2]);
}

#[test]
fn fixed_point_family_is_a_benign_no_op() {
    // Full staircases whose bottom part equals the diagonal length or
    // exceeds it by one.
    for parts in [vec![2], vec![3, 2], vec![4, 3], vec![5, 4, 3], vec![6, 5, 4]] {
        let mut d = Diagram::from_parts(parts.clone()).unwrap();
        let before = positions(&d);
        let plan = franklin_involute(&mut d).unwrap();
        assert_eq!(plan.transform, TransformKind::FranklinInvolute);
        assert!(!plan.changed, "{parts:?} should be a fixed point");
        assert!(plan.stages.is_empty());
        assert_eq!(positions(&d), before);
    }
}

#[test]
fn tied_lengths_drop_the_staircase_into_a_new_bottom_part() {
    // [12,11,10,9,5,4]: diagonal length 4, bottom length 4 -> the tie goes
    // to the diagonal-to-bottom case.
    let mut d = Diagram::from_parts(vec![12, 11, 10, 9, 5, 4]).unwrap();
    let plan = franklin_involute(&mut d).unwrap();
    assert_eq!(d.partition().parts(), &[11, 10, 9, 8, 5, 4, 4]);
    assert!(plan.changed);
    assert_eq!(plan.stages.len(), 1);
    assert_eq!(plan.stages[0].kind, StageKind::DiagonalToBottom);
    assert_eq!(plan.move_count(), 4);
}

#[test]
fn bottom_shorter_climbs_onto_the_diagonal() {
    // [4,3,2,2]: diagonal length 3, bottom length 2 -> the bottom part's
    // two cells land on the ends of the first two parts.
    let mut d = Diagram::from_parts(vec![4, 3, 2, 2]).unwrap();
    let plan = franklin_involute(&mut d).unwrap();
    assert_eq!(d.partition().parts(), &[5, 4, 2]);
    assert_eq!(plan.stages.len(), 1);
    assert_eq!(plan.stages[0].kind, StageKind::BottomToDiagonal);
    assert_eq!(plan.move_count(), 2);

    // Leftmost bottom cell lands on the deeper target part.
    let mv = plan.stages[0]
        .moves
        .iter()
        .find(|m| m.from == GridPos::new(3, 0))
        .unwrap();
    assert_eq!(mv.to, GridPos::new(1, 3));
}

#[test]
fn boundary_cases_invert_each_other() {
    // diagonal_len == bottom_len (case 3) on one side, == bottom_len + 1
    // (case 2) on the other.
    let mut d = Diagram::from_parts(vec![5, 4, 2]).unwrap();
    let before = positions(&d);
    franklin_involute(&mut d).unwrap();
    assert_eq!(d.partition().parts(), &[4, 3, 2, 2]);
    franklin_involute(&mut d).unwrap();
    assert_eq!(d.partition().parts(), &[5, 4, 2]);
    assert_eq!(positions(&d), before);
}

#[test]
fn involution_restores_exact_cell_layout() {
    for parts in [
        vec![6, 4, 3],
        vec![7, 5, 2],
        vec![2, 1],
        vec![3],
        vec![4, 3, 2],
        vec![8, 7, 6, 5, 2],
    ] {
        let mut d = Diagram::from_parts(parts.clone()).unwrap();
        let before = positions(&d);
        let first = franklin_involute(&mut d).unwrap();
        assert!(first.changed, "{parts:?} is not a fixed point");
        let second = franklin_involute(&mut d).unwrap();
        assert!(second.changed);
        assert_eq!(positions(&d), before, "involution failed for {parts:?}");
        assert_eq!(d.partition().parts(), parts.as_slice());
    }
}

#[test]
fn cell_count_is_conserved() {
    for parts in [vec![12, 11, 10, 9, 5, 4], vec![6, 4, 3], vec![5, 4, 2]] {
        let mut d = Diagram::from_parts(parts).unwrap();
        let total = d.partition().total();
        franklin_involute(&mut d).unwrap();
        assert_eq!(d.partition().total(), total);
        assert_eq!(d.cell_count() as u64, total);
    }
}
