use std::cmp::Reverse;

use crate::{
    diagram::model::Diagram,
    foundation::core::{GridPos, Partition},
    plan::moves::{MovePlan, MoveStage, StageKind, TransformKind},
};

/// Rearrange parts into canonical (non-increasing) order.
///
/// The sort is stable: parts of equal size keep their relative input
/// order. Each displaced part moves vertically as a block; columns are
/// untouched. Sorting an already-sorted diagram is a benign no-op reported
/// with `changed == false`, not an error.
#[tracing::instrument(skip(diagram))]
pub fn sort_parts(diagram: &mut Diagram) -> MovePlan {
    let partition = diagram.partition();
    if partition.is_canonical() {
        tracing::warn!(
            partition = ?partition.parts(),
            "sorting an already sorted partition sequence"
        );
        return MovePlan::no_op(TransformKind::SortParts);
    }

    let parts = partition.parts();
    let mut order: Vec<usize> = (0..parts.len()).collect();
    // sort_by_key is stable, so equal-size parts keep input order.
    order.sort_by_key(|&part| Reverse(parts[part]));

    let mut new_row_of_part = vec![0usize; parts.len()];
    for (new_row, &part) in order.iter().enumerate() {
        new_row_of_part[part] = new_row;
    }
    let sorted = order.iter().map(|&part| parts[part]).collect();

    let mut positions = Vec::with_capacity(diagram.cell_count());
    let mut moves = Vec::new();
    for cell in diagram.cells() {
        let to = GridPos::new(new_row_of_part[cell.pos.row], cell.pos.col);
        positions.push(to);
        if to != cell.pos {
            moves.push(diagram.plan_move(cell.id, cell.pos, to));
        }
    }

    // A permutation of valid parts is itself valid.
    let new_partition = Partition::from_parts_unchecked(sorted);
    tracing::debug!(
        from = ?diagram.partition().parts(),
        to = ?new_partition.parts(),
        "sorted parts"
    );

    diagram.publish(positions, new_partition);
    MovePlan::staged(
        TransformKind::SortParts,
        vec![MoveStage {
            kind: StageKind::Reorder,
            moves,
        }],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/sort.rs"]
mod tests;
