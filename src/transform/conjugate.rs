use crate::{
    diagram::model::Diagram,
    plan::moves::{MovePlan, MoveStage, StageKind, TransformKind},
};

/// Transpose the diagram across its main diagonal.
///
/// Every cell moves to `(col, row)`; the new sequence counts, for each
/// column index `i`, the parts larger than `i`. An involution: conjugating
/// twice restores every cell's position. The corner is a fixed point and
/// layers are invariant as sets, so the plan is a single [`StageKind::Transpose`]
/// stage holding the off-diagonal cells.
#[tracing::instrument(skip(diagram))]
pub fn conjugate(diagram: &mut Diagram) -> MovePlan {
    let new_partition = diagram.partition().conjugate();
    tracing::debug!(
        from = ?diagram.partition().parts(),
        to = ?new_partition.parts(),
        "conjugating"
    );

    let mut positions = Vec::with_capacity(diagram.cell_count());
    let mut moves = Vec::new();
    for cell in diagram.cells() {
        let to = cell.pos.transpose();
        positions.push(to);
        if to != cell.pos {
            moves.push(diagram.plan_move(cell.id, cell.pos, to));
        }
    }

    diagram.publish(positions, new_partition);
    MovePlan::staged(
        TransformKind::Conjugate,
        vec![MoveStage {
            kind: StageKind::Transpose,
            moves,
        }],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/conjugate.rs"]
mod tests;
