use crate::{
    diagram::model::Diagram,
    foundation::core::{GridPos, Partition},
    foundation::error::{FerryteError, FerryteResult},
    plan::moves::{MovePlan, MoveStage, StageKind, TransformKind},
};

/// Franklin's involution: trade the bottom part against the corner
/// staircase diagonal.
///
/// On a canonically sorted diagram, let the diagonal group be the maximal
/// staircase prefix (part `k` belongs iff `k == 0` or
/// `p[k] == p[k-1] - 1`) and the bottom group be the last part. Exactly one
/// of three cases applies:
///
/// 1. fixed point — the diagonal spans every part and the bottom length is
///    the diagonal length or one more: benign no-op (`changed == false`);
/// 2. diagonal longer than bottom — the bottom part's cells climb onto the
///    ends of the first `bottom_len` parts ([`StageKind::BottomToDiagonal`]);
/// 3. otherwise — the staircase-end cells drop down to form a new bottom
///    part of size `diagonal_len` ([`StageKind::DiagonalToBottom`]).
///
/// The two moving cases mirror each other and pair partitions of opposite
/// part-count parity, the mechanism behind Euler's pentagonal number
/// theorem.
#[tracing::instrument(skip(diagram))]
pub fn franklin_involute(diagram: &mut Diagram) -> FerryteResult<MovePlan> {
    if !diagram.partition().is_canonical() {
        return Err(FerryteError::unsorted(
            "franklin involution requires a canonically sorted diagram",
        ));
    }

    let parts = diagram.partition().parts().to_vec();
    let count = parts.len();
    let mut diagonal_len = 1;
    while diagonal_len < count && parts[diagonal_len] == parts[diagonal_len - 1] - 1 {
        diagonal_len += 1;
    }
    let bottom_len = parts[count - 1] as usize;

    if (bottom_len == diagonal_len || bottom_len == diagonal_len + 1) && diagonal_len == count {
        tracing::debug!(partition = ?parts, "franklin involution fixes this partition");
        return Ok(MovePlan::no_op(TransformKind::FranklinInvolute));
    }

    let mut positions = Vec::with_capacity(diagram.cell_count());
    let mut moves = Vec::new();

    let (kind, new_parts) = if diagonal_len > bottom_len {
        // The bottom part's cell at column j lands after the last cell of
        // part bottom_len - 1 - j, tracing the vacated diagonal.
        for cell in diagram.cells() {
            let to = if cell.pos.row == count - 1 {
                let target = bottom_len - 1 - cell.pos.col;
                GridPos::new(target, parts[target] as usize)
            } else {
                cell.pos
            };
            positions.push(to);
            if to != cell.pos {
                moves.push(diagram.plan_move(cell.id, cell.pos, to));
            }
        }

        let mut new_parts = parts[..count - 1].to_vec();
        for part in new_parts.iter_mut().take(bottom_len) {
            *part += 1;
        }
        (StageKind::BottomToDiagonal, new_parts)
    } else {
        // The staircase end of part i lands in a fresh bottom row, its
        // column mirroring its depth along the diagonal.
        for cell in diagram.cells() {
            let staircase_end =
                cell.pos.row < diagonal_len && cell.pos.col == parts[cell.pos.row] as usize - 1;
            let to = if staircase_end {
                GridPos::new(count, diagonal_len - 1 - cell.pos.row)
            } else {
                cell.pos
            };
            positions.push(to);
            if to != cell.pos {
                moves.push(diagram.plan_move(cell.id, cell.pos, to));
            }
        }

        let mut new_parts = parts.clone();
        for part in new_parts.iter_mut().take(diagonal_len) {
            *part -= 1;
        }
        new_parts.push(diagonal_len as u32);
        (StageKind::DiagonalToBottom, new_parts)
    };

    let new_partition = Partition::new(new_parts)?;
    tracing::debug!(
        from = ?parts,
        to = ?new_partition.parts(),
        "franklin involuted"
    );

    diagram.publish(positions, new_partition);
    Ok(MovePlan::staged(
        TransformKind::FranklinInvolute,
        vec![MoveStage { kind, moves }],
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/franklin.rs"]
mod tests;
