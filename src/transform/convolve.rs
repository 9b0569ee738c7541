use crate::{
    diagram::model::Diagram,
    foundation::core::{GridPos, Partition},
    foundation::error::{FerryteError, FerryteResult},
    plan::moves::{MovePlan, MoveStage, StageKind, TransformKind},
};

/// Collapse each layer (hook) into a single row: the hook decomposition.
///
/// The new sequence is the layer sizes. The plan replays the algorithm's
/// sub-steps in order: for each layer, one [`StageKind::LayerShift`] stage
/// per step, walking every cell of the layer one slot along the
/// within-layer order (tail cells open a new column to the right); then a
/// single [`StageKind::Justify`] stage that removes the diagonal stagger,
/// landing every cell at `(layer, position_in_layer)`.
///
/// Requires at least two parts and a maximum part of at least two, and a
/// diagonally continuous diagram; both are checked before any mutation.
#[tracing::instrument(skip(diagram))]
pub fn convolve(diagram: &mut Diagram) -> FerryteResult<MovePlan> {
    if diagram.partition().len() < 2 || diagram.partition().max_part() < 2 {
        return Err(FerryteError::invalid_operation(
            "convolution requires at least two parts and a maximum part of at least two",
        ));
    }
    let layer_index = diagram.layers()?;
    let new_partition = Partition::from_parts_unchecked(layer_index.sizes());
    tracing::debug!(
        from = ?diagram.partition().parts(),
        to = ?new_partition.parts(),
        "convolving"
    );

    let mut current: Vec<GridPos> = diagram.cells().iter().map(|c| c.pos).collect();
    let mut stages = Vec::new();

    for (layer_no, layer) in layer_index.layers().iter().enumerate() {
        let deepest_row = layer
            .iter()
            .map(|&id| current[id.0 as usize].row)
            .max()
            .unwrap_or(layer_no);
        for step in 1..=deepest_row - layer_no {
            let slots: Vec<GridPos> = layer.iter().map(|&id| current[id.0 as usize]).collect();
            let mut moves = Vec::with_capacity(layer.len());
            for (slot, &id) in layer.iter().enumerate() {
                let from = slots[slot];
                // Move to the next cell's slot, or open a new column at
                // the tail of the hook's row arm.
                let to = match slots.get(slot + 1) {
                    Some(&next) => next,
                    None => GridPos::new(from.row, from.col + 1),
                };
                current[id.0 as usize] = to;
                moves.push(diagram.plan_move(id, from, to));
            }
            stages.push(MoveStage {
                kind: StageKind::LayerShift {
                    layer: layer_no,
                    step,
                },
                moves,
            });
        }
    }

    let mut positions = current.clone();
    let mut justify = Vec::new();
    for (layer_no, layer) in layer_index.layers().iter().enumerate() {
        for (slot, &id) in layer.iter().enumerate() {
            let from = current[id.0 as usize];
            let to = GridPos::new(layer_no, slot);
            positions[id.0 as usize] = to;
            if to != from {
                justify.push(diagram.plan_move(id, from, to));
            }
        }
    }
    stages.push(MoveStage {
        kind: StageKind::Justify,
        moves: justify,
    });

    diagram.publish(positions, new_partition);
    Ok(MovePlan::staged(TransformKind::Convolve, stages))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/convolve.rs"]
mod tests;
