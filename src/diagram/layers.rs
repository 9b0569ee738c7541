use std::cmp::Reverse;

use crate::{
    diagram::model::Diagram,
    foundation::core::CellId,
    foundation::error::{FerryteError, FerryteResult},
};

#[derive(Clone, Debug)]
/// Cells grouped by diagonal distance from the corner.
///
/// Layer `i` is the hook of cells with `min(row, col) == i`. Within a layer,
/// cells are totally ordered: A precedes B iff A is strictly lower
/// (`A.row > B.row`), or on the same row A is further left
/// (`A.col < B.col`). Position 0 is the bottom of the hook's column arm,
/// ascending to the corner, then left to right along the row arm. The
/// convolution shift walks cells along exactly this order.
pub struct LayerIndex {
    layers: Vec<Vec<CellId>>,
}

impl LayerIndex {
    /// Group a diagram's cells into layers, ordered within each layer.
    ///
    /// Recomputed purely from current cell positions. Fails with
    /// [`FerryteError::FragmentedLayer`] when diagonal continuity is
    /// violated: a row `i` shorter than its index followed by a wider row
    /// `j > i` leaves a gap in the hook that layer `min(row, col)` can no
    /// longer describe.
    pub fn compute(diagram: &Diagram) -> FerryteResult<Self> {
        let row_lengths = row_lengths(diagram);
        for (row, &len) in row_lengths.iter().enumerate() {
            if (len as usize) < row {
                for (offset, &later_len) in row_lengths[row + 1..].iter().enumerate() {
                    if later_len > len {
                        return Err(FerryteError::fragmented(row, row + 1 + offset));
                    }
                }
            }
        }

        let layer_count = diagram
            .cells()
            .iter()
            .map(|c| c.pos.layer())
            .max()
            .map_or(0, |deepest| deepest + 1);
        let mut layers: Vec<Vec<(CellId, Reverse<usize>, usize)>> = vec![Vec::new(); layer_count];
        for cell in diagram.cells() {
            layers[cell.pos.layer()].push((cell.id, Reverse(cell.pos.row), cell.pos.col));
        }
        let layers = layers
            .into_iter()
            .map(|mut layer| {
                layer.sort_by_key(|&(_, row, col)| (row, col));
                layer.into_iter().map(|(id, _, _)| id).collect()
            })
            .collect();
        Ok(Self { layers })
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Cells of layer `i` in within-layer order.
    pub fn layer(&self, i: usize) -> &[CellId] {
        &self.layers[i]
    }

    /// All layers, outermost corner hook first.
    pub fn layers(&self) -> &[Vec<CellId>] {
        &self.layers
    }

    /// Layer sizes; convolution's target partition sequence.
    pub fn sizes(&self) -> Vec<u32> {
        self.layers.iter().map(|layer| layer.len() as u32).collect()
    }
}

fn row_lengths(diagram: &Diagram) -> Vec<u32> {
    let rows = diagram
        .cells()
        .iter()
        .map(|c| c.pos.row)
        .max()
        .map_or(0, |m| m + 1);
    let mut lengths = vec![0u32; rows];
    for cell in diagram.cells() {
        lengths[cell.pos.row] += 1;
    }
    lengths
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/layers.rs"]
mod tests;
