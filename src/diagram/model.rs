use crate::{
    diagram::layers::LayerIndex,
    foundation::core::{CellId, GridPos, Partition, Point},
    foundation::error::{FerryteError, FerryteResult},
    plan::moves::CellMove,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// A single cell of a diagram: stable identity plus current grid position.
pub struct Cell {
    /// Identity, stable across transforms.
    pub id: CellId,
    /// Current grid position.
    pub pos: GridPos,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Geometric placement of a diagram in world space.
///
/// Rows grow downward: the cell at grid `(row, col)` is centered at
/// `origin + spacing * (col, row)`. A renderer with an upward y axis flips
/// the sign itself.
pub struct DiagramGeometry {
    /// World-space center of the corner cell `(0, 0)`.
    pub origin: Point,
    /// Distance between the centers of grid-adjacent cells.
    pub spacing: f64,
}

impl Default for DiagramGeometry {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            spacing: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
/// A partition materialized as a grid of cells.
///
/// The diagram owns its cells exclusively; transforms mutate cell positions
/// in place and republish the partition sequence atomically. Derived views
/// (parts, layers, corner, coordinate lookup) are recomputed from current
/// cell positions on every query, never patched incrementally.
pub struct Diagram {
    cells: Vec<Cell>, // index == CellId
    partition: Partition,
    geometry: DiagramGeometry,
}

impl Diagram {
    /// Materialize a validated partition with default geometry.
    pub fn from_partition(partition: &Partition) -> Self {
        Self::build(partition.clone(), DiagramGeometry::default())
    }

    /// Validate a raw part sequence and materialize it with default
    /// geometry. This is the one-call boundary constructor.
    pub fn from_parts(parts: Vec<u32>) -> FerryteResult<Self> {
        Ok(Self::from_partition(&Partition::new(parts)?))
    }

    /// Materialize a validated partition at an explicit world placement.
    pub fn with_geometry(partition: &Partition, geometry: DiagramGeometry) -> FerryteResult<Self> {
        if !geometry.spacing.is_finite() || geometry.spacing <= 0.0 {
            return Err(FerryteError::invalid_operation(
                "diagram spacing must be finite and positive",
            ));
        }
        Ok(Self::build(partition.clone(), geometry))
    }

    fn build(partition: Partition, geometry: DiagramGeometry) -> Self {
        let mut cells = Vec::with_capacity(partition.total() as usize);
        for (row, &part) in partition.parts().iter().enumerate() {
            for col in 0..part as usize {
                cells.push(Cell {
                    id: CellId(cells.len() as u32),
                    pos: GridPos::new(row, col),
                });
            }
        }
        Self {
            cells,
            partition,
            geometry,
        }
    }

    /// Current partition sequence.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// World placement of this diagram.
    pub fn geometry(&self) -> DiagramGeometry {
        self.geometry
    }

    /// All cells, indexed by [`CellId`].
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total cell count; invariant under every transform.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Look up a cell by id.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0 as usize)
    }

    /// Look up the cell currently occupying a grid position.
    pub fn cell_at(&self, pos: GridPos) -> Option<CellId> {
        self.cells.iter().find(|c| c.pos == pos).map(|c| c.id)
    }

    /// The corner cell at `(0, 0)`. `None` only for a degenerate empty
    /// diagram, which no constructor produces.
    pub fn corner(&self) -> Option<CellId> {
        self.cell_at(GridPos::new(0, 0))
    }

    /// Cells grouped by row, each row ordered by column; a fresh snapshot
    /// derived from current cell positions.
    pub fn parts(&self) -> Vec<Vec<CellId>> {
        let rows = self.cells.iter().map(|c| c.pos.row).max().map_or(0, |m| m + 1);
        let mut parts = vec![Vec::new(); rows];
        for cell in &self.cells {
            if let Some(part) = parts.get_mut(cell.pos.row) {
                part.push(cell.id);
            }
        }
        for part in &mut parts {
            part.sort_by_key(|&id| self.cells[id.0 as usize].pos.col);
        }
        parts
    }

    /// Cells grouped by diagonal distance from the corner; a fresh
    /// snapshot. Enforces diagonal continuity.
    pub fn layers(&self) -> FerryteResult<LayerIndex> {
        LayerIndex::compute(self)
    }

    /// Geometric distance between grid-adjacent cells, or `0.0` for a
    /// diagram with fewer than two cells (no shift is meaningful there).
    pub fn unit_spacing(&self) -> f64 {
        if self.cells.len() < 2 {
            0.0
        } else {
            self.geometry.spacing
        }
    }

    /// World-space center of a grid position.
    pub fn center_of(&self, pos: GridPos) -> Point {
        Point::new(
            self.geometry.origin.x + pos.col as f64 * self.geometry.spacing,
            self.geometry.origin.y + pos.row as f64 * self.geometry.spacing,
        )
    }

    /// A move record for one cell, with world-space centers resolved.
    pub(crate) fn plan_move(&self, cell: CellId, from: GridPos, to: GridPos) -> CellMove {
        CellMove {
            cell,
            from,
            to,
            from_center: self.center_of(from),
            to_center: self.center_of(to),
        }
    }

    /// Atomically install new cell positions and the matching partition
    /// sequence. `positions` is indexed by cell id and must cover every
    /// cell; transforms call this exactly once, after all validation.
    pub(crate) fn publish(&mut self, positions: Vec<GridPos>, partition: Partition) {
        debug_assert_eq!(positions.len(), self.cells.len());
        for (cell, pos) in self.cells.iter_mut().zip(positions) {
            cell.pos = pos;
        }
        self.partition = partition;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/model.rs"]
mod tests;
