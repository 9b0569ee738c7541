//! Ferryte is the combinatorial core of a partition-diagram animator.
//!
//! It models an integer partition as a grid of cells (a Ferrers/Young
//! diagram) and applies four structural transforms, each returning a
//! cell-accurate [`MovePlan`] that an external animation layer interpolates:
//!
//! 1. **Conjugate**: transpose the diagram across its main diagonal
//! 2. **CanonicalSort**: rearrange parts into non-increasing order
//! 3. **Convolve**: collapse diagonal layers into rows (hook decomposition)
//! 4. **FranklinInvolute**: the classical pentagonal-number-theorem bijection
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every transform is a pure function of the diagram
//!   state; no randomness, clocks, or IO.
//! - **All-or-nothing**: preconditions are checked before any mutation, so a
//!   failed transform leaves its diagram untouched.
//! - **Cell conservation**: transforms are bijections on a fixed cell set;
//!   the total cell count never changes.
//!
//! Rendering, easing, labels, and scene sequencing are not here: a renderer
//! consumes each transform's [`MovePlan`] (grid positions plus world-space
//! centers) and re-queries derived indices between transforms.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod diagram;
mod foundation;
mod plan;
mod transform;

pub use diagram::layers::LayerIndex;
pub use diagram::model::{Cell, Diagram, DiagramGeometry};
pub use foundation::core::{CellId, GridPos, Partition, Point, Vec2};
pub use foundation::error::{FerryteError, FerryteResult};
pub use plan::moves::{CellMove, MovePlan, MoveStage, StageKind, TransformKind};
pub use transform::conjugate::conjugate;
pub use transform::convolve::convolve;
pub use transform::franklin::franklin_involute;
pub use transform::sort::sort_parts;
