use crate::geometry::Position;

/// Errors surfaced by a terrain collaborator.
///
/// The engine never retries a terrain query; a step's cost is assumed
/// idempotent and deterministic for given terrain state, so failures
/// propagate straight to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    #[error("tile at {position} is not loaded")]
    Unloaded { position: Position },

    #[error("invalid movement cost {cost} from {from} to {to}")]
    InvalidCost { from: Position, to: Position, cost: u32 },
}

/// Read-only terrain oracle: the only thing the engine ever learns about
/// terrain is the scalar cost of one step.
pub trait TerrainOracle: Send + Sync {
    /// Move-point cost of stepping between two adjacent tiles, before any
    /// diagonal scaling by the active metric.
    fn movement_cost(&self, from: Position, to: Position) -> Result<u32, TerrainError>;

    /// Whether the tile is currently resident.
    fn contains(&self, position: Position) -> bool;
}

/// Terrain whose resident region can slide to follow an actor.
pub trait TerrainWindow: TerrainOracle {
    /// Guarantees the region around `center` is resident, recentering the
    /// window when `center` nears its edge.
    fn ensure_loaded_around(&mut self, center: Position);
}
