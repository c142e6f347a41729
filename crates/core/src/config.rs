use crate::geometry::DistanceMetric;

/// Simulation configuration constants and tunable parameters.
///
/// The distance metric lives here rather than in any global state; every
/// steering and cost decision reads it from the config value it was handed,
/// so switching metrics between trials can never leak into a running one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Geometry used for distances and diagonal step costs.
    pub metric: DistanceMetric,

    /// Tile distance beyond which a quarry counts as escaped.
    pub escape_radius: u32,

    /// Hard cap on turns per pursuit trial; functions as the
    /// non-convergence guard.
    pub turn_cap: u32,

    /// Tiles of head start granted to a quarry when a pursuit is set up.
    pub head_start: u32,
}

impl SimConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of actors a roster can track at once.
    pub const MAX_ACTORS: usize = 16;

    // ===== runtime-tunable defaults =====
    /// Move points a cardinal step costs on unremarkable terrain. A speed
    /// rating of 100 therefore buys one cardinal tile per turn.
    pub const BASE_STEP_COST: u32 = 100;
    pub const DEFAULT_ESCAPE_RADIUS: u32 = 20;
    pub const DEFAULT_TURN_CAP: u32 = 1000;
    pub const DEFAULT_HEAD_START: u32 = 10;

    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            metric,
            escape_radius: Self::DEFAULT_ESCAPE_RADIUS,
            turn_cap: Self::DEFAULT_TURN_CAP,
            head_start: Self::DEFAULT_HEAD_START,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(DistanceMetric::Grid)
    }
}
