//! Sliding terrain window over an unbounded flat field.
//!
//! Only a square region around an anchor tile is ever resident; queries
//! outside it fail with [`TerrainError::Unloaded`] rather than inventing
//! terrain. Pursuit drags the window along with the quarry via
//! [`TerrainWindow::ensure_loaded_around`], which also drops any cost
//! overrides that fell outside the region of interest so stale obstacles
//! cannot interfere with a trial.

use std::collections::HashMap;

use prowl_core::{Position, SimConfig, TerrainError, TerrainOracle, TerrainWindow};

/// Resident square of flat terrain with optional per-tile cost overrides.
///
/// The step cost between two tiles is the mean of their tile costs, so the
/// default field charges [`SimConfig::BASE_STEP_COST`] per step.
#[derive(Clone, Debug)]
pub struct FieldWindow {
    center: Position,
    half_extent: i32,
    margin: i32,
    base_cost: u32,
    overrides: HashMap<Position, u32>,
    recenters: u32,
}

impl FieldWindow {
    /// Half-width of the resident square. Wide enough that a pursuer at
    /// the escape radius is still inside the window anchored on its
    /// quarry.
    pub const DEFAULT_HALF_EXTENT: i32 = 32;

    /// How close to the window edge an actor may get before the window
    /// recenters on it.
    pub const DEFAULT_MARGIN: i32 = 8;

    pub fn centered(center: Position) -> Self {
        Self::new(center, Self::DEFAULT_HALF_EXTENT, Self::DEFAULT_MARGIN)
    }

    pub fn new(center: Position, half_extent: i32, margin: i32) -> Self {
        Self {
            center,
            half_extent,
            margin,
            base_cost: SimConfig::BASE_STEP_COST,
            overrides: HashMap::new(),
            recenters: 0,
        }
    }

    pub fn center(&self) -> Position {
        self.center
    }

    /// How many times the window has slid since construction.
    pub fn recenters(&self) -> u32 {
        self.recenters
    }

    /// Overrides the cost of a single tile. Returns false if the tile is
    /// not resident. Harness primitive; the engine itself never mutates
    /// terrain.
    pub fn set_cost(&mut self, position: Position, cost: u32) -> bool {
        if !self.contains(position) {
            return false;
        }
        self.overrides.insert(position, cost);
        true
    }

    /// Resets every tile to the base cost.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    fn tile_cost(&self, position: Position) -> u32 {
        self.overrides
            .get(&position)
            .copied()
            .unwrap_or(self.base_cost)
    }

    fn within(&self, position: Position, half: i32) -> bool {
        (position.x - self.center.x).abs() <= half
            && (position.y - self.center.y).abs() <= half
            && position.z == self.center.z
    }
}

impl TerrainOracle for FieldWindow {
    fn movement_cost(&self, from: Position, to: Position) -> Result<u32, TerrainError> {
        if !self.contains(from) {
            return Err(TerrainError::Unloaded { position: from });
        }
        if !self.contains(to) {
            return Err(TerrainError::Unloaded { position: to });
        }
        Ok((self.tile_cost(from) + self.tile_cost(to)) / 2)
    }

    fn contains(&self, position: Position) -> bool {
        self.within(position, self.half_extent)
    }
}

impl TerrainWindow for FieldWindow {
    fn ensure_loaded_around(&mut self, center: Position) {
        if self.within(center, self.half_extent - self.margin) {
            return;
        }
        self.center = center;
        let retained_center = self.center;
        let half = self.half_extent;
        self.overrides.retain(|position, _| {
            (position.x - retained_center.x).abs() <= half
                && (position.y - retained_center.y).abs() <= half
                && position.z == retained_center.z
        });
        self.recenters += 1;
        tracing::debug!(center = %self.center, recenters = self.recenters, "terrain window recentered");
    }
}
