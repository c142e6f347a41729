//! The two selectable grid geometries.
//!
//! `Grid` treats a diagonal step as covering the same ground as a cardinal
//! one, so distance is Chebyshev. `Trig` measures straight-line ground, so
//! a diagonal step covers sqrt(2) tiles and must be charged more move
//! points for average speed to stay flat across travel angles.

use super::Position;

/// Integer approximation of sqrt(2), scaled by 100 to match move-point
/// granularity. Truncating scaling keeps the per-step charge at 141 for
/// the baseline cardinal cost of 100, which lands every angle exactly on
/// the `1 + 0.41 * slope` speed law.
const DIAGONAL_SCALE_NUM: u32 = 141;
const DIAGONAL_SCALE_DEN: u32 = 100;

/// Geometry governing distances and the relative cost of diagonal steps.
///
/// A metric value is threaded through every steering and cost decision;
/// nothing caches it per actor, so a caller switching metrics between
/// trials immediately affects subsequent choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// Chebyshev geometry: diagonal and cardinal steps cost the same.
    Grid,
    /// Euclidean geometry: diagonal steps are charged `141/100` of the
    /// cardinal cost.
    Trig,
}

impl DistanceMetric {
    /// Ground distance between two tiles, ignoring elevation.
    pub fn distance(self, a: Position, b: Position) -> f64 {
        let dx = f64::from((b.x - a.x).abs());
        let dy = f64::from((b.y - a.y).abs());
        match self {
            DistanceMetric::Grid => dx.max(dy),
            DistanceMetric::Trig => (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Rounded whole-tile distance, used for adjacency and escape checks.
    pub fn tile_distance(self, a: Position, b: Position) -> i32 {
        match self {
            DistanceMetric::Grid => (b.x - a.x).abs().max((b.y - a.y).abs()),
            DistanceMetric::Trig => self.distance(a, b).round() as i32,
        }
    }

    /// Move-point cost of a diagonal step whose cardinal cost is `base`.
    pub fn diagonal_cost(self, base: u32) -> u32 {
        match self {
            DistanceMetric::Grid => base,
            DistanceMetric::Trig => base * DIAGONAL_SCALE_NUM / DIAGONAL_SCALE_DEN,
        }
    }

    /// Expected move-point multiplier for travel at the given slope,
    /// relative to pure cardinal travel. Used to normalize measured speeds
    /// when bucketing calibration runs by angle.
    pub fn slope_multiplier(self, slope: f64) -> f64 {
        match self {
            DistanceMetric::Grid => 1.0,
            DistanceMetric::Trig => 1.0 + slope * 0.41,
        }
    }
}

/// Ratio of the minor to the major axis delta between two tiles, in
/// `[0, 1]`: 0 for pure cardinal travel, 1 for pure diagonal travel at
/// 45 degrees. Classifies how diagonal the straight-line path is.
pub fn normalized_slope(origin: Position, target: Position) -> f64 {
    let dx = (target.x - origin.x).abs();
    let dy = (target.y - origin.y).abs();
    let (major, minor) = if dx >= dy { (dx, dy) } else { (dy, dx) };
    if major == 0 {
        0.0
    } else {
        f64::from(minor) / f64::from(major)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_distance_is_chebyshev() {
        let a = Position::ORIGIN;
        let b = Position::new(3, -7, 0);
        assert_eq!(DistanceMetric::Grid.distance(a, b), 7.0);
        assert_eq!(DistanceMetric::Grid.tile_distance(a, b), 7);
    }

    #[test]
    fn trig_distance_is_euclidean() {
        let a = Position::ORIGIN;
        let b = Position::new(3, 4, 0);
        assert_eq!(DistanceMetric::Trig.distance(a, b), 5.0);
        assert_eq!(DistanceMetric::Trig.tile_distance(a, b), 5);
    }

    #[test]
    fn trig_rounds_single_diagonal_to_adjacent() {
        let a = Position::ORIGIN;
        let b = Position::new(1, 1, 0);
        assert_eq!(DistanceMetric::Trig.tile_distance(a, b), 1);
    }

    #[test]
    fn diagonal_cost_scales_only_under_trig() {
        assert_eq!(DistanceMetric::Grid.diagonal_cost(100), 100);
        assert_eq!(DistanceMetric::Trig.diagonal_cost(100), 141);
    }

    #[test]
    fn slope_classifies_travel_angle() {
        let origin = Position::ORIGIN;
        assert_eq!(normalized_slope(origin, Position::new(10, 0, 0)), 0.0);
        assert_eq!(normalized_slope(origin, Position::new(10, 10, 0)), 1.0);
        assert_eq!(normalized_slope(origin, Position::new(10, 5, 0)), 0.5);
        assert_eq!(normalized_slope(origin, Position::new(5, 10, 0)), 0.5);
        assert_eq!(normalized_slope(origin, origin), 0.0);
    }

    #[test]
    fn metric_parses_from_lowercase_names() {
        assert_eq!("grid".parse::<DistanceMetric>(), Ok(DistanceMetric::Grid));
        assert_eq!("trig".parse::<DistanceMetric>(), Ok(DistanceMetric::Trig));
        assert_eq!(DistanceMetric::Trig.to_string(), "trig");
    }
}
