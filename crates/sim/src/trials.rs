//! Repeated-trial measurement helpers.
//!
//! Shambling makes individual trajectories nondeterministic across seeds,
//! so speed is characterized by the distribution over repeated trials
//! rather than a single number: accumulate trial costs in
//! [`RunningStats`], then compare the mean against the per-metric speed
//! law.

use prowl_core::{DistanceMetric, Position, SimConfig, normalized_slope};

use crate::session::{Session, SessionError};

/// Streaming min/max/mean accumulator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunningStats {
    n: u32,
    sum: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        if self.n == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.n += 1;
        self.sum += value;
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn avg(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum / f64::from(self.n)
        }
    }
}

/// Expected move-point cost of the whole course under the session's
/// metric: grid distance times the base step cost, scaled up for diagonal
/// travel under `Trig`.
pub fn expected_course_cost(metric: DistanceMetric, start: Position, destination: Position) -> f64 {
    let distance = DistanceMetric::Grid.tile_distance(start, destination);
    let slope = normalized_slope(start, destination);
    f64::from(distance) * f64::from(SimConfig::BASE_STEP_COST) * metric.slope_multiplier(slope)
}

/// Runs the course `trials` times and returns measured-over-expected cost:
/// 1.0 means the kind moves exactly at the nominal rate for that angle.
pub fn speed_ratio(
    session: &Session,
    kind: &str,
    start: Position,
    destination: Position,
    trials: u32,
) -> Result<f64, SessionError> {
    let mut stats = RunningStats::new();
    for trial in 0..trials {
        let moves = session.moves_to_destination(kind, start, destination, u64::from(trial))?;
        stats.add(f64::from(moves));
    }
    Ok(stats.avg() / expected_course_cost(session.config().metric, start, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_track_extremes_and_mean() {
        let mut stats = RunningStats::new();
        for value in [4.0, 10.0, 1.0] {
            stats.add(value);
        }
        assert_eq!(stats.n(), 3);
        assert_eq!(stats.min(), 1.0);
        assert_eq!(stats.max(), 10.0);
        assert_eq!(stats.avg(), 5.0);
    }

    #[test]
    fn expected_cost_scales_with_angle_under_trig() {
        let start = Position::ORIGIN;
        let cardinal = Position::new(100, 0, 0);
        let diagonal = Position::new(100, 100, 0);

        assert_eq!(expected_course_cost(DistanceMetric::Grid, start, cardinal), 10_000.0);
        assert_eq!(expected_course_cost(DistanceMetric::Grid, start, diagonal), 10_000.0);
        assert_eq!(expected_course_cost(DistanceMetric::Trig, start, cardinal), 10_000.0);
        let trig_diagonal = expected_course_cost(DistanceMetric::Trig, start, diagonal);
        assert!((trig_diagonal - 14_100.0).abs() < 1e-6);
    }
}
