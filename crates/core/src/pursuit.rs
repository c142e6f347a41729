//! Pursuit and evasion trials.
//!
//! One trial pits a pursuer against a quarry fleeing in a fixed compass
//! direction. Turns are strictly sequential: the quarry takes its full
//! budget of steps, then the pursuer retargets to the quarry's new
//! position and takes its full budget. The quarry drags the resident
//! terrain window along as it runs.

use crate::config::SimConfig;
use crate::env::{RngOracle, TerrainError, TerrainWindow, mix_seed};
use crate::geometry::CompassDirection;
use crate::state::ActorState;
use crate::steer::next_step;
use crate::stepper::EngineError;

/// Terminal classification of a pursuit trial. Not a score: callers
/// branch on the variant (or on the sign of [`PursuitOutcome::signed`]),
/// they do not interpolate between outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuitOutcome {
    /// The pursuer closed to adjacency on the given turn.
    Caught { turns: u32 },
    /// The gap exceeded the escape radius on the given turn.
    Escaped { turns: u32 },
    /// Neither side resolved the chase within the turn cap; either a
    /// genuine stalemate or a parameter mismatch worth flagging.
    Inconclusive,
}

impl PursuitOutcome {
    /// Signed-integer convention: positive turn count for a catch,
    /// negative for an escape, and the negated turn cap as the
    /// large-magnitude sentinel for an unresolved trial.
    pub fn signed(self, turn_cap: u32) -> i32 {
        match self {
            PursuitOutcome::Caught { turns } => turns as i32,
            PursuitOutcome::Escaped { turns } => -(turns as i32),
            PursuitOutcome::Inconclusive => -(turn_cap as i32),
        }
    }
}

/// Runs one bounded pursuit trial.
///
/// The quarry holds its heading regardless of the pursuer; the pursuer is
/// retargeted to the quarry's position at the start of each of its turns.
/// The outcome is classified after every pursuer step with the active
/// metric's tile distance: adjacency is a catch, a gap wider than
/// `config.escape_radius` is an escape, and `config.turn_cap` turns
/// without either is inconclusive.
pub fn simulate_pursuit<T, R>(
    pursuer: &mut ActorState,
    quarry: &mut ActorState,
    direction: CompassDirection,
    terrain: &mut T,
    config: &SimConfig,
    rng: &R,
    run_seed: u64,
) -> Result<PursuitOutcome, EngineError>
where
    T: TerrainWindow + ?Sized,
    R: RngOracle + ?Sized,
{
    let (dx, dy) = direction.delta();
    for turn in 1..=config.turn_cap {
        quarry.begin_turn();
        while quarry.has_budget() {
            let to = quarry.position.offset(dx, dy);
            terrain.ensure_loaded_around(to);
            let mut cost = terrain.movement_cost(quarry.position, to)?;
            if direction.is_diagonal() {
                cost = config.metric.diagonal_cost(cost);
            }
            if cost == 0 {
                return Err(TerrainError::InvalidCost { from: quarry.position, to, cost }.into());
            }
            quarry.charge(cost);
            quarry.position = to;
        }

        pursuer.destination = Some(quarry.position);
        pursuer.begin_turn();
        let mut draw = 0u32;
        while pursuer.has_budget() {
            if pursuer.destination == Some(pursuer.position) {
                break;
            }
            let seed = mix_seed(run_seed, u64::from(turn), pursuer.id.0, draw);
            let choice = next_step(pursuer, rng, seed)?;
            let mut cost = terrain.movement_cost(pursuer.position, choice.to)?;
            if choice.diagonal {
                cost = config.metric.diagonal_cost(cost);
            }
            if cost == 0 {
                return Err(TerrainError::InvalidCost {
                    from: pursuer.position,
                    to: choice.to,
                    cost,
                }
                .into());
            }
            pursuer.charge(cost);
            pursuer.position = choice.to;
            draw += 1;

            let gap = config.metric.tile_distance(pursuer.position, quarry.position);
            if gap <= 1 {
                return Ok(PursuitOutcome::Caught { turns: turn });
            }
            if gap > config.escape_radius as i32 {
                return Ok(PursuitOutcome::Escaped { turns: turn });
            }
        }
    }

    Ok(PursuitOutcome::Inconclusive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, TerrainOracle};
    use crate::geometry::{DistanceMetric, Position};
    use crate::state::{ActorId, CreatureTemplate, Gait};

    /// Boundless flat terrain that still records window recentering.
    struct OpenRange {
        recenters: u32,
        anchor: Position,
    }

    impl OpenRange {
        fn new() -> Self {
            Self { recenters: 0, anchor: Position::ORIGIN }
        }
    }

    impl TerrainOracle for OpenRange {
        fn movement_cost(&self, _from: Position, _to: Position) -> Result<u32, TerrainError> {
            Ok(SimConfig::BASE_STEP_COST)
        }

        fn contains(&self, _position: Position) -> bool {
            true
        }
    }

    impl TerrainWindow for OpenRange {
        fn ensure_loaded_around(&mut self, center: Position) {
            if center != self.anchor {
                self.anchor = center;
                self.recenters += 1;
            }
        }
    }

    fn rig(
        pursuer_speed: u32,
        pursuer_gait: Gait,
        quarry_speed: u32,
        direction: CompassDirection,
        head_start: i32,
    ) -> (ActorState, ActorState) {
        let pursuer = CreatureTemplate::builder()
            .speed(pursuer_speed)
            .gait(pursuer_gait)
            .build()
            .instantiate(ActorId(0), Position::new(65, 65, 0))
            .unwrap();
        let (dx, dy) = direction.delta();
        let quarry = CreatureTemplate::builder()
            .speed(quarry_speed)
            .build()
            .instantiate(
                ActorId(1),
                Position::new(65 + dx * head_start, 65 + dy * head_start, 0),
            )
            .unwrap();
        (pursuer, quarry)
    }

    #[test]
    fn faster_pursuer_catches_the_quarry() {
        for metric in [DistanceMetric::Grid, DistanceMetric::Trig] {
            for direction in [CompassDirection::East, CompassDirection::NorthEast] {
                let config = SimConfig::new(metric);
                let (mut pursuer, mut quarry) = rig(150, Gait::Shambling, 100, direction, 10);
                let mut terrain = OpenRange::new();

                let outcome = simulate_pursuit(
                    &mut pursuer, &mut quarry, direction, &mut terrain, &config, &PcgRng, 7,
                )
                .unwrap();
                assert!(matches!(outcome, PursuitOutcome::Caught { .. }), "{metric} {direction}");
                assert!(outcome.signed(config.turn_cap) > 0);
                assert!(terrain.recenters > 0);
            }
        }
    }

    #[test]
    fn slower_pursuer_is_escaped_from() {
        for metric in [DistanceMetric::Grid, DistanceMetric::Trig] {
            for direction in [CompassDirection::East, CompassDirection::NorthEast] {
                let config = SimConfig::new(metric);
                let (mut pursuer, mut quarry) = rig(70, Gait::Shambling, 100, direction, 10);
                let mut terrain = OpenRange::new();

                let outcome = simulate_pursuit(
                    &mut pursuer, &mut quarry, direction, &mut terrain, &config, &PcgRng, 7,
                )
                .unwrap();
                assert!(matches!(outcome, PursuitOutcome::Escaped { .. }), "{metric} {direction}");
                assert!(outcome.signed(config.turn_cap) < 0);
            }
        }
    }

    #[test]
    fn matched_speeds_hit_the_turn_cap() {
        let config = SimConfig::default();
        let (mut pursuer, mut quarry) = rig(100, Gait::Direct, 100, CompassDirection::East, 10);
        let mut terrain = OpenRange::new();

        let outcome = simulate_pursuit(
            &mut pursuer,
            &mut quarry,
            CompassDirection::East,
            &mut terrain,
            &config,
            &PcgRng,
            7,
        )
        .unwrap();
        assert_eq!(outcome, PursuitOutcome::Inconclusive);
        assert_eq!(outcome.signed(config.turn_cap), -1000);
    }

    #[test]
    fn fixed_seed_reproduces_the_trial() {
        let config = SimConfig::new(DistanceMetric::Trig);
        let direction = CompassDirection::NorthEast;

        let mut outcomes = Vec::new();
        for _ in 0..2 {
            let (mut pursuer, mut quarry) = rig(150, Gait::Shambling, 100, direction, 10);
            let mut terrain = OpenRange::new();
            let outcome = simulate_pursuit(
                &mut pursuer, &mut quarry, direction, &mut terrain, &config, &PcgRng, 99,
            )
            .unwrap();
            outcomes.push((outcome, pursuer.position, quarry.position));
        }
        assert_eq!(outcomes[0], outcomes[1]);
    }
}
