//! Single-step greedy steering.
//!
//! Given an actor with a goal, pick the adjacent tile to move into. The
//! remaining delta decomposes into a major and a minor axis; every step
//! advances the major axis, and the minor axis is folded in by taking the
//! diagonal a `slope` fraction of the time. How that fraction is realized
//! is the gait's business:
//!
//! - [`Gait::Direct`] runs a Bresenham-style error accumulator in
//!   `actor.drift`, so the blend is exact and deterministic.
//! - [`Gait::Shambling`] draws from the seeded RNG oracle and takes the
//!   diagonal with probability `slope`. The draw is unbiased, so the
//!   long-run step mix — and with it the average cost per tile of ground —
//!   matches the direct gait; only the trajectory dithers.
//!
//! Either way a step never overshoots the minor axis, so a journey of
//! planar delta (dx, dy) always takes exactly `max` steps of which `min`
//! are diagonal, which is what keeps average speed flat across travel
//! angles under both metrics.

use crate::env::RngOracle;
use crate::geometry::{Position, normalized_slope};
use crate::state::{ActorId, ActorState, Gait};

/// One steering decision: the tile to enter and whether the step is
/// diagonal (and therefore subject to metric scaling).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepChoice {
    pub to: Position,
    pub diagonal: bool,
}

/// Steering preconditions. Both variants are caller bugs, not runtime
/// faults: callers check for a goal and for arrival before asking for a
/// step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SteerError {
    #[error("actor {0} has no destination")]
    NoDestination(ActorId),

    #[error("actor {0} is already at its destination")]
    AlreadyArrived(ActorId),
}

/// Chooses the next adjacent tile toward the actor's destination.
///
/// Always returns a valid adjacent tile on the actor's level. The passed
/// seed must be unique per decision point (see [`crate::env::mix_seed`])
/// for shambling trajectories to be reproducible.
pub fn next_step<R>(
    actor: &mut ActorState,
    rng: &R,
    seed: u64,
) -> Result<StepChoice, SteerError>
where
    R: RngOracle + ?Sized,
{
    let destination = actor
        .destination
        .ok_or(SteerError::NoDestination(actor.id))?;
    let dx = destination.x - actor.position.x;
    let dy = destination.y - actor.position.y;
    if dx == 0 && dy == 0 {
        return Err(SteerError::AlreadyArrived(actor.id));
    }

    let diagonal = if dx == 0 || dy == 0 {
        false
    } else {
        let slope = normalized_slope(actor.position, destination);
        match actor.gait {
            Gait::Direct => {
                actor.drift += slope;
                if actor.drift >= 1.0 {
                    actor.drift -= 1.0;
                    true
                } else {
                    false
                }
            }
            Gait::Shambling => rng.unit(seed) < slope,
        }
    };

    let to = if diagonal {
        actor.position.offset(dx.signum(), dy.signum())
    } else if dx.abs() >= dy.abs() {
        actor.position.offset(dx.signum(), 0)
    } else {
        actor.position.offset(0, dy.signum())
    };

    Ok(StepChoice { to, diagonal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, mix_seed};
    use crate::state::CreatureTemplate;

    fn actor_at(gait: Gait, position: Position, destination: Position) -> ActorState {
        let mut actor = CreatureTemplate::builder()
            .gait(gait)
            .build()
            .instantiate(ActorId(0), position)
            .unwrap();
        actor.destination = Some(destination);
        actor
    }

    fn walk_home(mut actor: ActorState) -> (u32, u32) {
        let rng = PcgRng;
        let mut cardinal = 0;
        let mut diagonal = 0;
        for draw in 0..10_000u32 {
            let destination = actor.destination.unwrap();
            if actor.position.x == destination.x && actor.position.y == destination.y {
                break;
            }
            let choice = next_step(&mut actor, &rng, mix_seed(9, 0, 0, draw)).unwrap();
            actor.position = choice.to;
            if choice.diagonal {
                diagonal += 1;
            } else {
                cardinal += 1;
            }
        }
        (cardinal, diagonal)
    }

    #[test]
    fn cardinal_goal_yields_straight_walk() {
        let actor = actor_at(Gait::Direct, Position::ORIGIN, Position::new(0, 25, 0));
        assert_eq!(walk_home(actor), (25, 0));
    }

    #[test]
    fn diagonal_goal_yields_pure_diagonal_walk() {
        for gait in [Gait::Direct, Gait::Shambling] {
            let actor = actor_at(gait, Position::ORIGIN, Position::new(25, 25, 0));
            assert_eq!(walk_home(actor), (0, 25));
        }
    }

    #[test]
    fn half_slope_blends_evenly() {
        let actor = actor_at(Gait::Direct, Position::ORIGIN, Position::new(40, 20, 0));
        assert_eq!(walk_home(actor), (20, 20));
    }

    #[test]
    fn any_gait_spends_exactly_chebyshev_steps() {
        for gait in [Gait::Direct, Gait::Shambling] {
            for (x, y) in [(30, 7), (13, 28), (50, 49), (31, 0)] {
                let actor = actor_at(gait, Position::ORIGIN, Position::new(x, y, 0));
                let (cardinal, diagonal) = walk_home(actor);
                assert_eq!(diagonal, x.min(y) as u32);
                assert_eq!(cardinal + diagonal, x.max(y) as u32);
            }
        }
    }

    #[test]
    fn shambling_is_reproducible_per_seed() {
        let rng = PcgRng;
        let mut first = actor_at(Gait::Shambling, Position::ORIGIN, Position::new(60, 20, 0));
        let mut second = first;
        for draw in 0..40u32 {
            let seed = mix_seed(1234, 0, 0, draw);
            let a = next_step(&mut first, &rng, seed).unwrap();
            let b = next_step(&mut second, &rng, seed).unwrap();
            assert_eq!(a, b);
            first.position = a.to;
            second.position = b.to;
        }
    }

    #[test]
    fn idle_actor_is_a_caller_bug() {
        let rng = PcgRng;
        let mut actor = CreatureTemplate::builder()
            .build()
            .instantiate(ActorId(7), Position::ORIGIN)
            .unwrap();
        assert_eq!(
            next_step(&mut actor, &rng, 0),
            Err(SteerError::NoDestination(ActorId(7)))
        );

        actor.destination = Some(Position::ORIGIN);
        assert_eq!(
            next_step(&mut actor, &rng, 0),
            Err(SteerError::AlreadyArrived(ActorId(7)))
        );
    }
}
