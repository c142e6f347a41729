//! Per-turn stepping state machine.
//!
//! One call to [`run_turn`] is one turn for one actor: credit the turn's
//! allowance, then step until the budget runs dry or the destination is
//! reached. Arrival is terminal for the turn, not merely end-of-budget.
//! A chosen step is always applied once decided; there is no rollback.

use crate::config::SimConfig;
use crate::env::{RngOracle, TerrainError, TerrainOracle, mix_seed};
use crate::state::ActorState;
use crate::steer::{SteerError, next_step};

/// Errors a stepping loop can surface: steering preconditions or a failing
/// terrain collaborator. Neither is retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Steer(#[from] SteerError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),
}

/// What one turn amounted to, for measurement by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Total move points charged this turn.
    pub moves_spent: u32,
    /// Steps taken this turn.
    pub steps: u32,
    /// Whether the actor ended the turn standing on its destination.
    pub reached_destination: bool,
}

/// Runs one full turn for the actor against the given terrain.
///
/// `turn` is the caller's turn counter; together with the run seed and the
/// in-turn step index it pins every stochastic steering draw, so a fixed
/// seed replays the exact trajectory.
pub fn run_turn<T, R>(
    actor: &mut ActorState,
    terrain: &T,
    config: &SimConfig,
    rng: &R,
    run_seed: u64,
    turn: u64,
) -> Result<TurnReport, EngineError>
where
    T: TerrainOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    let destination = actor
        .destination
        .ok_or(SteerError::NoDestination(actor.id))?;

    actor.begin_turn();

    let mut report = TurnReport {
        reached_destination: actor.position == destination,
        ..TurnReport::default()
    };
    while !report.reached_destination && actor.has_budget() {
        let seed = mix_seed(run_seed, turn, actor.id.0, report.steps);
        let choice = next_step(actor, rng, seed)?;
        let mut cost = terrain.movement_cost(actor.position, choice.to)?;
        if choice.diagonal {
            cost = config.metric.diagonal_cost(cost);
        }
        if cost == 0 {
            return Err(TerrainError::InvalidCost {
                from: actor.position,
                to: choice.to,
                cost,
            }
            .into());
        }
        actor.charge(cost);
        actor.position = choice.to;
        report.moves_spent += cost;
        report.steps += 1;
        report.reached_destination = actor.position == destination;
    }

    Ok(report)
}
