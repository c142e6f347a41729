//! Actor state and the arena that owns it.
//!
//! Every tracked creature is one [`ActorState`] held in a [`Roster`]. The
//! roster hands out [`ActorId`] handles; nothing outside the simulation
//! ever holds a reference into the arena across a turn boundary.
mod template;

pub use template::{CreatureOracle, CreatureTemplate, CreatureTemplateBuilder};

use arrayvec::ArrayVec;
use std::fmt;

use crate::config::SimConfig;
use crate::geometry::Position;

/// Unique identifier for an actor tracked by a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a creature converts its heading into individual steps.
///
/// A closed set of variants rather than an open type hierarchy: steering
/// dispatches on the tag and keeps whatever per-actor state it needs in
/// [`ActorState`] itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gait {
    /// Deterministic error-accumulating steps straight at the goal.
    Direct,
    /// Stochastic blend of cardinal and diagonal steps; dithers around the
    /// straight line without biasing long-run throughput.
    Shambling,
}

/// Complete per-creature movement state.
///
/// # Invariants
///
/// - `moves` is only mutated by the budget operations in [`crate::budget`];
///   a turn ends exactly when it drops below zero.
/// - `destination` and `position` are independent: arriving does not clear
///   the destination, callers do.
/// - `drift` is owned by the steering engine; it carries the accumulated
///   directional error between steps for the [`Gait::Direct`] policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorState {
    pub id: ActorId,
    pub position: Position,
    /// Goal tile. `None` means the actor is idle.
    pub destination: Option<Position>,
    /// Move points granted per turn; 100 buys one cardinal tile per turn.
    pub speed: u32,
    /// Remaining move-point budget. May go negative transiently while a
    /// committed step finishes; the debt carries into the next turn.
    pub moves: i32,
    pub gait: Gait,
    pub drift: f64,
}

impl ActorState {
    /// Clears any pending goal, leaving the actor idle.
    pub fn clear_destination(&mut self) {
        self.destination = None;
    }
}

/// Errors raised while adding an actor to a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("speed rating must be positive, got {speed}")]
    InvalidSpeed { speed: u32 },

    #[error("roster is full ({capacity} actors)")]
    RosterFull { capacity: usize },
}

/// Bounded arena owning every tracked actor.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    actors: ArrayVec<ActorState, { SimConfig::MAX_ACTORS }>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiates a template at `position` and takes ownership of the
    /// resulting actor, returning its handle.
    pub fn spawn(
        &mut self,
        template: &CreatureTemplate,
        position: Position,
    ) -> Result<ActorId, SpawnError> {
        let id = ActorId(self.actors.len() as u32);
        let actor = template.instantiate(id, position)?;
        self.actors.try_push(actor).map_err(|_| SpawnError::RosterFull {
            capacity: SimConfig::MAX_ACTORS,
        })?;
        Ok(id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.actors.get(id.0 as usize)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorState> {
        self.actors.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter()
    }
}
