//! Driver surface over the core engine.
//!
//! A [`Session`] owns the configuration, the run seed, the creature
//! catalog, and a roster of long-lived actors driven turn by turn through
//! [`Session::run_turn`]. Movement and pursuit trials build their own
//! throwaway actors and terrain windows per trial, so repeated trials and
//! metric switches can never leak state into one another.

use prowl_core::{
    ActorId, ActorState, CompassDirection, CreatureOracle, EngineError, PcgRng, Position,
    PursuitOutcome, SimConfig, SpawnError, Roster, TerrainWindow, mix_seed, pursuit, stepper,
};

use crate::catalog::CreatureCatalog;
use crate::terrain::FieldWindow;

/// Errors surfaced by the session driver.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown creature kind `{0}`")]
    UnknownKind(String),

    #[error("actor {0} is not in the roster")]
    ActorMissing(ActorId),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("`{kind}` failed to reach {destination} within {turn_cap} turns")]
    TrialExhausted {
        kind: String,
        destination: Position,
        turn_cap: u32,
    },
}

/// One simulation run: fixed configuration, fixed seed.
pub struct Session {
    config: SimConfig,
    seed: u64,
    catalog: CreatureCatalog,
    terrain: FieldWindow,
    roster: Roster,
    clock: u64,
}

impl Session {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self::with_catalog(config, seed, CreatureCatalog::builtin())
    }

    pub fn with_catalog(config: SimConfig, seed: u64, catalog: CreatureCatalog) -> Self {
        Self {
            config,
            seed,
            catalog,
            terrain: FieldWindow::centered(Position::ORIGIN),
            roster: Roster::new(),
            clock: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Switches the distance metric for subsequent decisions. Trials are
    /// sequential, so there is never a trial in flight to disturb.
    pub fn set_metric(&mut self, metric: prowl_core::DistanceMetric) {
        self.config.metric = metric;
    }

    /// Creates an actor of the named kind and takes ownership of it.
    pub fn spawn(&mut self, kind: &str, position: Position) -> Result<ActorId, SessionError> {
        let template = self
            .catalog
            .template(kind)
            .ok_or_else(|| SessionError::UnknownKind(kind.to_owned()))?;
        let id = self.roster.spawn(&template, position)?;
        tracing::debug!(%id, kind, %position, "spawned creature");
        Ok(id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.roster.actor(id)
    }

    pub fn set_destination(&mut self, id: ActorId, destination: Position) -> Result<(), SessionError> {
        self.actor_mut(id)?.destination = Some(destination);
        Ok(())
    }

    pub fn clear_destination(&mut self, id: ActorId) -> Result<(), SessionError> {
        self.actor_mut(id)?.clear_destination();
        Ok(())
    }

    pub fn set_speed(&mut self, id: ActorId, speed: u32) -> Result<(), SessionError> {
        if speed == 0 {
            return Err(SpawnError::InvalidSpeed { speed }.into());
        }
        self.actor_mut(id)?.speed = speed;
        Ok(())
    }

    pub fn set_moves(&mut self, id: ActorId, moves: i32) -> Result<(), SessionError> {
        self.actor_mut(id)?.moves = moves;
        Ok(())
    }

    /// Drives one turn for a roster actor and reports the move points it
    /// spent. Idle actors neither step nor accrue budget.
    pub fn run_turn(&mut self, id: ActorId) -> Result<u32, SessionError> {
        let actor = self.roster.actor(id).ok_or(SessionError::ActorMissing(id))?;
        if actor.destination.is_none() {
            return Ok(0);
        }
        let anchor = actor.position;
        self.terrain.ensure_loaded_around(anchor);

        let turn = self.clock;
        self.clock += 1;
        let actor = self
            .roster
            .actor_mut(id)
            .ok_or(SessionError::ActorMissing(id))?;
        let report = stepper::run_turn(actor, &self.terrain, &self.config, &PcgRng, self.seed, turn)?;
        tracing::debug!(
            %id,
            moves_spent = report.moves_spent,
            steps = report.steps,
            arrived = report.reached_destination,
            "turn finished"
        );
        Ok(report.moves_spent)
    }

    /// Walks a throwaway actor of the named kind from `start` to
    /// `destination` and returns the total move points it took. `trial`
    /// varies the steering seed between repeated runs of the same course.
    pub fn moves_to_destination(
        &self,
        kind: &str,
        start: Position,
        destination: Position,
        trial: u64,
    ) -> Result<u32, SessionError> {
        let template = self
            .catalog
            .template(kind)
            .ok_or_else(|| SessionError::UnknownKind(kind.to_owned()))?;
        let mut actor = template.instantiate(ActorId(0), start)?;
        actor.destination = Some(destination);

        let mut terrain = FieldWindow::centered(start);
        let trial_seed = mix_seed(self.seed, trial, 0, 0);
        let mut total = 0u32;
        for turn in 0..u64::from(self.config.turn_cap) {
            terrain.ensure_loaded_around(actor.position);
            let report =
                stepper::run_turn(&mut actor, &terrain, &self.config, &PcgRng, trial_seed, turn)?;
            total += report.moves_spent;
            if report.reached_destination {
                return Ok(total);
            }
        }
        Err(SessionError::TrialExhausted {
            kind: kind.to_owned(),
            destination,
            turn_cap: self.config.turn_cap,
        })
    }

    /// Runs one seeded pursuit trial: the quarry is spawned
    /// `config.head_start` tiles from `pursuer_start` along `direction`
    /// and flees that way; the pursuer chases. Fresh actors and a fresh
    /// terrain window per call.
    pub fn simulate_pursuit(
        &self,
        pursuer_kind: &str,
        quarry_kind: &str,
        pursuer_start: Position,
        direction: CompassDirection,
        trial: u64,
    ) -> Result<PursuitOutcome, SessionError> {
        let pursuer_template = self
            .catalog
            .template(pursuer_kind)
            .ok_or_else(|| SessionError::UnknownKind(pursuer_kind.to_owned()))?;
        let quarry_template = self
            .catalog
            .template(quarry_kind)
            .ok_or_else(|| SessionError::UnknownKind(quarry_kind.to_owned()))?;

        let (dx, dy) = direction.delta();
        let lead = self.config.head_start as i32;
        let quarry_start = pursuer_start.offset(dx * lead, dy * lead);

        let mut pursuer = pursuer_template.instantiate(ActorId(0), pursuer_start)?;
        let mut quarry = quarry_template.instantiate(ActorId(1), quarry_start)?;
        let mut terrain = FieldWindow::centered(quarry_start);
        let trial_seed = mix_seed(self.seed, trial, 1, 0);

        let outcome = pursuit::simulate_pursuit(
            &mut pursuer,
            &mut quarry,
            direction,
            &mut terrain,
            &self.config,
            &PcgRng,
            trial_seed,
        )?;
        tracing::info!(
            pursuer = pursuer_kind,
            quarry = quarry_kind,
            %direction,
            ?outcome,
            window_recenters = terrain.recenters(),
            "pursuit trial finished"
        );
        Ok(outcome)
    }

    fn actor_mut(&mut self, id: ActorId) -> Result<&mut ActorState, SessionError> {
        self.roster
            .actor_mut(id)
            .ok_or(SessionError::ActorMissing(id))
    }
}
