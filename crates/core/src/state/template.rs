//! Creature template definitions and oracle interface.
//!
//! Templates define the movement-relevant attributes of a creature kind
//! (speed rating and gait) in a data-driven way; catalogs implement
//! [`CreatureOracle`] to resolve kind names to templates, so the core never
//! hard-codes any bestiary.

use super::{ActorId, ActorState, Gait, SpawnError};
use crate::geometry::Position;

/// Movement attributes of a creature kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    /// Move points granted per turn; baseline 100.
    pub speed: u32,
    pub gait: Gait,
}

impl CreatureTemplate {
    pub fn builder() -> CreatureTemplateBuilder {
        CreatureTemplateBuilder::default()
    }

    /// Creates a fresh actor from this template with the given id and
    /// position. The move ledger starts empty and the goal unset.
    pub fn instantiate(&self, id: ActorId, position: Position) -> Result<ActorState, SpawnError> {
        if self.speed == 0 {
            return Err(SpawnError::InvalidSpeed { speed: self.speed });
        }
        Ok(ActorState {
            id,
            position,
            destination: None,
            speed: self.speed,
            moves: 0,
            gait: self.gait,
            drift: 0.0,
        })
    }
}

/// Builder for constructing creature templates.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreatureTemplateBuilder {
    speed: Option<u32>,
    gait: Option<Gait>,
}

impl CreatureTemplateBuilder {
    pub fn speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn gait(mut self, gait: Gait) -> Self {
        self.gait = Some(gait);
        self
    }

    pub fn build(self) -> CreatureTemplate {
        CreatureTemplate {
            speed: self.speed.unwrap_or(100),
            gait: self.gait.unwrap_or(Gait::Direct),
        }
    }
}

/// Oracle resolving creature kind names to templates.
pub trait CreatureOracle: Send + Sync {
    /// Returns the template for a kind name, if the catalog knows it.
    fn template(&self, kind: &str) -> Option<CreatureTemplate>;

    /// Returns all known kind names. Catalogs that cannot enumerate may
    /// return an empty vec.
    fn kinds(&self) -> Vec<String> {
        Vec::new()
    }
}
