//! The effect system: signed, tiered, clamped deltas.
//!
//! Systems never write resources directly; they describe changes as
//! effects, and the orchestrator folds all effects of all tiers into one
//! new state at the end of the tick. Clamping against the resource
//! registry happens after every delta, making the fold the last line of
//! defense for the bounds invariants.

use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;
use crate::state::SimulationState;

/// Ordering class of an effect: immediate (equipment control), active
/// (biology competing for shared resources), passive (environmental
/// drift). Folding is ordered by tier; within a tier, insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Immediate,
    Active,
    Passive,
}

/// One signed delta against one named resource. Effects are transient
/// within a tick and never serialized with the snapshot.
#[derive(Debug, Clone)]
pub struct Effect {
    pub tier: Tier,
    pub resource: ResourceKind,
    pub delta: f64,
    /// System that produced the effect, for diagnostics.
    pub source: &'static str,
}

impl Effect {
    pub fn new(tier: Tier, resource: ResourceKind, delta: f64, source: &'static str) -> Self {
        Self {
            tier,
            resource,
            delta,
            source,
        }
    }
}

/// Fold effects into the state, clamping each resource after every delta.
///
/// The water level clamps to `[0, tank.capacity]`; everything else clamps
/// to its registered bounds. Effects are applied tier by tier (immediate,
/// active, passive), preserving insertion order within each tier; two
/// deltas to the same resource within one tier commute except at clamp
/// saturation, which is accepted behavior.
///
/// An empty list returns without touching the state (cheap path).
pub fn apply_effects(state: &mut SimulationState, effects: &[Effect]) {
    if effects.is_empty() {
        return;
    }
    for tier in [Tier::Immediate, Tier::Active, Tier::Passive] {
        for effect in effects.iter().filter(|e| e.tier == tier) {
            apply_one(state, effect);
        }
    }
}

fn apply_one(state: &mut SimulationState, effect: &Effect) {
    match effect.resource {
        ResourceKind::WaterLevel => {
            let next = state.tank.water_l + effect.delta;
            state.tank.water_l = next.clamp(0.0, state.tank.capacity_l);
        }
        kind => {
            let spec = kind.spec();
            let next = state.resources.get(kind) + effect.delta;
            state.resources.set(kind, next.clamp(spec.min, spec.max));
        }
    }
}
