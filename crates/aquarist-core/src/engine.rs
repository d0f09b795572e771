//! The tick orchestrator and the engine facade.
//!
//! One tick is one simulated hour, composed in a fixed stage order:
//!
//! | Stage     | Work                                                   |
//! |-----------|--------------------------------------------------------|
//! | Immediate | equipment control (thermostat, ATO, schedules)         |
//! | Active    | plants, then livestock, both from the pre-tick snapshot|
//! | Passive   | decay, evaporation, temperature, nitrogen, gases, pH, algae |
//! | Fold      | all effects applied once, tier by tier, with clamping  |
//! | Alerts    | edge-trigger evaluation on the folded state            |
//!
//! Every stage reads the snapshot as it stood when the tick began;
//! concurrent consumption of a shared resource is resolved by the fold's
//! clamping, not by stage-to-stage visibility. The tick counter advances
//! last, so every log written during the hour carries the hour's number.

use aquarist_logic::config::EngineConfig;
pub use aquarist_logic::schedule::{day_number, hour_of_day};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::alerts;
use crate::effect::{apply_effects, Effect};
use crate::equipment::{self, Equipment};
use crate::state::{Environment, Severity, SimulationState, Tank};
use crate::systems::{
    algae, decay, evaporation, gas_exchange, livestock, nitrogen, ph, plants, temperature,
};

/// Starting conditions for a fresh tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub capacity_l: f64,
    /// Initial fill, as a fraction of capacity.
    pub fill_fraction: f64,
    pub environment: Environment,
    pub equipment: Equipment,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity_l: 100.0,
            fill_fraction: 1.0,
            environment: Environment::default(),
            equipment: Equipment::default(),
        }
    }
}

/// Build the initial snapshot: registry-default resources, empty tank,
/// empty logs, no alerts latched.
pub fn create_simulation(config: &SimulationConfig) -> SimulationState {
    SimulationState {
        tick: 0,
        tank: Tank {
            capacity_l: config.capacity_l,
            water_l: config.capacity_l * config.fill_fraction.clamp(0.0, 1.0),
        },
        environment: config.environment.clone(),
        resources: Default::default(),
        equipment: config.equipment.clone(),
        plants: Vec::new(),
        fish: Vec::new(),
        alerts: Default::default(),
        logs: Vec::new(),
        next_entity_id: 0,
    }
}

/// Advance one hour with the default config and the thread RNG.
pub fn tick(state: &SimulationState) -> SimulationState {
    tick_with(state, &EngineConfig::default(), &mut rand::thread_rng())
}

/// Advance one hour. Deterministic for a given state, config, and RNG.
pub fn tick_with(
    state: &SimulationState,
    cfg: &EngineConfig,
    rng: &mut impl Rng,
) -> SimulationState {
    let mut effects: Vec<Effect> = Vec::new();

    // Immediate: equipment control from last hour's readings.
    let (new_equipment, control_effects) = equipment::control(state, cfg);
    effects.extend(control_effects);

    // Active: the biology subsystems. Both see the pre-tick snapshot, so
    // plants and fish compete for shared pools only through the fold.
    let plant_update = plants::step(state, cfg);
    effects.extend(plant_update.effects);
    let fish_update = livestock::step(state, cfg, rng);
    effects.extend(fish_update.effects);

    // Passive: environmental drift.
    effects.extend(decay::effects(state, cfg));
    effects.extend(evaporation::effects(state, cfg));
    effects.extend(temperature::effects(state, cfg));
    effects.extend(nitrogen::effects(state, cfg));
    effects.extend(gas_exchange::effects(state, cfg));
    effects.extend(ph::effects(state, cfg));
    effects.extend(algae::effects(state, cfg));

    let mut next = state.clone();
    next.equipment = new_equipment;
    next.plants = plant_update
        .plants
        .into_iter()
        .filter(|p| p.size_pct > 0.0)
        .collect();
    next.fish = fish_update.fish;
    for message in plant_update.deaths {
        next.push_log("plants", Severity::Warning, message);
    }
    for message in fish_update.deaths {
        next.push_log("livestock", Severity::Warning, message);
    }

    apply_effects(&mut next, &effects);
    alerts::update(&mut next);
    next.tick += 1;
    next
}
