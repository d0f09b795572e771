//! Player actions: maintenance, dosing, stocking, and equipment control.
//!
//! Actions are instantaneous edits between ticks. Each one validates its
//! inputs against the current snapshot, then either mutates a copy
//! directly (actions bypass the effect tiers) and appends exactly one log
//! entry, or returns the snapshot unchanged with a rejection message.
//! Actions never advance the tick.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::math;
use aquarist_logic::species::{FishSpecies, PlantSpecies, Sex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::resources::{ResourceKind, Resources};
use crate::state::{Fish, Plant, Severity, SimulationState};

/// Size a freshly planted specimen starts at, percent of mature size.
const NEW_PLANT_SIZE_PCT: f64 = 10.0;
/// Range a blind algae scrub removes, as a fraction of the film.
const SCRUB_RANGE: (f64, f64) = (0.10, 0.30);

/// A toggleable device, for [`Action::ToggleEquipment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    Heater,
    Filter,
    Powerhead,
    AutoTopOff,
    Light,
    Co2Injector,
    AirPump,
}

/// Everything a keeper can do to the tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    /// Sprinkle food on the surface.
    Feed { grams: f64 },
    /// Dose liquid fertilizer.
    Dose { amount_ml: f64 },
    /// Drain a fraction of the water column and refill with tap water.
    WaterChange { fraction: f64 },
    /// Refill to capacity with tap water, compensating evaporation.
    TopOff,
    /// Scrub algae off the glass. Removes a random share of the film
    /// unless an exact fraction is given.
    ScrubAlgae { percent: Option<f64> },
    AddPlant { species: PlantSpecies },
    RemovePlant { id: u64 },
    AddFish { species: FishSpecies, sex: Sex },
    RemoveFish { id: u64 },
    SetHeaterTarget { celsius: f64 },
    ToggleEquipment { device: Device },
}

/// Result of applying an action: the next snapshot and a human-readable
/// message. On rejection the snapshot is the input, untouched, and the
/// message explains why; on success the message matches the log entry.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub state: SimulationState,
    pub accepted: bool,
    pub message: Option<String>,
}

fn reject(state: &SimulationState, message: impl Into<String>) -> ActionOutcome {
    ActionOutcome {
        state: state.clone(),
        accepted: false,
        message: Some(message.into()),
    }
}

/// Log the message on the snapshot and return it as the outcome text.
fn accept(mut state: SimulationState, message: String) -> ActionOutcome {
    state.push_log("action", Severity::Info, message.clone());
    ActionOutcome {
        state,
        accepted: true,
        message: Some(message),
    }
}

/// Deposits bypass the effect tiers, so they clamp against the registry
/// here; a pour past a bound settles at the bound.
fn add_clamped(resources: &mut Resources, kind: ResourceKind, amount: f64) {
    let spec = kind.spec();
    let next = resources.get(kind) + amount;
    resources.set(kind, next.clamp(spec.min, spec.max));
}

/// Apply an action with the default config and the thread RNG.
pub fn apply_action(state: &SimulationState, action: &Action) -> ActionOutcome {
    apply_action_with(state, action, &EngineConfig::default(), &mut rand::thread_rng())
}

pub fn apply_action_with(
    state: &SimulationState,
    action: &Action,
    cfg: &EngineConfig,
    rng: &mut impl Rng,
) -> ActionOutcome {
    match action {
        Action::Feed { grams } => {
            if !grams.is_finite() || *grams <= 0.0 {
                return reject(state, "feed amount must be positive");
            }
            let mut next = state.clone();
            add_clamped(&mut next.resources, ResourceKind::Food, *grams);
            accept(next, format!("fed {grams:.1} g"))
        }

        Action::Dose { amount_ml } => {
            if !amount_ml.is_finite() || *amount_ml <= 0.0 {
                return reject(state, "dose amount must be positive");
            }
            let f = &cfg.fertilizer;
            let mut next = state.clone();
            add_clamped(&mut next.resources, ResourceKind::Nitrate, amount_ml * f.nitrate_mg_per_ml);
            add_clamped(
                &mut next.resources,
                ResourceKind::Phosphate,
                amount_ml * f.phosphate_mg_per_ml,
            );
            add_clamped(
                &mut next.resources,
                ResourceKind::Potassium,
                amount_ml * f.potassium_mg_per_ml,
            );
            add_clamped(&mut next.resources, ResourceKind::Iron, amount_ml * f.iron_mg_per_ml);
            accept(next, format!("dosed {amount_ml:.1} ml fertilizer"))
        }

        Action::WaterChange { fraction } => {
            if !fraction.is_finite() || *fraction <= 0.0 || *fraction > 1.0 {
                return reject(state, "water change fraction must be in (0, 1]");
            }
            if state.tank.water_l <= 0.0 {
                return reject(state, "tank is empty");
            }
            let mut next = state.clone();
            let removed_l = next.tank.water_l * fraction;
            let kept_l = next.tank.water_l - removed_l;
            // The drained water carries its share of every dissolved mass.
            for kind in Resources::mass_based() {
                let mass = next.resources.get(*kind);
                next.resources.set(*kind, mass * (1.0 - fraction));
            }
            next.resources.temperature_c = math::blend(
                kept_l,
                next.resources.temperature_c,
                removed_l,
                next.environment.tap_temp_c,
            );
            next.resources.ph = math::blend(
                kept_l,
                next.resources.ph,
                removed_l,
                next.environment.tap_ph,
            );
            accept(next, format!("changed {:.0}% of the water", fraction * 100.0))
        }

        Action::TopOff => {
            let deficit = state.tank.capacity_l - state.tank.water_l;
            if deficit <= 0.0 {
                return reject(state, "tank is already full");
            }
            let mut next = state.clone();
            // Dissolved masses stay put; only the solvent changes, so every
            // ppm reading falls.
            next.resources.temperature_c = math::blend(
                next.tank.water_l,
                next.resources.temperature_c,
                deficit,
                next.environment.tap_temp_c,
            );
            next.resources.ph = math::blend(
                next.tank.water_l,
                next.resources.ph,
                deficit,
                next.environment.tap_ph,
            );
            next.tank.water_l = next.tank.capacity_l;
            accept(next, format!("topped off {deficit:.1} L"))
        }

        Action::ScrubAlgae { percent } => {
            let share = match percent {
                Some(p) => {
                    if !p.is_finite() || *p < 0.0 || *p > 1.0 {
                        return reject(state, "scrub fraction must be in [0, 1]");
                    }
                    *p
                }
                None => rng.gen_range(SCRUB_RANGE.0..=SCRUB_RANGE.1),
            };
            let mut next = state.clone();
            next.resources.algae *= 1.0 - share;
            accept(next, format!("scrubbed {:.0}% of the algae", share * 100.0))
        }

        Action::AddPlant { species } => {
            let mut next = state.clone();
            let id = next.alloc_id();
            next.plants.push(Plant {
                id,
                species: *species,
                size_pct: NEW_PLANT_SIZE_PCT,
                condition: 100.0,
            });
            accept(next, format!("planted a {}", species.spec().name))
        }

        Action::RemovePlant { id } => {
            let Some(index) = state.plants.iter().position(|p| p.id == *id) else {
                return reject(state, format!("no plant with id {id}"));
            };
            let mut next = state.clone();
            let plant = next.plants.remove(index);
            accept(next, format!("removed a {}", plant.species.spec().name))
        }

        Action::AddFish { species, sex } => {
            let spec = species.spec();
            let mut next = state.clone();
            let id = next.alloc_id();
            next.fish.push(Fish {
                id,
                species: *species,
                mass_g: spec.adult_mass_g,
                health: 100.0,
                age_h: 0,
                hunger: 50.0,
                sex: *sex,
            });
            accept(next, format!("introduced a {}", spec.name))
        }

        Action::RemoveFish { id } => {
            let Some(index) = state.fish.iter().position(|f| f.id == *id) else {
                return reject(state, format!("no fish with id {id}"));
            };
            let mut next = state.clone();
            let fish = next.fish.remove(index);
            accept(next, format!("removed a {}", fish.species.spec().name))
        }

        Action::SetHeaterTarget { celsius } => {
            let spec = ResourceKind::Temperature.spec();
            if !celsius.is_finite() || *celsius < spec.min || *celsius > spec.max {
                return reject(
                    state,
                    format!("heater target must be between {} and {} C", spec.min, spec.max),
                );
            }
            let mut next = state.clone();
            next.equipment.heater.target_c = *celsius;
            accept(next, format!("heater target set to {celsius:.1} C"))
        }

        Action::ToggleEquipment { device } => {
            let mut next = state.clone();
            let (name, now_enabled) = {
                let e = &mut next.equipment;
                match device {
                    Device::Heater => {
                        e.heater.enabled = !e.heater.enabled;
                        ("heater", e.heater.enabled)
                    }
                    Device::Filter => {
                        e.filter.enabled = !e.filter.enabled;
                        ("filter", e.filter.enabled)
                    }
                    Device::Powerhead => {
                        e.powerhead.enabled = !e.powerhead.enabled;
                        ("powerhead", e.powerhead.enabled)
                    }
                    Device::AutoTopOff => {
                        e.ato.enabled = !e.ato.enabled;
                        ("auto top-off", e.ato.enabled)
                    }
                    Device::Light => {
                        e.light.enabled = !e.light.enabled;
                        ("light", e.light.enabled)
                    }
                    Device::Co2Injector => {
                        e.co2.enabled = !e.co2.enabled;
                        ("CO2 injector", e.co2.enabled)
                    }
                    Device::AirPump => {
                        e.air_pump.enabled = !e.air_pump.enabled;
                        ("air pump", e.air_pump.enabled)
                    }
                }
            };
            let verb = if now_enabled { "enabled" } else { "disabled" };
            accept(next, format!("{verb} the {name}"))
        }
    }
}
