//! Evaporation: water leaves, mass stays.
//!
//! The daily rate doubles per configured degrees of water/room temperature
//! differential and is scaled by the lid factor. Because mass-based
//! resources are untouched while the volume shrinks, evaporation
//! concentrates them automatically.

use aquarist_logic::config::EngineConfig;

use crate::effect::{Effect, Tier};
use crate::resources::ResourceKind;
use crate::state::SimulationState;

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    if state.tank.water_l <= 0.0 {
        return Vec::new();
    }
    let ec = &cfg.evaporation;
    let differential = (state.resources.temperature_c - state.environment.room_temp_c).abs();
    let daily_rate = ec.base_rate_per_day
        * 2.0_f64.powf(differential / ec.doubling_interval_c)
        * state.equipment.lid.evaporation_factor();
    let hourly_l = daily_rate / 24.0 * state.tank.water_l;
    if hourly_l <= 0.0 {
        return Vec::new();
    }
    vec![Effect::new(
        Tier::Passive,
        ResourceKind::WaterLevel,
        -hourly_l,
        "evaporation",
    )]
}
