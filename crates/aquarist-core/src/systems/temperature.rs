//! Temperature drift: Newtonian cooling toward room temperature.
//!
//! The rate is scaled down for larger tanks via
//! `(reference_volume / capacity)^volume_exponent`, a thermal-mass
//! approximation. The heater counteracts this from the immediate tier; this
//! system only models the ambient pull.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::math;

use crate::effect::{Effect, Tier};
use crate::resources::ResourceKind;
use crate::state::SimulationState;

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    let tc = &cfg.temperature;
    let thermal_mass =
        math::safe_ratio(tc.reference_volume_l, state.tank.capacity_l).powf(tc.volume_exponent);
    let delta = math::approach_delta(
        state.resources.temperature_c,
        state.environment.room_temp_c,
        tc.drift_rate_per_hour * thermal_mass,
    );
    if delta == 0.0 {
        return Vec::new();
    }
    vec![Effect::new(
        Tier::Passive,
        ResourceKind::Temperature,
        delta,
        "temperature-drift",
    )]
}
