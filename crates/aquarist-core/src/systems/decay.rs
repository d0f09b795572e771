//! Food decay: uneaten food converts to waste at a Q10-scaled rate.
//!
//! A fixed fraction of the decayed mass becomes solid waste; the remainder
//! is treated as aerobically oxidized, producing CO2 and consuming O2 in a
//! configurable mg-per-gram ratio, converted to mg/L by the current water
//! volume.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::math;

use crate::effect::{Effect, Tier};
use crate::resources::ResourceKind;
use crate::state::SimulationState;

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    let dc = &cfg.decay;
    let food = state.resources.food_g;
    if food <= 0.0 {
        return Vec::new();
    }

    let rate = dc.base_rate_per_hour
        * math::q10_factor(state.resources.temperature_c, dc.ref_temp_c, dc.q10);
    let decayed = (food * rate).min(food);
    if decayed <= 0.0 {
        return Vec::new();
    }

    let solid = decayed * dc.solid_fraction;
    let oxidized = decayed - solid;

    let mut out = vec![
        Effect::new(Tier::Passive, ResourceKind::Food, -decayed, "decay"),
        Effect::new(Tier::Passive, ResourceKind::Waste, solid, "decay"),
    ];

    // Gas effects are concentrations; an empty tank gets none.
    let volume = state.tank.water_l;
    if volume > 0.0 && oxidized > 0.0 {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Oxygen,
            -(oxidized * dc.o2_mg_per_g) / volume,
            "decay",
        ));
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::CarbonDioxide,
            (oxidized * dc.co2_mg_per_g) / volume,
            "decay",
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_simulation, SimulationConfig};

    fn state_with_food(grams: f64) -> SimulationState {
        let mut state = create_simulation(&SimulationConfig::default());
        state.resources.food_g = grams;
        state
    }

    fn delta(effects: &[Effect], kind: ResourceKind) -> f64 {
        effects
            .iter()
            .filter(|e| e.resource == kind)
            .map(|e| e.delta)
            .sum()
    }

    #[test]
    fn test_no_food_no_effects() {
        let cfg = EngineConfig::default();
        let state = state_with_food(0.0);
        assert!(effects(&state, &cfg).is_empty());
    }

    #[test]
    fn test_decay_splits_solid_and_gas() {
        let cfg = EngineConfig::default();
        let state = state_with_food(10.0);
        let out = effects(&state, &cfg);
        let food_loss = -delta(&out, ResourceKind::Food);
        let solid = delta(&out, ResourceKind::Waste);
        assert!(food_loss > 0.0);
        assert!((solid - food_loss * cfg.decay.solid_fraction).abs() < 1e-9);
        assert!(delta(&out, ResourceKind::Oxygen) < 0.0);
        assert!(delta(&out, ResourceKind::CarbonDioxide) > 0.0);
    }

    #[test]
    fn test_q10_exactly_doubles_at_plus_ten() {
        let cfg = EngineConfig::default();
        let mut at_ref = state_with_food(10.0);
        at_ref.resources.temperature_c = cfg.decay.ref_temp_c;
        let mut warm = state_with_food(10.0);
        warm.resources.temperature_c = cfg.decay.ref_temp_c + 10.0;

        let base = -delta(&effects(&at_ref, &cfg), ResourceKind::Food);
        let scaled = -delta(&effects(&warm, &cfg), ResourceKind::Food);
        assert!(
            (scaled - base * cfg.decay.q10).abs() < 1e-9,
            "decay at Tref+10 must be exactly Q10x the rate at Tref"
        );
    }

    #[test]
    fn test_decay_capped_at_available_food() {
        let mut cfg = EngineConfig::default();
        cfg.decay.base_rate_per_hour = 5.0; // absurd rate
        let state = state_with_food(2.0);
        let out = effects(&state, &cfg);
        assert!((-delta(&out, ResourceKind::Food) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_volume_skips_gas() {
        let cfg = EngineConfig::default();
        let mut state = state_with_food(10.0);
        state.tank.water_l = 0.0;
        let out = effects(&state, &cfg);
        assert_eq!(delta(&out, ResourceKind::Oxygen), 0.0);
        assert_eq!(delta(&out, ResourceKind::CarbonDioxide), 0.0);
        // Solid decay still happens.
        assert!(delta(&out, ResourceKind::Waste) > 0.0);
    }
}
