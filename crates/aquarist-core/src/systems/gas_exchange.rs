//! Surface gas exchange for dissolved O2 and CO2.
//!
//! O2 equilibrates toward a temperature-dependent saturation (warmer water
//! holds less), CO2 toward a constant atmospheric level. Both use an
//! exponential approach whose rate scales with water turnover up to an
//! optimal value; still water with no aeration exchanges nothing. An air
//! pump multiplies the exchange rate and injects O2 directly while the
//! water sits below saturation, independent of flow.

use aquarist_logic::config::{EngineConfig, GasExchangeConfig};
use aquarist_logic::math;

use crate::effect::{Effect, Tier};
use crate::equipment::turnover_per_hour;
use crate::resources::ResourceKind;
use crate::state::SimulationState;

/// Temperature-dependent O2 saturation, mg/L, floored at the configured
/// minimum.
pub fn o2_saturation(temp_c: f64, cfg: &GasExchangeConfig) -> f64 {
    (cfg.o2_saturation_base + cfg.o2_saturation_slope * (temp_c - cfg.o2_saturation_ref_c))
        .max(cfg.o2_saturation_min)
}

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    let gc = &cfg.gas_exchange;
    let aerated = state.equipment.air_pump.enabled;
    let flow_factor = (turnover_per_hour(state) / gc.optimal_turnover_per_hour).min(1.0);

    let mut rate = gc.base_rate_per_hour * flow_factor;
    if aerated {
        rate *= gc.aeration_rate_multiplier;
    }

    let saturation = o2_saturation(state.resources.temperature_c, gc);
    let mut out = Vec::new();

    if rate > 0.0 {
        let o2_delta = math::approach_delta(state.resources.oxygen_mg_l, saturation, rate);
        if o2_delta != 0.0 {
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::Oxygen,
                o2_delta,
                "gas-exchange",
            ));
        }
        let co2_delta = math::approach_delta(state.resources.co2_mg_l, gc.co2_equilibrium, rate);
        if co2_delta != 0.0 {
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::CarbonDioxide,
                co2_delta,
                "gas-exchange",
            ));
        }
    }

    // Direct injection from the airstone, flow or no flow.
    if aerated && state.resources.oxygen_mg_l < saturation {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Oxygen,
            gc.aeration_o2_mg_l_per_hour,
            "air-pump",
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_simulation, SimulationConfig};

    fn base_state() -> SimulationState {
        create_simulation(&SimulationConfig::default())
    }

    fn delta(effects: &[Effect], kind: ResourceKind) -> f64 {
        effects
            .iter()
            .filter(|e| e.resource == kind)
            .map(|e| e.delta)
            .sum()
    }

    #[test]
    fn test_saturation_curve() {
        let gc = GasExchangeConfig::default();
        let cold = o2_saturation(10.0, &gc);
        let ref_t = o2_saturation(gc.o2_saturation_ref_c, &gc);
        let warm = o2_saturation(30.0, &gc);
        assert!(cold > ref_t, "cold water holds more oxygen");
        assert!(warm < ref_t);
        assert!((ref_t - gc.o2_saturation_base).abs() < 1e-12);
        // Floor kicks in at absurd temperatures.
        assert_eq!(o2_saturation(100.0, &gc), gc.o2_saturation_min);
    }

    #[test]
    fn test_no_flow_no_aeration_no_exchange() {
        let cfg = EngineConfig::default();
        let mut state = base_state();
        state.equipment.filter.enabled = false;
        state.equipment.powerhead.enabled = false;
        state.equipment.air_pump.enabled = false;
        state.resources.oxygen_mg_l = 2.0; // far from saturation
        assert!(effects(&state, &cfg).is_empty());
    }

    #[test]
    fn test_low_o2_recovers_toward_saturation() {
        let cfg = EngineConfig::default();
        let mut state = base_state();
        state.resources.oxygen_mg_l = 3.0;
        let out = effects(&state, &cfg);
        assert!(delta(&out, ResourceKind::Oxygen) > 0.0);
    }

    #[test]
    fn test_excess_co2_offgasses() {
        let cfg = EngineConfig::default();
        let mut state = base_state();
        state.resources.co2_mg_l = 30.0;
        let out = effects(&state, &cfg);
        assert!(delta(&out, ResourceKind::CarbonDioxide) < 0.0);
    }

    #[test]
    fn test_flow_factor_caps_at_optimal() {
        let cfg = EngineConfig::default();
        let mut optimal = base_state();
        optimal.equipment.filter.flow_l_per_hour =
            cfg.gas_exchange.optimal_turnover_per_hour * optimal.tank.water_l;
        optimal.resources.oxygen_mg_l = 3.0;

        let mut torrent = optimal.clone();
        torrent.equipment.filter.flow_l_per_hour *= 4.0;

        let a = delta(&effects(&optimal, &cfg), ResourceKind::Oxygen);
        let b = delta(&effects(&torrent, &cfg), ResourceKind::Oxygen);
        assert!((a - b).abs() < 1e-9, "beyond optimal turnover adds nothing");
    }

    #[test]
    fn test_aeration_injects_below_saturation_only() {
        let cfg = EngineConfig::default();
        let mut state = base_state();
        state.equipment.air_pump.enabled = true;
        state.equipment.filter.enabled = false;
        state.equipment.powerhead.enabled = false;
        state.resources.oxygen_mg_l = 4.0;
        let out = effects(&state, &cfg);
        // No flow, but the airstone still injects.
        assert!(delta(&out, ResourceKind::Oxygen) > 0.0);

        state.resources.oxygen_mg_l =
            o2_saturation(state.resources.temperature_c, &cfg.gas_exchange);
        let out = effects(&state, &cfg);
        let injected: f64 = out
            .iter()
            .filter(|e| e.source == "air-pump")
            .map(|e| e.delta)
            .sum();
        assert_eq!(injected, 0.0, "no injection at saturation");
    }

    #[test]
    fn test_aeration_multiplies_exchange() {
        let cfg = EngineConfig::default();
        let mut plain = base_state();
        plain.resources.oxygen_mg_l = 3.0;
        let mut bubbly = plain.clone();
        bubbly.equipment.air_pump.enabled = true;
        let a = delta(&effects(&plain, &cfg), ResourceKind::Oxygen);
        let exchange_only: f64 = effects(&bubbly, &cfg)
            .iter()
            .filter(|e| e.source == "gas-exchange" && e.resource == ResourceKind::Oxygen)
            .map(|e| e.delta)
            .sum();
        assert!(exchange_only > a);
    }
}
