//! pH drift toward a composite target.
//!
//! The target starts neutral, is pulled up by calcite hardscape and down
//! by driftwood (each with diminishing returns per stacked item), and is
//! depressed linearly by CO2 above the atmospheric reference (carbonic
//! acid approximation). Actual pH closes a fixed fraction of the gap per
//! hour; sub-threshold deltas are suppressed as negligible.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::math;

use crate::effect::{Effect, Tier};
use crate::equipment::HardscapeItem;
use crate::resources::ResourceKind;
use crate::state::SimulationState;

/// The composite pH target for the current hardscape and CO2 level.
pub fn target_ph(state: &SimulationState, cfg: &EngineConfig) -> f64 {
    let pc = &cfg.ph;
    let calcite = state.equipment.count_hardscape(HardscapeItem::CalciteRock);
    let driftwood = state.equipment.count_hardscape(HardscapeItem::Driftwood);

    let up = pc.calcite_max_pull * math::diminishing_pull(pc.stack_factor, calcite);
    let down = pc.driftwood_max_pull * math::diminishing_pull(pc.stack_factor, driftwood);

    let co2_excess = (state.resources.co2_mg_l - cfg.gas_exchange.co2_equilibrium).max(0.0);
    pc.neutral + up - down - co2_excess * pc.co2_depression_per_mg_l
}

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    let pc = &cfg.ph;
    let delta = math::approach_delta(
        state.resources.ph,
        target_ph(state, cfg),
        pc.approach_rate_per_hour,
    );
    if delta.abs() < pc.min_delta {
        return Vec::new();
    }
    vec![Effect::new(
        Tier::Passive,
        ResourceKind::Ph,
        delta,
        "ph-drift",
    )]
}
