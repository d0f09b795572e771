//! Algae film growth.
//!
//! Algae grow while the light is on, driven by nitrate availability, and
//! slowly die back in the dark. Growth consumes a little nitrate mass.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::math;

use crate::effect::{Effect, Tier};
use crate::equipment::light_on;
use crate::resources::ResourceKind;
use crate::state::SimulationState;

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    let ac = &cfg.algae;
    let mut out = Vec::new();

    if light_on(state) {
        let nutrient = math::sufficiency(state.ppm(ResourceKind::Nitrate), ac.optimal_nitrate_ppm);
        let growth = ac.growth_per_hour * state.equipment.light.intensity * nutrient;
        if growth > 0.0 {
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::Algae,
                growth,
                "algae",
            ));
            let uptake = (growth * ac.nitrate_mg_per_point).min(state.resources.nitrate_mg);
            if uptake > 0.0 {
                out.push(Effect::new(
                    Tier::Passive,
                    ResourceKind::Nitrate,
                    -uptake,
                    "algae",
                ));
            }
        }
    } else if state.resources.algae > 0.0 {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Algae,
            -ac.dark_decay_per_hour.min(state.resources.algae),
            "algae",
        ));
    }

    out
}
