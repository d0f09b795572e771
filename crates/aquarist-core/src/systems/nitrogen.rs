//! The nitrogen cycle: waste -> ammonia -> nitrite -> nitrate.
//!
//! Two bacteria populations mediate the conversions: AOB oxidize ammonia
//! to nitrite, NOB oxidize nitrite to nitrate. Each colony grows
//! logistically toward a carrying capacity set by the available
//! colonization surface and dies back when its substrate falls below a
//! maintenance threshold. All three nitrogen compounds are stored as mass
//! (mg); conversions move mass between pools, never editing ppm.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::growth;
use aquarist_logic::math;

use crate::effect::{Effect, Tier};
use crate::equipment::colonization_surface_cm2;
use crate::resources::ResourceKind;
use crate::state::SimulationState;

pub fn effects(state: &SimulationState, cfg: &EngineConfig) -> Vec<Effect> {
    let nc = &cfg.nitrogen;
    let mut out = Vec::new();
    let activity = math::q10_factor(state.resources.temperature_c, nc.ref_temp_c, nc.q10);

    // Mineralization: solid waste releases ammonia.
    let waste = state.resources.waste_g;
    if waste > 0.0 {
        let mineralized_g = (waste * nc.mineralization_rate_per_hour * activity).min(waste);
        if mineralized_g > 0.0 {
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::Waste,
                -mineralized_g,
                "nitrogen-cycle",
            ));
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::Ammonia,
                mineralized_g * nc.ammonia_mg_per_g_waste,
                "nitrogen-cycle",
            ));
        }
    }

    let capacity = colonization_surface_cm2(state, &cfg.surfaces) * nc.colony_units_per_cm2;

    // AOB: ammonia -> nitrite.
    let aob = state.resources.aob_colony;
    let ammonia_ppm = state.ppm(ResourceKind::Ammonia);
    if ammonia_ppm >= nc.substrate_floor_ppm {
        let grown = growth::logistic_step(aob, capacity, nc.colony_growth_rate_per_hour * activity);
        if grown > 0.0 {
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::AobColony,
                grown,
                "nitrogen-cycle",
            ));
        }
    } else if aob > 0.0 {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::AobColony,
            -aob * nc.colony_decay_per_hour,
            "nitrogen-cycle",
        ));
    }
    let oxidized_nh3 = (aob * nc.ammonia_mg_per_unit_hour * activity)
        .min(state.resources.ammonia_mg);
    if oxidized_nh3 > 0.0 {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Ammonia,
            -oxidized_nh3,
            "nitrogen-cycle",
        ));
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Nitrite,
            oxidized_nh3 * nc.nitrite_per_ammonia,
            "nitrogen-cycle",
        ));
    }

    // NOB: nitrite -> nitrate.
    let nob = state.resources.nob_colony;
    let nitrite_ppm = state.ppm(ResourceKind::Nitrite);
    if nitrite_ppm >= nc.substrate_floor_ppm {
        let grown = growth::logistic_step(nob, capacity, nc.colony_growth_rate_per_hour * activity);
        if grown > 0.0 {
            out.push(Effect::new(
                Tier::Passive,
                ResourceKind::NobColony,
                grown,
                "nitrogen-cycle",
            ));
        }
    } else if nob > 0.0 {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::NobColony,
            -nob * nc.colony_decay_per_hour,
            "nitrogen-cycle",
        ));
    }
    let oxidized_no2 = (nob * nc.nitrite_mg_per_unit_hour * activity)
        .min(state.resources.nitrite_mg);
    if oxidized_no2 > 0.0 {
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Nitrite,
            -oxidized_no2,
            "nitrogen-cycle",
        ));
        out.push(Effect::new(
            Tier::Passive,
            ResourceKind::Nitrate,
            oxidized_no2 * nc.nitrate_per_nitrite,
            "nitrogen-cycle",
        ));
    }

    out
}
