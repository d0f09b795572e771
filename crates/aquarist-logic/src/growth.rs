//! Growth and condition formulas shared by the plant subsystem and the
//! nitrogen cycle's bacteria colonies.

use crate::config::{NutrientConfig, PlantConfig};
use crate::math;
use crate::species::DemandTier;

/// Overgrowth penalty on the aggregate biomass pool: 0 at or below the
/// start size, rising linearly to the maximum penalty at the full size.
pub fn overgrowth_penalty(mean_size_pct: f64, cfg: &PlantConfig) -> f64 {
    let span = cfg.overgrowth_full_pct - cfg.overgrowth_start_pct;
    if span <= 0.0 || mean_size_pct <= cfg.overgrowth_start_pct {
        return 0.0;
    }
    let t = ((mean_size_pct - cfg.overgrowth_start_pct) / span).min(1.0);
    t * cfg.overgrowth_max_penalty
}

/// Combined nutrient sufficiency for a plant: Liebig minimum of the four
/// macro/micro nutrient factors, each demand-scaled by the species tier.
#[allow(clippy::too_many_arguments)]
pub fn nutrient_sufficiency(
    nitrate_ppm: f64,
    phosphate_ppm: f64,
    potassium_ppm: f64,
    iron_ppm: f64,
    demand: DemandTier,
    cfg: &NutrientConfig,
) -> f64 {
    let m = demand.multiplier();
    math::liebig(&[
        math::sufficiency(nitrate_ppm, cfg.optimal_nitrate_ppm * m),
        math::sufficiency(phosphate_ppm, cfg.optimal_phosphate_ppm * m),
        math::sufficiency(potassium_ppm, cfg.optimal_potassium_ppm * m),
        math::sufficiency(iron_ppm, cfg.optimal_iron_ppm * m),
    ])
}

/// Hourly condition change for a plant at the given nutrient sufficiency.
/// Four bands: thriving recovers, adequate slowly improves, struggling
/// slowly decays, starving rapidly decays.
pub fn condition_delta(sufficiency: f64, cfg: &NutrientConfig) -> f64 {
    if sufficiency >= cfg.thriving_threshold {
        cfg.recover_per_hour
    } else if sufficiency >= cfg.adequate_threshold {
        cfg.improve_per_hour
    } else if sufficiency >= cfg.struggling_threshold {
        -cfg.decay_per_hour
    } else {
        -cfg.starve_per_hour
    }
}

/// Size percentage shed this hour by a plant whose condition sits below
/// the shedding threshold, proportional to how far below it sits.
/// Zero at or above the threshold.
pub fn shed_pct(condition: f64, cfg: &NutrientConfig) -> f64 {
    if condition >= cfg.shed_threshold || cfg.shed_threshold <= 0.0 {
        return 0.0;
    }
    let shortfall = (cfg.shed_threshold - condition) / cfg.shed_threshold;
    shortfall * cfg.shed_max_pct_per_hour
}

/// One logistic growth step for a bacteria colony: growth proportional to
/// the current population and the remaining headroom toward the carrying
/// capacity. Returns the delta. Zero or negative capacity yields no growth.
pub fn logistic_step(population: f64, capacity: f64, rate: f64) -> f64 {
    if capacity <= 0.0 || population <= 0.0 {
        return 0.0;
    }
    let headroom = 1.0 - population / capacity;
    if headroom <= 0.0 {
        return 0.0;
    }
    population * rate * headroom
}
