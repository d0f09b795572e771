//! Tunable configuration records, one flat numeric record per system.
//!
//! Every record implements `Default` with documented values, so the engine
//! is fully runnable parameter-free. Systems accept an override and fall
//! back to these defaults. Values are empirically tuned for numeric
//! stability over thousands of simulated hours, not for physical exactness.

use serde::{Deserialize, Serialize};

/// Food-to-waste decay tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Fraction of uneaten food decaying per hour at the reference temperature.
    pub base_rate_per_hour: f64,
    /// Q10 multiplier for the decay rate.
    pub q10: f64,
    /// Reference temperature for Q10 scaling, Celsius.
    pub ref_temp_c: f64,
    /// Fraction of decayed food that becomes solid waste; the remainder is
    /// treated as aerobically oxidized.
    pub solid_fraction: f64,
    /// Dissolved O2 consumed per gram of oxidized food, in mg.
    pub o2_mg_per_g: f64,
    /// Dissolved CO2 produced per gram of oxidized food, in mg.
    pub co2_mg_per_g: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            base_rate_per_hour: 0.05,
            q10: 2.0,
            ref_temp_c: 25.0,
            solid_fraction: 0.6,
            o2_mg_per_g: 1000.0,
            co2_mg_per_g: 1400.0,
        }
    }
}

/// Evaporation tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaporationConfig {
    /// Fraction of the water column evaporating per day with no
    /// temperature differential and no lid.
    pub base_rate_per_day: f64,
    /// Temperature differential (water vs room) that doubles the rate, Celsius.
    pub doubling_interval_c: f64,
}

impl Default for EvaporationConfig {
    fn default() -> Self {
        Self {
            base_rate_per_day: 0.01,
            doubling_interval_c: 8.0,
        }
    }
}

/// Temperature drift and heater tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureConfig {
    /// Fraction of the water/room gap closed per hour for a tank at the
    /// reference volume (Newtonian cooling).
    pub drift_rate_per_hour: f64,
    /// Tank volume the drift rate is calibrated for, liters.
    pub reference_volume_l: f64,
    /// Exponent for the thermal-mass scaling `(reference/capacity)^exp`.
    /// Larger tanks drift slower.
    pub volume_exponent: f64,
    /// Degrees per hour a running heater adds at the reference volume.
    pub heater_rate_c_per_hour: f64,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            drift_rate_per_hour: 0.05,
            reference_volume_l: 100.0,
            volume_exponent: 0.5,
            heater_rate_c_per_hour: 0.6,
        }
    }
}

/// Nitrogen cycle tunables: mineralization plus two nitrifier colonies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NitrogenConfig {
    /// Fraction of solid waste mineralized to ammonia per hour at the
    /// reference temperature.
    pub mineralization_rate_per_hour: f64,
    /// Ammonia produced per gram of mineralized waste, mg.
    pub ammonia_mg_per_g_waste: f64,
    /// Q10 multiplier for mineralization and nitrifier activity.
    pub q10: f64,
    /// Reference temperature for Q10 scaling, Celsius.
    pub ref_temp_c: f64,
    /// Logistic growth rate of each colony per hour when its substrate
    /// is available.
    pub colony_growth_rate_per_hour: f64,
    /// Colony carrying capacity per cm2 of colonization surface,
    /// in colony units.
    pub colony_units_per_cm2: f64,
    /// Substrate concentration (ppm) below which a colony stops growing
    /// and starts dying back.
    pub substrate_floor_ppm: f64,
    /// Fraction of a starved colony lost per hour.
    pub colony_decay_per_hour: f64,
    /// Ammonia oxidized per AOB colony unit per hour, mg.
    pub ammonia_mg_per_unit_hour: f64,
    /// Nitrite oxidized per NOB colony unit per hour, mg.
    pub nitrite_mg_per_unit_hour: f64,
    /// Mass ratio of nitrite produced per ammonia oxidized (46/17).
    pub nitrite_per_ammonia: f64,
    /// Mass ratio of nitrate produced per nitrite oxidized (62/46).
    pub nitrate_per_nitrite: f64,
}

impl Default for NitrogenConfig {
    fn default() -> Self {
        Self {
            mineralization_rate_per_hour: 0.01,
            ammonia_mg_per_g_waste: 30.0,
            q10: 2.0,
            ref_temp_c: 25.0,
            colony_growth_rate_per_hour: 0.03,
            colony_units_per_cm2: 0.5,
            substrate_floor_ppm: 0.02,
            colony_decay_per_hour: 0.005,
            ammonia_mg_per_unit_hour: 0.02,
            nitrite_mg_per_unit_hour: 0.02,
            nitrite_per_ammonia: 2.7,
            nitrate_per_nitrite: 1.35,
        }
    }
}

/// Surface areas contributing to nitrifier colonization, cm2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Glass surface per liter of tank capacity.
    pub glass_cm2_per_l: f64,
    /// Biological media surface of a running filter.
    pub filter_media_cm2: f64,
    /// Surface per hardscape item.
    pub hardscape_cm2_per_item: f64,
    /// Surface of a sand substrate bed.
    pub sand_cm2: f64,
    /// Surface of a gravel substrate bed.
    pub gravel_cm2: f64,
    /// Surface of an aquasoil substrate bed.
    pub soil_cm2: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            glass_cm2_per_l: 60.0,
            filter_media_cm2: 20_000.0,
            hardscape_cm2_per_item: 600.0,
            sand_cm2: 4_000.0,
            gravel_cm2: 12_000.0,
            soil_cm2: 18_000.0,
        }
    }
}

/// Gas exchange tunables for dissolved O2 and CO2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasExchangeConfig {
    /// O2 saturation at the reference temperature, mg/L.
    pub o2_saturation_base: f64,
    /// Saturation change per degree above the reference (negative:
    /// warmer water holds less oxygen), mg/L per Celsius.
    pub o2_saturation_slope: f64,
    /// Reference temperature for the saturation curve, Celsius.
    pub o2_saturation_ref_c: f64,
    /// Floor for the saturation curve, mg/L.
    pub o2_saturation_min: f64,
    /// Atmospheric-equilibrium CO2 target, mg/L.
    pub co2_equilibrium: f64,
    /// Fraction of the gap to equilibrium closed per hour at or above the
    /// optimal turnover.
    pub base_rate_per_hour: f64,
    /// Water turnover (tank volumes per hour) at which surface agitation
    /// stops improving exchange.
    pub optimal_turnover_per_hour: f64,
    /// Exchange-rate multiplier while an air pump runs.
    pub aeration_rate_multiplier: f64,
    /// Direct O2 injected by an air pump per hour while below saturation,
    /// mg/L, independent of flow.
    pub aeration_o2_mg_l_per_hour: f64,
}

impl Default for GasExchangeConfig {
    fn default() -> Self {
        Self {
            o2_saturation_base: 9.1,
            o2_saturation_slope: -0.16,
            o2_saturation_ref_c: 20.0,
            o2_saturation_min: 5.0,
            co2_equilibrium: 3.0,
            base_rate_per_hour: 0.3,
            optimal_turnover_per_hour: 5.0,
            aeration_rate_multiplier: 1.5,
            aeration_o2_mg_l_per_hour: 0.8,
        }
    }
}

/// pH drift tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhConfig {
    /// Baseline target with no hardscape and equilibrium CO2.
    pub neutral: f64,
    /// Maximum upward pull from calcite hardscape, pH units.
    pub calcite_max_pull: f64,
    /// Maximum downward pull from driftwood, pH units.
    pub driftwood_max_pull: f64,
    /// Diminishing-returns factor for stacked identical items
    /// (`pull = max_pull * (1 - factor^count)`).
    pub stack_factor: f64,
    /// Target depression per mg/L of CO2 above the equilibrium reference
    /// (carbonic-acid approximation).
    pub co2_depression_per_mg_l: f64,
    /// Fraction of the gap to the composite target closed per hour.
    pub approach_rate_per_hour: f64,
    /// Deltas smaller than this are suppressed as negligible.
    pub min_delta: f64,
}

impl Default for PhConfig {
    fn default() -> Self {
        Self {
            neutral: 7.0,
            calcite_max_pull: 1.2,
            driftwood_max_pull: 0.8,
            stack_factor: 0.6,
            co2_depression_per_mg_l: 0.02,
            approach_rate_per_hour: 0.1,
            min_delta: 0.001,
        }
    }
}

/// Algae growth tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgaeConfig {
    /// Algae points gained per lit hour at full nutrient sufficiency.
    pub growth_per_hour: f64,
    /// Nitrate concentration at which algae growth saturates, ppm.
    pub optimal_nitrate_ppm: f64,
    /// Algae points lost per unlit hour.
    pub dark_decay_per_hour: f64,
    /// Nitrate consumed per algae point grown, mg.
    pub nitrate_mg_per_point: f64,
}

impl Default for AlgaeConfig {
    fn default() -> Self {
        Self {
            growth_per_hour: 0.8,
            optimal_nitrate_ppm: 10.0,
            dark_decay_per_hour: 0.1,
            nitrate_mg_per_point: 4.0,
        }
    }
}

/// Plant photosynthesis, respiration, and growth tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantConfig {
    /// Photosynthesis output per plant unit (one plant at 100% size) per
    /// lit hour at full CO2/nitrate sufficiency.
    pub photo_rate_per_unit: f64,
    /// CO2 concentration at which photosynthesis saturates, mg/L.
    pub optimal_co2_mg_l: f64,
    /// Nitrate concentration at which photosynthesis saturates, ppm.
    pub optimal_nitrate_ppm: f64,
    /// O2 released per photosynthesis unit, mg.
    pub o2_mg_per_photo: f64,
    /// CO2 consumed per photosynthesis unit, mg.
    pub co2_mg_per_photo: f64,
    /// Nitrate consumed per photosynthesis unit, mg.
    pub nitrate_mg_per_photo: f64,
    /// Biomass grown per photosynthesis unit, grams.
    pub biomass_g_per_photo: f64,
    /// Respiration per plant unit per hour at the reference temperature,
    /// as a fraction of `photo_rate_per_unit`.
    pub respiration_fraction: f64,
    /// Q10 multiplier for respiration.
    pub respiration_q10: f64,
    /// Reference temperature for respiration, Celsius.
    pub ref_temp_c: f64,
    /// Size percentage at which the overgrowth penalty starts.
    pub overgrowth_start_pct: f64,
    /// Size percentage at which the penalty reaches its maximum.
    pub overgrowth_full_pct: f64,
    /// Penalty at `overgrowth_full_pct` (fraction of biomass lost).
    pub overgrowth_max_penalty: f64,
    /// Hard cap on individual plant size, percent of mature size.
    pub size_cap_pct: f64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            photo_rate_per_unit: 1.0,
            optimal_co2_mg_l: 15.0,
            optimal_nitrate_ppm: 10.0,
            o2_mg_per_photo: 60.0,
            co2_mg_per_photo: 80.0,
            nitrate_mg_per_photo: 3.0,
            biomass_g_per_photo: 0.5,
            respiration_fraction: 0.25,
            respiration_q10: 2.0,
            ref_temp_c: 25.0,
            overgrowth_start_pct: 100.0,
            overgrowth_full_pct: 200.0,
            overgrowth_max_penalty: 0.5,
            size_cap_pct: 200.0,
        }
    }
}

/// Plant nutrient sufficiency and condition tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientConfig {
    /// Nitrate concentration at full sufficiency for a medium-demand
    /// species, ppm.
    pub optimal_nitrate_ppm: f64,
    /// Phosphate concentration at full sufficiency, ppm.
    pub optimal_phosphate_ppm: f64,
    /// Potassium concentration at full sufficiency, ppm.
    pub optimal_potassium_ppm: f64,
    /// Iron concentration at full sufficiency, ppm.
    pub optimal_iron_ppm: f64,
    /// Phosphate consumed per photosynthesis unit, mg.
    pub phosphate_mg_per_photo: f64,
    /// Potassium consumed per photosynthesis unit, mg.
    pub potassium_mg_per_photo: f64,
    /// Iron consumed per photosynthesis unit, mg.
    pub iron_mg_per_photo: f64,
    /// Sufficiency at or above which condition recovers quickly.
    pub thriving_threshold: f64,
    /// Sufficiency at or above which condition improves slowly.
    pub adequate_threshold: f64,
    /// Sufficiency at or above which condition decays slowly
    /// (below it, the plant is starving and decays fast).
    pub struggling_threshold: f64,
    /// Condition points gained per thriving hour.
    pub recover_per_hour: f64,
    /// Condition points gained per adequate hour.
    pub improve_per_hour: f64,
    /// Condition points lost per struggling hour.
    pub decay_per_hour: f64,
    /// Condition points lost per starving hour.
    pub starve_per_hour: f64,
    /// Condition below which the plant sheds size.
    pub shed_threshold: f64,
    /// Maximum size percentage shed per hour at condition zero.
    pub shed_max_pct_per_hour: f64,
    /// Condition at or below which the plant dies.
    pub death_condition: f64,
    /// Size below which the plant dies, percent.
    pub death_size_pct: f64,
}

impl Default for NutrientConfig {
    fn default() -> Self {
        Self {
            optimal_nitrate_ppm: 10.0,
            optimal_phosphate_ppm: 1.0,
            optimal_potassium_ppm: 8.0,
            optimal_iron_ppm: 0.1,
            phosphate_mg_per_photo: 0.3,
            potassium_mg_per_photo: 2.0,
            iron_mg_per_photo: 0.05,
            thriving_threshold: 0.9,
            adequate_threshold: 0.6,
            struggling_threshold: 0.3,
            recover_per_hour: 2.0,
            improve_per_hour: 0.5,
            decay_per_hour: 1.0,
            starve_per_hour: 3.0,
            shed_threshold: 40.0,
            shed_max_pct_per_hour: 1.5,
            death_condition: 10.0,
            death_size_pct: 5.0,
        }
    }
}

/// Fish metabolism, stress, and death tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivestockConfig {
    /// Food needed per hour by a fully hungry fish, grams per gram of
    /// body mass.
    pub appetite_g_per_g_mass: f64,
    /// Hunger points relieved by fully satisfying the hour's need.
    pub hunger_relief: f64,
    /// Hunger points gained per hour regardless of feeding.
    pub hunger_per_hour: f64,
    /// Waste produced per gram of food eaten, grams.
    pub waste_g_per_food_g: f64,
    /// O2 consumed per gram of body mass per hour, mg.
    pub o2_mg_per_g_hour: f64,
    /// CO2 produced per gram of body mass per hour, mg.
    pub co2_mg_per_g_hour: f64,
    /// Health points recovered per hour before stress is subtracted.
    pub base_recovery_per_hour: f64,
    /// Stress per degree outside the species temperature range.
    pub temp_stress_per_c: f64,
    /// Stress per pH unit outside the species range.
    pub ph_stress_per_unit: f64,
    /// Stress per ppm of ammonia.
    pub ammonia_stress_per_ppm: f64,
    /// Stress per ppm of nitrite.
    pub nitrite_stress_per_ppm: f64,
    /// Nitrate concentration above which stress accrues, ppm.
    pub nitrate_threshold_ppm: f64,
    /// Stress per ppm of nitrate above the threshold.
    pub nitrate_stress_per_ppm: f64,
    /// Hunger above which stress accrues, points.
    pub hunger_threshold: f64,
    /// Stress per hunger point above the threshold.
    pub hunger_stress_per_point: f64,
    /// Dissolved O2 below which stress accrues, mg/L.
    pub low_o2_threshold_mg_l: f64,
    /// Stress per mg/L below the O2 threshold.
    pub low_o2_stress_per_mg_l: f64,
    /// Water level (fraction of capacity) below which stress accrues.
    pub low_water_fraction: f64,
    /// Flat stress while the water level is below the fraction above.
    pub low_water_stress: f64,
    /// Stress per turnover-per-hour above the species flow tolerance.
    pub flow_stress_per_turnover: f64,
    /// Per-hour death chance for a fish past its species maximum age.
    pub old_age_death_chance: f64,
    /// Grams of waste released per gram of body mass on death.
    pub death_decay_factor: f64,
}

impl Default for LivestockConfig {
    fn default() -> Self {
        Self {
            appetite_g_per_g_mass: 0.005,
            hunger_relief: 30.0,
            hunger_per_hour: 2.0,
            waste_g_per_food_g: 0.4,
            o2_mg_per_g_hour: 0.01,
            co2_mg_per_g_hour: 0.013,
            base_recovery_per_hour: 0.5,
            temp_stress_per_c: 0.5,
            ph_stress_per_unit: 2.0,
            ammonia_stress_per_ppm: 2.0,
            nitrite_stress_per_ppm: 1.5,
            nitrate_threshold_ppm: 40.0,
            nitrate_stress_per_ppm: 0.02,
            hunger_threshold: 50.0,
            hunger_stress_per_point: 0.02,
            low_o2_threshold_mg_l: 5.0,
            low_o2_stress_per_mg_l: 1.0,
            low_water_fraction: 0.5,
            low_water_stress: 1.0,
            flow_stress_per_turnover: 0.5,
            old_age_death_chance: 0.005,
            death_decay_factor: 0.1,
        }
    }
}

/// Liquid fertilizer formula: mass added per milliliter dosed, mg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerFormula {
    pub nitrate_mg_per_ml: f64,
    pub phosphate_mg_per_ml: f64,
    pub potassium_mg_per_ml: f64,
    pub iron_mg_per_ml: f64,
}

impl Default for FertilizerFormula {
    fn default() -> Self {
        Self {
            nitrate_mg_per_ml: 50.0,
            phosphate_mg_per_ml: 5.0,
            potassium_mg_per_ml: 40.0,
            iron_mg_per_ml: 1.0,
        }
    }
}

/// Aggregate of every per-system config record, all defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub decay: DecayConfig,
    pub evaporation: EvaporationConfig,
    pub temperature: TemperatureConfig,
    pub nitrogen: NitrogenConfig,
    pub surfaces: SurfaceConfig,
    pub gas_exchange: GasExchangeConfig,
    pub ph: PhConfig,
    pub algae: AlgaeConfig,
    pub plants: PlantConfig,
    pub nutrients: NutrientConfig,
    pub livestock: LivestockConfig,
    pub fertilizer: FertilizerFormula,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let cfg = EngineConfig::default();
        assert!(cfg.decay.base_rate_per_hour > 0.0 && cfg.decay.base_rate_per_hour < 1.0);
        assert!(cfg.decay.solid_fraction > 0.0 && cfg.decay.solid_fraction < 1.0);
        assert!(cfg.evaporation.base_rate_per_day < 0.1);
        assert!(cfg.temperature.drift_rate_per_hour < 1.0);
        assert!(cfg.gas_exchange.o2_saturation_min < cfg.gas_exchange.o2_saturation_base);
        assert!(cfg.ph.approach_rate_per_hour < 1.0);
        assert!(cfg.nutrients.thriving_threshold > cfg.nutrients.adequate_threshold);
        assert!(cfg.nutrients.adequate_threshold > cfg.nutrients.struggling_threshold);
        assert!(cfg.livestock.old_age_death_chance < 0.05);
    }

    #[test]
    fn test_default_fertilizer_formula() {
        let f = FertilizerFormula::default();
        assert_eq!(f.nitrate_mg_per_ml, 50.0);
        assert_eq!(f.phosphate_mg_per_ml, 5.0);
        assert_eq!(f.potassium_mg_per_ml, 40.0);
        assert_eq!(f.iron_mg_per_ml, 1.0);
    }

    #[test]
    fn test_nitrogen_stoichiometry() {
        let n = NitrogenConfig::default();
        // Mass ratios from molar masses 17 (NH3), 46 (NO2-), 62 (NO3-).
        assert!((n.nitrite_per_ammonia - 46.0 / 17.0).abs() < 0.01);
        assert!((n.nitrate_per_nitrite - 62.0 / 46.0).abs() < 0.01);
    }
}
