//! Per-fish stress scoring.
//!
//! Each environmental stressor contributes an additive score, scaled by
//! `1 - hardiness` so hardy species take proportionally less damage from
//! the same water. The livestock system subtracts the total from a base
//! hourly recovery to get the health delta.

use crate::config::LivestockConfig;
use crate::species::FishSpec;

/// Water conditions a fish experiences this hour, in display units
/// (concentrations already derived from mass where applicable).
#[derive(Debug, Clone, Copy)]
pub struct WaterConditions {
    pub temp_c: f64,
    pub ph: f64,
    pub ammonia_ppm: f64,
    pub nitrite_ppm: f64,
    pub nitrate_ppm: f64,
    pub oxygen_mg_l: f64,
    /// Current water level as a fraction of tank capacity.
    pub water_fraction: f64,
    /// Tank turnover in volumes per hour.
    pub turnover_per_hour: f64,
}

/// Total stress score for one fish this hour.
pub fn total_stress(
    water: &WaterConditions,
    hunger: f64,
    spec: &FishSpec,
    cfg: &LivestockConfig,
) -> f64 {
    let mut stress = 0.0;

    // Temperature deviation outside the species range.
    let (t_lo, t_hi) = spec.temp_range_c;
    if water.temp_c < t_lo {
        stress += (t_lo - water.temp_c) * cfg.temp_stress_per_c;
    } else if water.temp_c > t_hi {
        stress += (water.temp_c - t_hi) * cfg.temp_stress_per_c;
    }

    // pH deviation outside the species range.
    let (p_lo, p_hi) = spec.ph_range;
    if water.ph < p_lo {
        stress += (p_lo - water.ph) * cfg.ph_stress_per_unit;
    } else if water.ph > p_hi {
        stress += (water.ph - p_hi) * cfg.ph_stress_per_unit;
    }

    // Any ammonia or nitrite at all is toxic.
    if water.ammonia_ppm > 0.0 {
        stress += water.ammonia_ppm * cfg.ammonia_stress_per_ppm;
    }
    if water.nitrite_ppm > 0.0 {
        stress += water.nitrite_ppm * cfg.nitrite_stress_per_ppm;
    }

    // Nitrate only above the tolerance threshold.
    if water.nitrate_ppm > cfg.nitrate_threshold_ppm {
        stress += (water.nitrate_ppm - cfg.nitrate_threshold_ppm) * cfg.nitrate_stress_per_ppm;
    }

    // Prolonged hunger.
    if hunger > cfg.hunger_threshold {
        stress += (hunger - cfg.hunger_threshold) * cfg.hunger_stress_per_point;
    }

    // Hypoxia.
    if water.oxygen_mg_l < cfg.low_o2_threshold_mg_l {
        stress += (cfg.low_o2_threshold_mg_l - water.oxygen_mg_l) * cfg.low_o2_stress_per_mg_l;
    }

    // Low water level.
    if water.water_fraction < cfg.low_water_fraction {
        stress += cfg.low_water_stress;
    }

    // Flow above the species tolerance.
    if water.turnover_per_hour > spec.flow_tolerance_turnover {
        stress +=
            (water.turnover_per_hour - spec.flow_tolerance_turnover) * cfg.flow_stress_per_turnover;
    }

    stress * (1.0 - spec.hardiness)
}

/// Hourly health delta: base recovery minus total stress. The caller clamps
/// the resulting health to [0, 100].
pub fn health_delta(stress: f64, cfg: &LivestockConfig) -> f64 {
    cfg.base_recovery_per_hour - stress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::FishSpecies;

    fn clean_water() -> WaterConditions {
        WaterConditions {
            temp_c: 25.0,
            ph: 7.0,
            ammonia_ppm: 0.0,
            nitrite_ppm: 0.0,
            nitrate_ppm: 10.0,
            oxygen_mg_l: 8.0,
            water_fraction: 1.0,
            turnover_per_hour: 4.0,
        }
    }

    #[test]
    fn test_clean_water_no_stress() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::Guppy.spec();
        assert_eq!(total_stress(&clean_water(), 20.0, &spec, &cfg), 0.0);
        assert!(health_delta(0.0, &cfg) > 0.0, "healthy fish recover");
    }

    #[test]
    fn test_ammonia_is_always_toxic() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::Guppy.spec();
        let mut water = clean_water();
        water.ammonia_ppm = 0.1;
        assert!(total_stress(&water, 20.0, &spec, &cfg) > 0.0);
    }

    #[test]
    fn test_nitrate_threshold() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::Guppy.spec();
        let mut water = clean_water();
        water.nitrate_ppm = 40.0;
        assert_eq!(total_stress(&water, 20.0, &spec, &cfg), 0.0);
        water.nitrate_ppm = 60.0;
        assert!(total_stress(&water, 20.0, &spec, &cfg) > 0.0);
    }

    #[test]
    fn test_hardiness_scales_damage() {
        let cfg = LivestockConfig::default();
        let mut water = clean_water();
        water.ammonia_ppm = 1.0;
        let tetra = total_stress(&water, 20.0, &FishSpecies::NeonTetra.spec(), &cfg);
        let guppy = total_stress(&water, 20.0, &FishSpecies::Guppy.spec(), &cfg);
        assert!(
            tetra > guppy,
            "less hardy species take more stress from the same water"
        );
        // Exactly proportional to (1 - hardiness).
        let ratio = tetra / guppy;
        let expected = (1.0 - FishSpecies::NeonTetra.spec().hardiness)
            / (1.0 - FishSpecies::Guppy.spec().hardiness);
        assert!((ratio - expected).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_deviation_both_sides() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::Guppy.spec();
        let mut cold = clean_water();
        cold.temp_c = 18.0;
        let mut hot = clean_water();
        hot.temp_c = 32.0;
        assert!(total_stress(&cold, 20.0, &spec, &cfg) > 0.0);
        assert!(total_stress(&hot, 20.0, &spec, &cfg) > 0.0);
    }

    #[test]
    fn test_hunger_threshold() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::Guppy.spec();
        let water = clean_water();
        assert_eq!(total_stress(&water, 50.0, &spec, &cfg), 0.0);
        assert!(total_stress(&water, 80.0, &spec, &cfg) > 0.0);
    }

    #[test]
    fn test_low_water_and_flow() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::Betta.spec();
        let mut water = clean_water();
        water.water_fraction = 0.4;
        assert!(total_stress(&water, 20.0, &spec, &cfg) > 0.0);

        let mut torrent = clean_water();
        torrent.turnover_per_hour = 6.0; // Betta tolerates only 2.0
        assert!(total_stress(&torrent, 20.0, &spec, &cfg) > 0.0);
    }

    #[test]
    fn test_stressors_stack() {
        let cfg = LivestockConfig::default();
        let spec = FishSpecies::NeonTetra.spec();
        let mut water = clean_water();
        water.ammonia_ppm = 2.0;
        let one = total_stress(&water, 20.0, &spec, &cfg);
        water.oxygen_mg_l = 3.0;
        let two = total_stress(&water, 20.0, &spec, &cfg);
        assert!(two > one);
    }

    #[test]
    fn test_lethal_ammonia_overwhelms_recovery() {
        // 50 ppm ammonia must drive health down for any species,
        // regardless of hardiness.
        let cfg = LivestockConfig::default();
        let mut water = clean_water();
        water.ammonia_ppm = 50.0;
        for species in FishSpecies::all() {
            let stress = total_stress(&water, 20.0, &species.spec(), &cfg);
            assert!(
                health_delta(stress, &cfg) < 0.0,
                "{} should lose health in 50 ppm ammonia",
                species.spec().name
            );
        }
    }
}
