//! The livestock subsystem: feeding, metabolism, stress, and death.
//!
//! Fish feed in hunger order from the shared food pool, respire in
//! proportion to body mass, and take stress from the pre-tick water
//! conditions via `aquarist_logic::stress`. Health hitting zero kills a
//! fish immediately; fish past their species lifespan also roll an
//! hourly old-age death chance, the subsystem's only use of randomness.
//! A death releases part of the body mass as waste and produces exactly
//! one notice for the event log.

use aquarist_logic::config::EngineConfig;
use aquarist_logic::stress::{self, WaterConditions};
use rand::Rng;

use crate::effect::{Effect, Tier};
use crate::equipment::turnover_per_hour;
use crate::resources::ResourceKind;
use crate::state::{Fish, SimulationState};

/// Result of one livestock-subsystem step.
#[derive(Debug, Default)]
pub struct FishUpdate {
    pub effects: Vec<Effect>,
    /// Replacement fish list; the dead are already removed.
    pub fish: Vec<Fish>,
    /// One message per fish death this hour.
    pub deaths: Vec<String>,
}

pub fn step(state: &SimulationState, cfg: &EngineConfig, rng: &mut impl Rng) -> FishUpdate {
    let mut update = FishUpdate::default();
    if state.fish.is_empty() {
        return update;
    }

    let lc = &cfg.livestock;
    let volume = state.tank.water_l;
    let water = WaterConditions {
        temp_c: state.resources.temperature_c,
        ph: state.resources.ph,
        ammonia_ppm: state.ppm(ResourceKind::Ammonia),
        nitrite_ppm: state.ppm(ResourceKind::Nitrite),
        nitrate_ppm: state.ppm(ResourceKind::Nitrate),
        oxygen_mg_l: state.resources.oxygen_mg_l,
        water_fraction: state.water_fraction(),
        turnover_per_hour: turnover_per_hour(state),
    };

    // Hungriest fish reach the food first.
    let mut order: Vec<&Fish> = state.fish.iter().collect();
    order.sort_by(|a, b| b.hunger.total_cmp(&a.hunger));

    let mut food_left = state.resources.food_g;
    let mut eaten_total = 0.0;
    let mut waste_total = 0.0;
    let mut o2_total_mg = 0.0;
    let mut co2_total_mg = 0.0;

    for fish in order {
        let spec = fish.species.spec();
        let mut next = fish.clone();

        let needed = next.hunger / 100.0 * next.mass_g * lc.appetite_g_per_g_mass;
        let eaten = needed.min(food_left);
        food_left -= eaten;
        eaten_total += eaten;
        waste_total += eaten * lc.waste_g_per_food_g;
        if needed > 0.0 {
            next.hunger -= lc.hunger_relief * (eaten / needed);
        }
        next.hunger = (next.hunger + lc.hunger_per_hour).clamp(0.0, 100.0);

        o2_total_mg += next.mass_g * lc.o2_mg_per_g_hour;
        co2_total_mg += next.mass_g * lc.co2_mg_per_g_hour;

        next.age_h += 1;
        let stress = stress::total_stress(&water, next.hunger, &spec, lc);
        next.health = (next.health + stress::health_delta(stress, lc)).clamp(0.0, 100.0);

        let cause = if next.health <= 0.0 {
            Some("succumbed to poor water conditions")
        } else if next.age_h > spec.max_age_h && rng.gen_bool(lc.old_age_death_chance) {
            Some("died of old age")
        } else {
            None
        };

        match cause {
            Some(cause) => {
                waste_total += next.mass_g * lc.death_decay_factor;
                update.deaths.push(format!("{} {cause}", spec.name));
            }
            None => update.fish.push(next),
        }
    }

    if eaten_total > 0.0 {
        update.effects.push(Effect::new(
            Tier::Active,
            ResourceKind::Food,
            -eaten_total,
            "livestock",
        ));
    }
    if waste_total > 0.0 {
        update.effects.push(Effect::new(
            Tier::Active,
            ResourceKind::Waste,
            waste_total,
            "livestock",
        ));
    }
    if volume > 0.0 && o2_total_mg > 0.0 {
        update.effects.extend([
            Effect::new(
                Tier::Active,
                ResourceKind::Oxygen,
                -o2_total_mg / volume,
                "livestock",
            ),
            Effect::new(
                Tier::Active,
                ResourceKind::CarbonDioxide,
                co2_total_mg / volume,
                "livestock",
            ),
        ]);
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquarist_logic::species::{FishSpecies, Sex};
    use crate::engine::{create_simulation, SimulationConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stocked_state() -> SimulationState {
        let mut state = create_simulation(&SimulationConfig::default());
        let id = state.alloc_id();
        state.fish.push(Fish {
            id,
            species: FishSpecies::Guppy,
            mass_g: 1.2,
            health: 100.0,
            age_h: 1000,
            hunger: 40.0,
            sex: Sex::Female,
        });
        state.resources.food_g = 5.0;
        state
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn delta(effects: &[Effect], kind: ResourceKind) -> f64 {
        effects
            .iter()
            .filter(|e| e.resource == kind)
            .map(|e| e.delta)
            .sum()
    }

    #[test]
    fn test_empty_tank_is_inert() {
        let cfg = EngineConfig::default();
        let state = create_simulation(&SimulationConfig::default());
        let update = step(&state, &cfg, &mut rng());
        assert!(update.effects.is_empty());
        assert!(update.fish.is_empty());
    }

    #[test]
    fn test_feeding_relieves_hunger_and_makes_waste() {
        let cfg = EngineConfig::default();
        let state = stocked_state();
        let update = step(&state, &cfg, &mut rng());
        assert!(update.fish[0].hunger < 40.0, "fed fish gets less hungry");
        assert!(delta(&update.effects, ResourceKind::Food) < 0.0);
        assert!(delta(&update.effects, ResourceKind::Waste) > 0.0);
    }

    #[test]
    fn test_no_food_hunger_climbs() {
        let cfg = EngineConfig::default();
        let mut state = stocked_state();
        state.resources.food_g = 0.0;
        let update = step(&state, &cfg, &mut rng());
        assert!(
            (update.fish[0].hunger - (40.0 + cfg.livestock.hunger_per_hour)).abs() < 1e-9
        );
        assert_eq!(delta(&update.effects, ResourceKind::Food), 0.0);
    }

    #[test]
    fn test_hungriest_fish_eats_first() {
        let cfg = EngineConfig::default();
        let mut state = stocked_state();
        state.fish[0].hunger = 100.0;
        let id = state.alloc_id();
        state.fish.push(Fish {
            id,
            species: FishSpecies::Guppy,
            mass_g: 1.2,
            health: 100.0,
            age_h: 1000,
            hunger: 10.0,
            sex: Sex::Male,
        });
        // Only enough food for the starving fish's hour.
        state.resources.food_g = 100.0 / 100.0 * 1.2 * cfg.livestock.appetite_g_per_g_mass;
        let update = step(&state, &cfg, &mut rng());
        let starving = update.fish.iter().find(|f| f.id == state.fish[0].id).unwrap();
        let sated = update.fish.iter().find(|f| f.id == id).unwrap();
        assert!(
            starving.hunger < 100.0 - cfg.livestock.hunger_relief + cfg.livestock.hunger_per_hour + 1e-9,
            "the starving fish got the full ration"
        );
        assert!(
            (sated.hunger - (10.0 + cfg.livestock.hunger_per_hour)).abs() < 1e-9,
            "nothing left for the sated fish"
        );
    }

    #[test]
    fn test_respiration_scales_with_mass() {
        let cfg = EngineConfig::default();
        let state = stocked_state();
        let update = step(&state, &cfg, &mut rng());
        let expected = 1.2 * cfg.livestock.o2_mg_per_g_hour / state.tank.water_l;
        assert!((-delta(&update.effects, ResourceKind::Oxygen) - expected).abs() < 1e-12);
        assert!(delta(&update.effects, ResourceKind::CarbonDioxide) > 0.0);
    }

    #[test]
    fn test_clean_water_health_recovers() {
        let cfg = EngineConfig::default();
        let mut state = stocked_state();
        state.fish[0].health = 50.0;
        let update = step(&state, &cfg, &mut rng());
        assert!(update.fish[0].health > 50.0);
    }

    #[test]
    fn test_toxic_water_kills_and_releases_waste() {
        let cfg = EngineConfig::default();
        let mut state = stocked_state();
        state.fish[0].health = 0.5;
        state.resources.ammonia_mg = 5000.0; // 50 ppm, lethal
        let update = step(&state, &cfg, &mut rng());
        assert!(update.fish.is_empty());
        assert_eq!(update.deaths.len(), 1, "exactly one notice per death");
        assert!(update.deaths[0].contains("Guppy"));
        let expected_waste = 1.2 * cfg.livestock.death_decay_factor;
        assert!(delta(&update.effects, ResourceKind::Waste) >= expected_waste);
    }

    #[test]
    fn test_ages_accumulate() {
        let cfg = EngineConfig::default();
        let state = stocked_state();
        let update = step(&state, &cfg, &mut rng());
        assert_eq!(update.fish[0].age_h, 1001);
    }

    #[test]
    fn test_old_age_eventually_claims() {
        let cfg = EngineConfig::default();
        let mut state = stocked_state();
        state.fish[0].age_h = FishSpecies::Guppy.spec().max_age_h + 1;
        let mut rng = rng();
        let mut died = false;
        // 0.5% per hour over 5000 hours: failure odds are negligible.
        for _ in 0..5000 {
            let update = step(&state, &cfg, &mut rng);
            if update.fish.is_empty() {
                died = true;
                assert!(update.deaths[0].contains("old age"));
                break;
            }
            state.fish = update.fish;
        }
        assert!(died, "an ancient fish should die within 5000 rolls");
    }

    #[test]
    fn test_young_fish_never_roll_old_age() {
        let cfg = EngineConfig::default();
        let mut state = stocked_state();
        state.fish[0].age_h = 10;
        let mut rng = rng();
        for _ in 0..2000 {
            let update = step(&state, &cfg, &mut rng);
            assert_eq!(update.fish.len(), 1);
            state.fish = update.fish;
            state.resources.food_g = 5.0; // keep hunger stress away
        }
    }
}
