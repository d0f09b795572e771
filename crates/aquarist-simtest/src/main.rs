//! Aquarist Headless Simulation Harness
//!
//! Validates pure logic and multi-hundred-hour engine scenarios without a
//! UI. Runs entirely in-process — no rendering, no persistence.
//!
//! Usage:
//!   cargo run -p aquarist-simtest
//!   cargo run -p aquarist-simtest -- --verbose

use aquarist_core::actions::{apply_action_with, Action};
use aquarist_core::engine::{create_simulation, tick_with, SimulationConfig};
use aquarist_core::resources::ResourceKind;
use aquarist_core::state::{Severity, SimulationState};
use aquarist_logic::config::EngineConfig;
use aquarist_logic::math;
use aquarist_logic::schedule::Schedule;
use aquarist_logic::species::{FishSpecies, PlantSpecies, Sex};
use aquarist_logic::stress::{self, WaterConditions};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Aquarist Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Resource registry sweep
    results.extend(validate_registry());

    // 2. Pure logic sweep
    results.extend(validate_logic());

    // 3. Temperature convergence scenario
    results.extend(validate_temperature_convergence());

    // 4. Fishless nitrogen cycle scenario
    results.extend(validate_fishless_cycle());

    // 5. Alert hysteresis contract
    results.extend(validate_alert_hysteresis());

    // 6. Action contract anchors
    results.extend(validate_actions());

    // 7. Stocked-tank six-week scenario
    results.extend(validate_stocked_tank());

    // 8. Snapshot JSON round-trip
    results.extend(validate_snapshot_roundtrip());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xAC1D)
}

fn run_hours(mut state: SimulationState, cfg: &EngineConfig, hours: u64) -> SimulationState {
    let mut rng = rng();
    for _ in 0..hours {
        state = tick_with(&state, cfg, &mut rng);
    }
    state
}

// ── 1. Resource registry ────────────────────────────────────────────────

fn validate_registry() -> Vec<TestResult> {
    println!("--- Resource Registry ---");
    let mut results = Vec::new();

    let bad_bounds: Vec<_> = ResourceKind::all()
        .iter()
        .filter(|k| {
            let s = k.spec();
            s.min >= s.max || s.default < s.min || s.default > s.max
        })
        .collect();
    results.push(TestResult::new(
        "registry_bounds",
        bad_bounds.is_empty(),
        format!("{} kinds registered", ResourceKind::all().len()),
    ));

    let ppm = ResourceKind::Ammonia.display_value(100.0, 80.0);
    results.push(TestResult::new(
        "registry_ppm_derivation",
        (ppm - 1.25).abs() < 1e-12,
        format!("100 mg in 80 L reads {ppm} ppm"),
    ));

    let zero_vol = ResourceKind::Nitrate.display_value(500.0, 0.0);
    results.push(TestResult::new(
        "registry_zero_volume_guard",
        zero_vol == 0.0,
        "ppm of a dry tank reads 0",
    ));

    results
}

// ── 2. Pure logic sweep ─────────────────────────────────────────────────

fn validate_logic() -> Vec<TestResult> {
    println!("--- Logic Sweep ---");
    let mut results = Vec::new();

    let doubled = math::q10_factor(35.0, 25.0, 2.0);
    results.push(TestResult::new(
        "q10_doubles_per_interval",
        (doubled - 2.0).abs() < 1e-9,
        format!("+10C gives factor {doubled}"),
    ));

    let limited = math::liebig(&[0.9, 0.2, 1.0]);
    results.push(TestResult::new(
        "liebig_minimum",
        (limited - 0.2).abs() < 1e-12,
        "scarcest nutrient limits",
    ));

    let night = Schedule::new(22, 6);
    let wraps = night.is_active(23) && night.is_active(2) && !night.is_active(5);
    results.push(TestResult::new(
        "schedule_wraps_midnight",
        wraps,
        "22:00 for 6h covers 23:00 and 02:00, not 05:00",
    ));

    // Stress scaling: the same bad water hurts a tender species more.
    let mut water = WaterConditions {
        temp_c: 25.0,
        ph: 7.0,
        ammonia_ppm: 1.0,
        nitrite_ppm: 0.0,
        nitrate_ppm: 10.0,
        oxygen_mg_l: 8.0,
        water_fraction: 1.0,
        turnover_per_hour: 4.0,
    };
    let cfg = EngineConfig::default();
    let tetra = stress::total_stress(&water, 20.0, &FishSpecies::NeonTetra.spec(), &cfg.livestock);
    let guppy = stress::total_stress(&water, 20.0, &FishSpecies::Guppy.spec(), &cfg.livestock);
    results.push(TestResult::new(
        "stress_hardiness_scaling",
        tetra > guppy && guppy > 0.0,
        format!("tetra {tetra:.2} vs guppy {guppy:.2}"),
    ));

    water.ammonia_ppm = 50.0;
    let all_lethal = FishSpecies::all().iter().all(|s| {
        let stress = stress::total_stress(&water, 20.0, &s.spec(), &cfg.livestock);
        stress::health_delta(stress, &cfg.livestock) < 0.0
    });
    results.push(TestResult::new(
        "stress_lethal_ammonia",
        all_lethal,
        "50 ppm ammonia overwhelms every species",
    ));

    results
}

// ── 3. Temperature convergence ──────────────────────────────────────────

fn validate_temperature_convergence() -> Vec<TestResult> {
    println!("--- Temperature Convergence ---");
    let cfg = EngineConfig::default();
    let mut state = create_simulation(&SimulationConfig::default());
    state.resources.temperature_c = 28.0;
    state.environment.room_temp_c = 22.0;
    state.equipment.heater.enabled = false;

    let state = run_hours(state, &cfg, 200);
    let t = state.resources.temperature_c;
    vec![TestResult::new(
        "unheated_tank_converges",
        (t - 22.0).abs() <= 1.0,
        format!("28C tank in a 22C room reads {t:.2}C after 200h"),
    )]
}

// ── 4. Fishless nitrogen cycle ──────────────────────────────────────────

fn validate_fishless_cycle() -> Vec<TestResult> {
    println!("--- Fishless Cycle ---");
    let mut results = Vec::new();
    let cfg = EngineConfig::default();
    let mut state = create_simulation(&SimulationConfig::default());
    state.equipment.ato.enabled = true; // hold the level over six weeks

    let mut rng = rng();
    let mut peak_nitrite_ppm: f64 = 0.0;
    for hour in 0..(6 * 7 * 24) {
        // Re-dose 2 ppm of ammonia every three days, as a keeper cycling a
        // fishless tank would.
        if hour % 72 == 0 {
            state.resources.ammonia_mg += 200.0;
        }
        state = tick_with(&state, &cfg, &mut rng);
        peak_nitrite_ppm = peak_nitrite_ppm.max(state.ppm(ResourceKind::Nitrite));
    }

    results.push(TestResult::new(
        "cycle_nitrite_spike",
        peak_nitrite_ppm > 0.5,
        format!("nitrite peaked at {peak_nitrite_ppm:.2} ppm"),
    ));
    results.push(TestResult::new(
        "cycle_ammonia_consumed",
        state.ppm(ResourceKind::Ammonia) < 0.5,
        format!("ammonia down to {:.3} ppm", state.ppm(ResourceKind::Ammonia)),
    ));
    results.push(TestResult::new(
        "cycle_nitrate_accumulated",
        state.resources.nitrate_mg > 100.0,
        format!("{:.0} mg nitrate banked", state.resources.nitrate_mg),
    ));
    results.push(TestResult::new(
        "cycle_colonies_established",
        state.resources.aob_colony > 100.0 && state.resources.nob_colony > 100.0,
        format!(
            "AOB {:.0}, NOB {:.0} units",
            state.resources.aob_colony, state.resources.nob_colony
        ),
    ));

    results
}

// ── 5. Alert hysteresis ─────────────────────────────────────────────────

fn validate_alert_hysteresis() -> Vec<TestResult> {
    println!("--- Alert Hysteresis ---");
    let mut results = Vec::new();
    let cfg = EngineConfig::default();
    let mut rng = rng();

    let warnings = |s: &SimulationState| {
        s.logs
            .iter()
            .filter(|l| l.source == "alerts" && l.severity == Severity::Warning)
            .count()
    };

    let mut state = create_simulation(&SimulationConfig::default());
    state.resources.ammonia_mg = 100.0; // 1 ppm, over the 0.25 threshold

    // First crossing fires once; holding above fires nothing more. A few
    // ticks barely dent 100 mg with only the seed colonies working.
    state = tick_with(&state, &cfg, &mut rng);
    let after_first = warnings(&state);
    state = tick_with(&state, &cfg, &mut rng);
    state = tick_with(&state, &cfg, &mut rng);
    results.push(TestResult::new(
        "alert_fires_once",
        after_first == 1 && warnings(&state) == 1,
        format!("{} warning(s) after three hot ticks", warnings(&state)),
    ));

    // Water change clears it silently; re-crossing fires again.
    state.resources.ammonia_mg = 0.0;
    state = tick_with(&state, &cfg, &mut rng);
    let after_clear = warnings(&state);
    let latch_cleared = !state.alerts.high_ammonia;
    state.resources.ammonia_mg = 100.0;
    state = tick_with(&state, &cfg, &mut rng);
    results.push(TestResult::new(
        "alert_clears_and_refires",
        after_clear == 1 && latch_cleared && warnings(&state) == 2,
        format!("{} warnings after clear and re-cross", warnings(&state)),
    ));

    results
}

// ── 6. Action contract ──────────────────────────────────────────────────

fn validate_actions() -> Vec<TestResult> {
    println!("--- Action Contract ---");
    let mut results = Vec::new();
    let cfg = EngineConfig::default();
    let mut rng = rng();
    let state = create_simulation(&SimulationConfig::default());

    // Dosing 1 ml of the default formula.
    let dosed = apply_action_with(&state, &Action::Dose { amount_ml: 1.0 }, &cfg, &mut rng).state;
    let formula_ok = dosed.resources.nitrate_mg == 50.0
        && dosed.resources.phosphate_mg == 5.0
        && dosed.resources.potassium_mg == 40.0
        && dosed.resources.iron_mg == 1.0;
    results.push(TestResult::new(
        "action_dose_formula",
        formula_ok,
        "1 ml adds 50/5/40/1 mg N/P/K/Fe",
    ));

    // Top-off dilutes without moving mass.
    let mut low = state.clone();
    low.tank.water_l = 80.0;
    low.resources.ammonia_mg = 100.0;
    let topped = apply_action_with(&low, &Action::TopOff, &cfg, &mut rng).state;
    results.push(TestResult::new(
        "action_top_off_mass_invariant",
        topped.tank.water_l == 100.0 && topped.resources.ammonia_mg == 100.0,
        format!(
            "refilled to {} L, ammonia still {} mg ({:.3} ppm)",
            topped.tank.water_l,
            topped.resources.ammonia_mg,
            topped.ppm(ResourceKind::Ammonia)
        ),
    ));

    // Deterministic scrub override.
    let mut mossy = state.clone();
    mossy.resources.algae = 100.0;
    let scrubbed = apply_action_with(
        &mossy,
        &Action::ScrubAlgae { percent: Some(0.2) },
        &cfg,
        &mut rng,
    )
    .state;
    results.push(TestResult::new(
        "action_scrub_fixed_fraction",
        (scrubbed.resources.algae - 80.0).abs() < 1e-9,
        format!("algae 100 scrubbed at 20% leaves {}", scrubbed.resources.algae),
    ));

    // Rejection leaves the snapshot byte-identical.
    let rejected = apply_action_with(&state, &Action::Feed { grams: -1.0 }, &cfg, &mut rng);
    let untouched = serde_json::to_string(&rejected.state).unwrap_or_default()
        == serde_json::to_string(&state).unwrap_or_default();
    results.push(TestResult::new(
        "action_rejection_is_pure",
        !rejected.accepted && rejected.message.is_some() && untouched,
        "negative feed rejected with message, state untouched",
    ));

    results
}

// ── 7. Stocked tank scenario ────────────────────────────────────────────

fn validate_stocked_tank() -> Vec<TestResult> {
    println!("--- Stocked Tank (6 weeks) ---");
    let mut results = Vec::new();
    let cfg = EngineConfig::default();
    let mut rng = rng();

    let mut state = create_simulation(&SimulationConfig::default());
    state.equipment.ato.enabled = true; // evaporation would win over six weeks
    state = apply_action_with(
        &state,
        &Action::AddPlant {
            species: PlantSpecies::Vallisneria,
        },
        &cfg,
        &mut rng,
    )
    .state;
    state = apply_action_with(
        &state,
        &Action::AddFish {
            species: FishSpecies::Guppy,
            sex: Sex::Female,
        },
        &cfg,
        &mut rng,
    )
    .state;
    let planted_size = state.plants[0].size_pct;

    for hour in 0..(6u64 * 7 * 24) {
        if hour % 24 == 0 {
            state = apply_action_with(&state, &Action::Feed { grams: 0.05 }, &cfg, &mut rng).state;
            state = apply_action_with(&state, &Action::Dose { amount_ml: 0.5 }, &cfg, &mut rng).state;
        }
        if hour % (24 * 7) == 0 {
            state =
                apply_action_with(&state, &Action::WaterChange { fraction: 0.25 }, &cfg, &mut rng)
                    .state;
        }
        state = tick_with(&state, &cfg, &mut rng);
    }

    results.push(TestResult::new(
        "stocked_fish_survives",
        state.fish.len() == 1 && state.fish[0].health > 50.0,
        format!(
            "{} fish alive, health {:.0}",
            state.fish.len(),
            state.fish.first().map(|f| f.health).unwrap_or(0.0)
        ),
    ));
    results.push(TestResult::new(
        "stocked_plant_grows",
        state.plants.len() == 1 && state.plants[0].size_pct > planted_size,
        format!(
            "plant at {:.0}% of mature size",
            state.plants.first().map(|p| p.size_pct).unwrap_or(0.0)
        ),
    ));
    results.push(TestResult::new(
        "stocked_ammonia_controlled",
        state.ppm(ResourceKind::Ammonia) < 0.25,
        format!("ammonia at {:.3} ppm", state.ppm(ResourceKind::Ammonia)),
    ));
    results.push(TestResult::new(
        "stocked_water_level_held",
        state.water_fraction() > 0.7,
        format!("water at {:.0}% of capacity", state.water_fraction() * 100.0),
    ));

    results
}

// ── 8. Snapshot round-trip ──────────────────────────────────────────────

fn validate_snapshot_roundtrip() -> Vec<TestResult> {
    println!("--- Snapshot Round-Trip ---");
    let cfg = EngineConfig::default();
    let mut rng = rng();

    let mut state = create_simulation(&SimulationConfig::default());
    state = apply_action_with(
        &state,
        &Action::AddFish {
            species: FishSpecies::Betta,
            sex: Sex::Male,
        },
        &cfg,
        &mut rng,
    )
    .state;
    state = run_hours(state, &cfg, 48);

    let passed = match serde_json::to_string(&state) {
        Ok(json) => match serde_json::from_str::<SimulationState>(&json) {
            Ok(back) => serde_json::to_string(&back).map(|j| j == json).unwrap_or(false),
            Err(_) => false,
        },
        Err(_) => false,
    };
    vec![TestResult::new(
        "snapshot_json_roundtrip",
        passed,
        "48h-old stocked snapshot survives JSON round-trip",
    )]
}
