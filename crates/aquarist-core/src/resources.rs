//! Resource registry - static metadata for every tracked quantity.
//!
//! Two representations coexist by design. Concentration-like quantities
//! (temperature, dissolved gases, pH, algae, food, waste) are stored
//! directly in display units. Conserved-mass quantities (the nitrogen
//! compounds and fertilizer nutrients) are stored as absolute mass in mg;
//! their displayed ppm is derived as `mass / water volume`. This split is
//! load-bearing: evaporation concentrates mass-based resources for free
//! because volume shrinks while mass is untouched, and dilution is purely
//! a volume/mass operation, never a direct ppm edit.
//!
//! The registry is the single source of truth for clamping bounds; no
//! system is allowed to hard-code them.

use aquarist_logic::math;
use serde::{Deserialize, Serialize};

/// Every quantity the engine tracks, including the water level itself
/// (which clamps to the tank capacity rather than a fixed constant) and
/// the two nitrifier colonies (kept in the resource set so the nitrogen
/// cycle writes state only through clamped effects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Temperature,
    Oxygen,
    CarbonDioxide,
    Ph,
    Algae,
    Food,
    Waste,
    Ammonia,
    Nitrite,
    Nitrate,
    Phosphate,
    Potassium,
    Iron,
    AobColony,
    NobColony,
    WaterLevel,
}

/// Static metadata for one resource kind.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    pub name: &'static str,
    /// Display unit (for mass-based kinds, the unit of the derived ppm).
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Decimal places for display.
    pub precision: usize,
    /// Safe display-unit range, used only for alerting/UI, never clamping.
    pub safe: Option<(f64, f64)>,
    /// Whether the stored value is absolute mass (mg) with derived ppm.
    pub mass_based: bool,
}

impl ResourceKind {
    pub fn spec(&self) -> ResourceSpec {
        match self {
            Self::Temperature => ResourceSpec {
                name: "Temperature",
                unit: "\u{b0}C",
                min: 0.0,
                max: 40.0,
                default: 25.0,
                precision: 1,
                safe: Some((20.0, 30.0)),
                mass_based: false,
            },
            Self::Oxygen => ResourceSpec {
                name: "Dissolved O2",
                unit: "mg/L",
                min: 0.0,
                max: 15.0,
                default: 8.0,
                precision: 2,
                safe: Some((4.0, 15.0)),
                mass_based: false,
            },
            Self::CarbonDioxide => ResourceSpec {
                name: "Dissolved CO2",
                unit: "mg/L",
                min: 0.0,
                max: 100.0,
                default: 3.0,
                precision: 2,
                safe: Some((0.0, 30.0)),
                mass_based: false,
            },
            Self::Ph => ResourceSpec {
                name: "pH",
                unit: "",
                min: 4.0,
                max: 10.0,
                default: 7.0,
                precision: 2,
                safe: Some((6.0, 8.5)),
                mass_based: false,
            },
            Self::Algae => ResourceSpec {
                name: "Algae",
                unit: "%",
                min: 0.0,
                max: 100.0,
                default: 0.0,
                precision: 0,
                safe: Some((0.0, 60.0)),
                mass_based: false,
            },
            Self::Food => ResourceSpec {
                name: "Uneaten Food",
                unit: "g",
                min: 0.0,
                max: 1000.0,
                default: 0.0,
                precision: 2,
                safe: None,
                mass_based: false,
            },
            Self::Waste => ResourceSpec {
                name: "Solid Waste",
                unit: "g",
                min: 0.0,
                max: 1000.0,
                default: 0.0,
                precision: 2,
                safe: None,
                mass_based: false,
            },
            Self::Ammonia => ResourceSpec {
                name: "Ammonia",
                unit: "ppm",
                min: 0.0,
                max: 1.0e6,
                default: 0.0,
                precision: 3,
                safe: Some((0.0, 0.25)),
                mass_based: true,
            },
            Self::Nitrite => ResourceSpec {
                name: "Nitrite",
                unit: "ppm",
                min: 0.0,
                max: 1.0e6,
                default: 0.0,
                precision: 3,
                safe: Some((0.0, 0.5)),
                mass_based: true,
            },
            Self::Nitrate => ResourceSpec {
                name: "Nitrate",
                unit: "ppm",
                min: 0.0,
                max: 1.0e6,
                default: 0.0,
                precision: 2,
                safe: Some((0.0, 40.0)),
                mass_based: true,
            },
            Self::Phosphate => ResourceSpec {
                name: "Phosphate",
                unit: "ppm",
                min: 0.0,
                max: 1.0e6,
                default: 0.0,
                precision: 2,
                safe: Some((0.0, 3.0)),
                mass_based: true,
            },
            Self::Potassium => ResourceSpec {
                name: "Potassium",
                unit: "ppm",
                min: 0.0,
                max: 1.0e6,
                default: 0.0,
                precision: 2,
                safe: None,
                mass_based: true,
            },
            Self::Iron => ResourceSpec {
                name: "Iron",
                unit: "ppm",
                min: 0.0,
                max: 1.0e6,
                default: 0.0,
                precision: 3,
                safe: Some((0.0, 0.5)),
                mass_based: true,
            },
            Self::AobColony => ResourceSpec {
                name: "AOB Colony",
                unit: "units",
                min: 0.0,
                max: 1.0e9,
                default: 10.0,
                precision: 0,
                safe: None,
                mass_based: false,
            },
            Self::NobColony => ResourceSpec {
                name: "NOB Colony",
                unit: "units",
                min: 0.0,
                max: 1.0e9,
                default: 10.0,
                precision: 0,
                safe: None,
                mass_based: false,
            },
            Self::WaterLevel => ResourceSpec {
                name: "Water Level",
                unit: "L",
                min: 0.0,
                // Placeholder; the effect system clamps the water level to
                // the tank capacity, never to this constant.
                max: f64::MAX,
                default: 0.0,
                precision: 1,
                safe: None,
                mass_based: false,
            },
        }
    }

    pub fn all() -> &'static [ResourceKind] {
        &[
            Self::Temperature,
            Self::Oxygen,
            Self::CarbonDioxide,
            Self::Ph,
            Self::Algae,
            Self::Food,
            Self::Waste,
            Self::Ammonia,
            Self::Nitrite,
            Self::Nitrate,
            Self::Phosphate,
            Self::Potassium,
            Self::Iron,
            Self::AobColony,
            Self::NobColony,
            Self::WaterLevel,
        ]
    }

    /// Display value in the unit of `spec().unit`: the stored value for
    /// concentration-like kinds, the derived ppm for mass-based kinds.
    pub fn display_value(&self, stored: f64, water_l: f64) -> f64 {
        if self.spec().mass_based {
            math::ppm(stored, water_l)
        } else {
            stored
        }
    }

    /// Human-readable formatted value, e.g. `"1.25 ppm"`.
    pub fn format(&self, stored: f64, water_l: f64) -> String {
        let spec = self.spec();
        let value = self.display_value(stored, water_l);
        if spec.unit.is_empty() {
            format!("{value:.prec$}", prec = spec.precision)
        } else {
            format!("{value:.prec$} {}", spec.unit, prec = spec.precision)
        }
    }
}

/// The full resource set of one snapshot. One field per kind (minus the
/// water level, which lives on the tank); mass-based fields hold mg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resources {
    pub temperature_c: f64,
    pub oxygen_mg_l: f64,
    pub co2_mg_l: f64,
    pub ph: f64,
    pub algae: f64,
    pub food_g: f64,
    pub waste_g: f64,
    pub ammonia_mg: f64,
    pub nitrite_mg: f64,
    pub nitrate_mg: f64,
    pub phosphate_mg: f64,
    pub potassium_mg: f64,
    pub iron_mg: f64,
    pub aob_colony: f64,
    pub nob_colony: f64,
}

impl Default for Resources {
    fn default() -> Self {
        let d = |kind: ResourceKind| kind.spec().default;
        Self {
            temperature_c: d(ResourceKind::Temperature),
            oxygen_mg_l: d(ResourceKind::Oxygen),
            co2_mg_l: d(ResourceKind::CarbonDioxide),
            ph: d(ResourceKind::Ph),
            algae: d(ResourceKind::Algae),
            food_g: d(ResourceKind::Food),
            waste_g: d(ResourceKind::Waste),
            ammonia_mg: d(ResourceKind::Ammonia),
            nitrite_mg: d(ResourceKind::Nitrite),
            nitrate_mg: d(ResourceKind::Nitrate),
            phosphate_mg: d(ResourceKind::Phosphate),
            potassium_mg: d(ResourceKind::Potassium),
            iron_mg: d(ResourceKind::Iron),
            aob_colony: d(ResourceKind::AobColony),
            nob_colony: d(ResourceKind::NobColony),
        }
    }
}

impl Resources {
    /// Stored value for a kind. The water level is not held here; callers
    /// go through `SimulationState::resource` for it.
    ///
    /// # Panics
    ///
    /// Panics on `ResourceKind::WaterLevel`; that is a caller bug, not a
    /// runtime condition.
    pub fn get(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Temperature => self.temperature_c,
            ResourceKind::Oxygen => self.oxygen_mg_l,
            ResourceKind::CarbonDioxide => self.co2_mg_l,
            ResourceKind::Ph => self.ph,
            ResourceKind::Algae => self.algae,
            ResourceKind::Food => self.food_g,
            ResourceKind::Waste => self.waste_g,
            ResourceKind::Ammonia => self.ammonia_mg,
            ResourceKind::Nitrite => self.nitrite_mg,
            ResourceKind::Nitrate => self.nitrate_mg,
            ResourceKind::Phosphate => self.phosphate_mg,
            ResourceKind::Potassium => self.potassium_mg,
            ResourceKind::Iron => self.iron_mg,
            ResourceKind::AobColony => self.aob_colony,
            ResourceKind::NobColony => self.nob_colony,
            ResourceKind::WaterLevel => {
                unreachable!("water level lives on the tank, not in Resources")
            }
        }
    }

    /// Set the stored value for a kind. Same water-level caveat as `get`.
    pub fn set(&mut self, kind: ResourceKind, value: f64) {
        match kind {
            ResourceKind::Temperature => self.temperature_c = value,
            ResourceKind::Oxygen => self.oxygen_mg_l = value,
            ResourceKind::CarbonDioxide => self.co2_mg_l = value,
            ResourceKind::Ph => self.ph = value,
            ResourceKind::Algae => self.algae = value,
            ResourceKind::Food => self.food_g = value,
            ResourceKind::Waste => self.waste_g = value,
            ResourceKind::Ammonia => self.ammonia_mg = value,
            ResourceKind::Nitrite => self.nitrite_mg = value,
            ResourceKind::Nitrate => self.nitrate_mg = value,
            ResourceKind::Phosphate => self.phosphate_mg = value,
            ResourceKind::Potassium => self.potassium_mg = value,
            ResourceKind::Iron => self.iron_mg = value,
            ResourceKind::AobColony => self.aob_colony = value,
            ResourceKind::NobColony => self.nob_colony = value,
            ResourceKind::WaterLevel => {
                unreachable!("water level lives on the tank, not in Resources")
            }
        }
    }

    /// The mass-based kinds, in one place so dilution code never misses one.
    pub fn mass_based() -> &'static [ResourceKind] {
        &[
            ResourceKind::Ammonia,
            ResourceKind::Nitrite,
            ResourceKind::Nitrate,
            ResourceKind::Phosphate,
            ResourceKind::Potassium,
            ResourceKind::Iron,
        ]
    }
}
