//! Species tables for plants and fish.
//!
//! Each species is a closed enum variant with a static spec, so adding a
//! species is a compile-time-enforced obligation at every dispatch site.
//! Values are hobbyist-realistic, not taxonomy-exact.

use serde::{Deserialize, Serialize};

/// Nutrient demand tier for a plant species. Scales the per-nutrient
/// optimum concentration the species needs to count as sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTier {
    Low,
    Medium,
    High,
}

impl DemandTier {
    /// Multiplier applied to the baseline optimal concentration.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 1.5,
        }
    }
}

/// Static spec for a plant species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantSpec {
    pub name: &'static str,
    /// Relative growth rate; determines this plant's share of the
    /// aggregate biomass pool.
    pub growth_rate: f64,
    /// Nutrient demand tier.
    pub demand: DemandTier,
    /// Wet mass of a mature (100% size) specimen, grams. Used to convert
    /// shed or capped size into waste.
    pub adult_mass_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlantSpecies {
    AmazonSword = 0,
    JavaFern = 1,
    Anubias = 2,
    Vallisneria = 3,
    DwarfHairgrass = 4,
}

impl PlantSpecies {
    pub fn spec(&self) -> PlantSpec {
        match self {
            Self::AmazonSword => PlantSpec {
                name: "Amazon Sword",
                growth_rate: 1.0,
                demand: DemandTier::High,
                adult_mass_g: 40.0,
            },
            Self::JavaFern => PlantSpec {
                name: "Java Fern",
                growth_rate: 0.4,
                demand: DemandTier::Low,
                adult_mass_g: 15.0,
            },
            Self::Anubias => PlantSpec {
                name: "Anubias",
                growth_rate: 0.3,
                demand: DemandTier::Low,
                adult_mass_g: 12.0,
            },
            Self::Vallisneria => PlantSpec {
                name: "Vallisneria",
                growth_rate: 1.4,
                demand: DemandTier::Medium,
                adult_mass_g: 25.0,
            },
            Self::DwarfHairgrass => PlantSpec {
                name: "Dwarf Hairgrass",
                growth_rate: 1.2,
                demand: DemandTier::High,
                adult_mass_g: 8.0,
            },
        }
    }

    pub fn all() -> &'static [PlantSpecies] {
        &[
            Self::AmazonSword,
            Self::JavaFern,
            Self::Anubias,
            Self::Vallisneria,
            Self::DwarfHairgrass,
        ]
    }
}

/// Static spec for a fish species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishSpec {
    pub name: &'static str,
    /// Adult body mass, grams.
    pub adult_mass_g: f64,
    /// Comfortable temperature range, Celsius.
    pub temp_range_c: (f64, f64),
    /// Comfortable pH range.
    pub ph_range: (f64, f64),
    /// Hardiness 0.0-1.0; stress contributions scale by `1 - hardiness`,
    /// so hardy species take proportionally less damage.
    pub hardiness: f64,
    /// Maximum age in simulated hours; past it, old-age death rolls begin.
    pub max_age_h: u64,
    /// Water turnover (tank volumes per hour) above which flow stresses
    /// this species.
    pub flow_tolerance_turnover: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum FishSpecies {
    NeonTetra = 0,
    Guppy = 1,
    CherryBarb = 2,
    Corydoras = 3,
    Betta = 4,
}

impl FishSpecies {
    pub fn spec(&self) -> FishSpec {
        match self {
            Self::NeonTetra => FishSpec {
                name: "Neon Tetra",
                adult_mass_g: 0.8,
                temp_range_c: (22.0, 27.0),
                ph_range: (6.0, 7.5),
                hardiness: 0.4,
                max_age_h: 5 * 8760,
                flow_tolerance_turnover: 8.0,
            },
            Self::Guppy => FishSpec {
                name: "Guppy",
                adult_mass_g: 1.2,
                temp_range_c: (22.0, 28.0),
                ph_range: (6.8, 8.0),
                hardiness: 0.7,
                max_age_h: 3 * 8760,
                flow_tolerance_turnover: 6.0,
            },
            Self::CherryBarb => FishSpec {
                name: "Cherry Barb",
                adult_mass_g: 2.5,
                temp_range_c: (23.0, 27.0),
                ph_range: (6.0, 7.5),
                hardiness: 0.6,
                max_age_h: 4 * 8760,
                flow_tolerance_turnover: 10.0,
            },
            Self::Corydoras => FishSpec {
                name: "Corydoras",
                adult_mass_g: 4.0,
                temp_range_c: (22.0, 26.0),
                ph_range: (6.5, 7.8),
                hardiness: 0.65,
                max_age_h: 8 * 8760,
                flow_tolerance_turnover: 9.0,
            },
            Self::Betta => FishSpec {
                name: "Betta",
                adult_mass_g: 3.0,
                temp_range_c: (24.0, 29.0),
                ph_range: (6.5, 7.5),
                hardiness: 0.5,
                max_age_h: 3 * 8760,
                flow_tolerance_turnover: 2.0,
            },
        }
    }

    pub fn all() -> &'static [FishSpecies] {
        &[
            Self::NeonTetra,
            Self::Guppy,
            Self::CherryBarb,
            Self::Corydoras,
            Self::Betta,
        ]
    }
}

/// Fish sex, recorded at creation and never changed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}
