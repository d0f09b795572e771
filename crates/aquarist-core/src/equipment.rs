//! Equipment records and the immediate-tier control loop.
//!
//! Control decisions (thermostat, ATO float switch, schedules) must see
//! the previous tick's resource values, so they run first in the tick.
//! Each device writes an on/off flag into the equipment state and emits
//! its effects from the immediate tier.

use aquarist_logic::config::{EngineConfig, SurfaceConfig};
use aquarist_logic::math;
use aquarist_logic::schedule::{hour_of_day, Schedule};
use serde::{Deserialize, Serialize};

use crate::effect::{Effect, Tier};
use crate::resources::ResourceKind;
use crate::state::SimulationState;

/// Lid coverage; tighter lids slow evaporation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LidType {
    Open,
    Mesh,
    Full,
    Sealed,
}

impl LidType {
    /// Evaporation multiplier: open > mesh > full > sealed.
    pub fn evaporation_factor(&self) -> f64 {
        match self {
            Self::Open => 1.0,
            Self::Mesh => 0.7,
            Self::Full => 0.3,
            Self::Sealed => 0.05,
        }
    }
}

/// Substrate bed; contributes colonization surface for nitrifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstrateType {
    Bare,
    Sand,
    Gravel,
    Soil,
}

impl SubstrateType {
    pub fn surface_cm2(&self, cfg: &SurfaceConfig) -> f64 {
        match self {
            Self::Bare => 0.0,
            Self::Sand => cfg.sand_cm2,
            Self::Gravel => cfg.gravel_cm2,
            Self::Soil => cfg.soil_cm2,
        }
    }
}

/// A decorative hardscape item. Calcite pulls pH up; driftwood pulls it
/// down; both add colonization surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardscapeItem {
    CalciteRock,
    Driftwood,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heater {
    pub enabled: bool,
    pub target_c: f64,
    /// Thermostat output, written each tick.
    pub on: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    pub enabled: bool,
    pub flow_l_per_hour: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerhead {
    pub enabled: bool,
    pub flow_l_per_hour: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoTopOff {
    pub enabled: bool,
    /// Float switch trips when the level falls below this fraction of
    /// capacity.
    pub threshold_fraction: f64,
    /// Liters of tap water added per hour while tripped.
    pub rate_l_per_hour: f64,
    pub on: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    pub enabled: bool,
    pub schedule: Schedule,
    /// 0.0-1.0 scaling on photosynthesis and algae growth.
    pub intensity: f64,
    pub on: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Co2Injector {
    pub enabled: bool,
    pub schedule: Schedule,
    /// mg/L of CO2 added per hour while the schedule is open.
    pub rate_mg_l_per_hour: f64,
    pub on: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirPump {
    pub enabled: bool,
    pub on: bool,
}

/// One record per device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub heater: Heater,
    pub filter: Filter,
    pub powerhead: Powerhead,
    pub lid: LidType,
    pub ato: AutoTopOff,
    pub light: Light,
    pub co2: Co2Injector,
    pub air_pump: AirPump,
    pub substrate: SubstrateType,
    pub hardscape: Vec<HardscapeItem>,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            heater: Heater {
                enabled: true,
                target_c: 25.0,
                on: false,
            },
            filter: Filter {
                enabled: true,
                flow_l_per_hour: 400.0,
            },
            powerhead: Powerhead {
                enabled: false,
                flow_l_per_hour: 600.0,
            },
            lid: LidType::Mesh,
            ato: AutoTopOff {
                enabled: false,
                threshold_fraction: 0.95,
                rate_l_per_hour: 2.0,
                on: false,
            },
            light: Light {
                enabled: true,
                schedule: Schedule::default(),
                intensity: 1.0,
                on: false,
            },
            co2: Co2Injector {
                enabled: false,
                schedule: Schedule::default(),
                rate_mg_l_per_hour: 3.0,
                on: false,
            },
            air_pump: AirPump {
                enabled: false,
                on: false,
            },
            substrate: SubstrateType::Gravel,
            hardscape: Vec::new(),
        }
    }
}

impl Equipment {
    /// Combined circulation from all running pumps, liters per hour.
    pub fn total_flow_l_per_hour(&self) -> f64 {
        let mut flow = 0.0;
        if self.filter.enabled {
            flow += self.filter.flow_l_per_hour;
        }
        if self.powerhead.enabled {
            flow += self.powerhead.flow_l_per_hour;
        }
        flow
    }

    pub fn count_hardscape(&self, item: HardscapeItem) -> u32 {
        self.hardscape.iter().filter(|h| **h == item).count() as u32
    }
}

/// Water turnover in tank volumes per hour at the current water level.
pub fn turnover_per_hour(state: &SimulationState) -> f64 {
    math::safe_ratio(state.equipment.total_flow_l_per_hour(), state.tank.water_l)
}

/// Whether the light is shining during the hour being simulated.
/// Evaluated from the schedule directly so the active-tier biology does
/// not depend on last hour's flag.
pub fn light_on(state: &SimulationState) -> bool {
    state.equipment.light.enabled
        && state.equipment.light.schedule.is_active(hour_of_day(state.tick))
}

/// Total nitrifier colonization surface: glass + filter media + substrate
/// + hardscape, in cm2.
pub fn colonization_surface_cm2(state: &SimulationState, cfg: &SurfaceConfig) -> f64 {
    let mut surface = state.tank.capacity_l * cfg.glass_cm2_per_l;
    if state.equipment.filter.enabled {
        surface += cfg.filter_media_cm2;
    }
    surface += state.equipment.substrate.surface_cm2(cfg);
    surface += state.equipment.hardscape.len() as f64 * cfg.hardscape_cm2_per_item;
    surface
}

/// Immediate-tier control loop. Reads the previous tick's state, returns
/// the equipment record with fresh on/off flags plus the control effects.
pub fn control(state: &SimulationState, cfg: &EngineConfig) -> (Equipment, Vec<Effect>) {
    let mut equipment = state.equipment.clone();
    let mut effects = Vec::new();
    let hour = hour_of_day(state.tick);

    // Heater thermostat: on below target, off at or above. No hysteresis
    // band; the one-hour step is coarse enough already.
    equipment.heater.on =
        equipment.heater.enabled && state.resources.temperature_c < equipment.heater.target_c;
    if equipment.heater.on {
        let tc = &cfg.temperature;
        let thermal_mass = math::safe_ratio(tc.reference_volume_l, state.tank.capacity_l)
            .powf(tc.volume_exponent);
        effects.push(Effect::new(
            Tier::Immediate,
            ResourceKind::Temperature,
            tc.heater_rate_c_per_hour * thermal_mass,
            "heater",
        ));
    }

    // ATO float switch. The refill carries tap water, so temperature and
    // pH blend toward the tap values in proportion to the volume added.
    let threshold_l = equipment.ato.threshold_fraction * state.tank.capacity_l;
    equipment.ato.on = equipment.ato.enabled && state.tank.water_l < threshold_l;
    if equipment.ato.on {
        let deficit = (state.tank.capacity_l - state.tank.water_l).max(0.0);
        let added_l = equipment.ato.rate_l_per_hour.min(deficit);
        effects.push(Effect::new(
            Tier::Immediate,
            ResourceKind::WaterLevel,
            added_l,
            "auto-top-off",
        ));
        let blended_temp = math::blend(
            state.tank.water_l,
            state.resources.temperature_c,
            added_l,
            state.environment.tap_temp_c,
        );
        effects.push(Effect::new(
            Tier::Immediate,
            ResourceKind::Temperature,
            blended_temp - state.resources.temperature_c,
            "auto-top-off",
        ));
        let blended_ph = math::blend(
            state.tank.water_l,
            state.resources.ph,
            added_l,
            state.environment.tap_ph,
        );
        effects.push(Effect::new(
            Tier::Immediate,
            ResourceKind::Ph,
            blended_ph - state.resources.ph,
            "auto-top-off",
        ));
    }

    // CO2 injector schedule.
    equipment.co2.on = equipment.co2.enabled && equipment.co2.schedule.is_active(hour);
    if equipment.co2.on {
        effects.push(Effect::new(
            Tier::Immediate,
            ResourceKind::CarbonDioxide,
            equipment.co2.rate_mg_l_per_hour,
            "co2-injector",
        ));
    }

    // Lights and air pump carry flags only; their influence flows through
    // the photosynthesis, algae, and gas-exchange systems.
    equipment.light.on = equipment.light.enabled && equipment.light.schedule.is_active(hour);
    equipment.air_pump.on = equipment.air_pump.enabled;

    (equipment, effects)
}
