//! The root simulation snapshot and its entity types.
//!
//! `SimulationState` is immutable from the outside: ticks and actions both
//! take a snapshot and return a new one. The shape of this type (including
//! every equipment sub-record and the full resource set) is the contract a
//! persistence layer must (de)serialize faithfully.

use aquarist_logic::species::{FishSpecies, PlantSpecies, Sex};
use serde::{Deserialize, Serialize};

use crate::alerts::AlertStates;
use crate::equipment::Equipment;
use crate::resources::{ResourceKind, Resources};

/// Tank geometry: fixed capacity and the current water column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub capacity_l: f64,
    /// Always within `[0, capacity_l]`.
    pub water_l: f64,
}

/// Ambient room conditions. External inputs; the tick never modifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub room_temp_c: f64,
    pub tap_temp_c: f64,
    pub tap_ph: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            room_temp_c: 22.0,
            tap_temp_c: 21.0,
            tap_ph: 7.2,
        }
    }
}

/// One planted specimen. Size 0 marks the plant for removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: u64,
    pub species: PlantSpecies,
    /// Percent of mature size; may exceed 100 up to the overgrowth cap.
    pub size_pct: f64,
    /// 0-100; drives shedding and death.
    pub condition: f64,
}

/// One fish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: u64,
    pub species: FishSpecies,
    pub mass_g: f64,
    /// 0-100; zero is death.
    pub health: f64,
    pub age_h: u64,
    /// 0-100; 0 is sated.
    pub hunger: f64,
    pub sex: Sex,
}

/// Severity of a log entry. The engine only distinguishes routine
/// information from warnings; validation rejections are messages, not logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
}

/// One entry in the append-only chronological event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub tick: u64,
    pub source: String,
    pub severity: Severity,
    pub message: String,
}

/// The single root snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// One unit = one simulated hour.
    pub tick: u64,
    pub tank: Tank,
    pub environment: Environment,
    pub resources: Resources,
    pub equipment: Equipment,
    pub plants: Vec<Plant>,
    pub fish: Vec<Fish>,
    pub alerts: AlertStates,
    pub logs: Vec<LogEntry>,
    /// Monotonic id source for plants and fish added by actions.
    pub next_entity_id: u64,
}

impl SimulationState {
    /// Stored value for any resource kind, including the water level.
    pub fn resource(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::WaterLevel => self.tank.water_l,
            other => self.resources.get(other),
        }
    }

    /// Displayed ppm of a mass-based resource at the current water level.
    pub fn ppm(&self, kind: ResourceKind) -> f64 {
        kind.display_value(self.resource(kind), self.tank.water_l)
    }

    /// Water level as a fraction of capacity (0 when capacity is 0).
    pub fn water_fraction(&self) -> f64 {
        aquarist_logic::math::safe_ratio(self.tank.water_l, self.tank.capacity_l)
    }

    /// Append a log entry stamped with the current tick.
    pub fn push_log(&mut self, source: &str, severity: Severity, message: impl Into<String>) {
        self.logs.push(LogEntry {
            tick: self.tick,
            source: source.to_string(),
            severity,
            message: message.into(),
        });
    }

    /// Allocate the next entity id.
    pub fn alloc_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_simulation, SimulationConfig};

    #[test]
    fn test_resource_accessor_covers_water_level() {
        let state = create_simulation(&SimulationConfig::default());
        assert_eq!(
            state.resource(ResourceKind::WaterLevel),
            state.tank.water_l
        );
        assert_eq!(
            state.resource(ResourceKind::Temperature),
            state.resources.temperature_c
        );
    }

    #[test]
    fn test_ppm_accessor() {
        let mut state = create_simulation(&SimulationConfig::default());
        state.resources.ammonia_mg = 100.0;
        state.tank.water_l = 80.0;
        assert!((state.ppm(ResourceKind::Ammonia) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_alloc_id_monotonic() {
        let mut state = create_simulation(&SimulationConfig::default());
        let a = state.alloc_id();
        let b = state.alloc_id();
        assert!(b > a);
    }

    #[test]
    fn test_push_log_stamps_tick() {
        let mut state = create_simulation(&SimulationConfig::default());
        state.tick = 42;
        state.push_log("test", Severity::Info, "hello");
        let last = state.logs.last().unwrap();
        assert_eq!(last.tick, 42);
        assert_eq!(last.source, "test");
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        // The snapshot shape is the persistence contract.
        let state = create_simulation(&SimulationConfig::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: SimulationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tick, state.tick);
        assert_eq!(back.tank.capacity_l, state.tank.capacity_l);
        assert_eq!(back.resources.temperature_c, state.resources.temperature_c);
        assert_eq!(back.plants.len(), state.plants.len());
        assert_eq!(back.fish.len(), state.fish.len());
    }
}
