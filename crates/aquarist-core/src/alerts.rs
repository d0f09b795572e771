//! Edge-triggered water-quality alerts.
//!
//! Each alert is a latch: crossing into the bad range fires exactly one
//! warning and sets the latch, staying there fires nothing, and returning
//! to the safe range clears the latch silently so the next crossing fires
//! again. Thresholds come from the resource registry's safe ranges where
//! one exists. Alerts run on the folded post-tick state, so a value that
//! spikes and recovers within a single hour never fires.

use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;
use crate::state::{Severity, SimulationState};

/// Water level fraction below which the low-water alert trips.
const LOW_WATER_FRACTION: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    HighAmmonia,
    HighNitrite,
    HighNitrate,
    LowOxygen,
    TemperatureOutOfRange,
    PhOutOfRange,
    HighAlgae,
    LowWater,
}

impl AlertKind {
    pub fn all() -> &'static [AlertKind] {
        &[
            Self::HighAmmonia,
            Self::HighNitrite,
            Self::HighNitrate,
            Self::LowOxygen,
            Self::TemperatureOutOfRange,
            Self::PhOutOfRange,
            Self::HighAlgae,
            Self::LowWater,
        ]
    }

    /// Whether the condition holds for the given state.
    pub fn triggered(&self, state: &SimulationState) -> bool {
        match self {
            Self::HighAmmonia => state.ppm(ResourceKind::Ammonia) > safe_high(ResourceKind::Ammonia),
            Self::HighNitrite => state.ppm(ResourceKind::Nitrite) > safe_high(ResourceKind::Nitrite),
            Self::HighNitrate => state.ppm(ResourceKind::Nitrate) > safe_high(ResourceKind::Nitrate),
            Self::LowOxygen => state.resources.oxygen_mg_l < safe_low(ResourceKind::Oxygen),
            Self::TemperatureOutOfRange => {
                let t = state.resources.temperature_c;
                t < safe_low(ResourceKind::Temperature) || t > safe_high(ResourceKind::Temperature)
            }
            Self::PhOutOfRange => {
                let ph = state.resources.ph;
                ph < safe_low(ResourceKind::Ph) || ph > safe_high(ResourceKind::Ph)
            }
            Self::HighAlgae => state.resources.algae > safe_high(ResourceKind::Algae),
            Self::LowWater => state.water_fraction() < LOW_WATER_FRACTION,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::HighAmmonia => "ammonia above safe level",
            Self::HighNitrite => "nitrite above safe level",
            Self::HighNitrate => "nitrate above safe level",
            Self::LowOxygen => "dissolved oxygen critically low",
            Self::TemperatureOutOfRange => "temperature outside safe range",
            Self::PhOutOfRange => "pH outside safe range",
            Self::HighAlgae => "algae overgrowth",
            Self::LowWater => "water level low",
        }
    }
}

fn safe_low(kind: ResourceKind) -> f64 {
    kind.spec().safe.map(|(lo, _)| lo).unwrap_or(f64::NEG_INFINITY)
}

fn safe_high(kind: ResourceKind) -> f64 {
    kind.spec().safe.map(|(_, hi)| hi).unwrap_or(f64::INFINITY)
}

/// One latch per alert kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertStates {
    pub high_ammonia: bool,
    pub high_nitrite: bool,
    pub high_nitrate: bool,
    pub low_oxygen: bool,
    pub temperature_out_of_range: bool,
    pub ph_out_of_range: bool,
    pub high_algae: bool,
    pub low_water: bool,
}

impl AlertStates {
    pub fn get(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::HighAmmonia => self.high_ammonia,
            AlertKind::HighNitrite => self.high_nitrite,
            AlertKind::HighNitrate => self.high_nitrate,
            AlertKind::LowOxygen => self.low_oxygen,
            AlertKind::TemperatureOutOfRange => self.temperature_out_of_range,
            AlertKind::PhOutOfRange => self.ph_out_of_range,
            AlertKind::HighAlgae => self.high_algae,
            AlertKind::LowWater => self.low_water,
        }
    }

    fn set(&mut self, kind: AlertKind, value: bool) {
        match kind {
            AlertKind::HighAmmonia => self.high_ammonia = value,
            AlertKind::HighNitrite => self.high_nitrite = value,
            AlertKind::HighNitrate => self.high_nitrate = value,
            AlertKind::LowOxygen => self.low_oxygen = value,
            AlertKind::TemperatureOutOfRange => self.temperature_out_of_range = value,
            AlertKind::PhOutOfRange => self.ph_out_of_range = value,
            AlertKind::HighAlgae => self.high_algae = value,
            AlertKind::LowWater => self.low_water = value,
        }
    }
}

/// Evaluate every alert against the state, firing warnings on rising edges
/// and clearing latches silently on falling ones.
pub fn update(state: &mut SimulationState) {
    let mut fired = Vec::new();
    for kind in AlertKind::all() {
        let now = kind.triggered(state);
        let was = state.alerts.get(*kind);
        if now && !was {
            fired.push(kind.message());
        }
        state.alerts.set(*kind, now);
    }
    for message in fired {
        state.push_log("alerts", Severity::Warning, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_simulation, SimulationConfig};

    fn base_state() -> SimulationState {
        create_simulation(&SimulationConfig::default())
    }

    fn warning_count(state: &SimulationState) -> usize {
        state
            .logs
            .iter()
            .filter(|l| l.source == "alerts" && l.severity == Severity::Warning)
            .count()
    }

    #[test]
    fn test_healthy_tank_no_alerts() {
        let mut state = base_state();
        update(&mut state);
        assert_eq!(warning_count(&state), 0);
        for kind in AlertKind::all() {
            assert!(!state.alerts.get(*kind));
        }
    }

    #[test]
    fn test_rising_edge_fires_once() {
        let mut state = base_state();
        state.resources.ammonia_mg = 100.0; // 1 ppm in 100L
        update(&mut state);
        assert_eq!(warning_count(&state), 1);
        assert!(state.alerts.high_ammonia);

        // Still high next tick: no refire.
        update(&mut state);
        assert_eq!(warning_count(&state), 1);
    }

    #[test]
    fn test_falling_edge_clears_silently_then_refires() {
        let mut state = base_state();
        state.resources.ammonia_mg = 100.0;
        update(&mut state);
        assert_eq!(warning_count(&state), 1);

        state.resources.ammonia_mg = 0.0;
        update(&mut state);
        assert!(!state.alerts.high_ammonia);
        assert_eq!(warning_count(&state), 1, "clearing logs nothing");

        state.resources.ammonia_mg = 100.0;
        update(&mut state);
        assert_eq!(warning_count(&state), 2, "re-crossing fires again");
    }

    #[test]
    fn test_two_sided_ranges() {
        let mut state = base_state();
        state.resources.temperature_c = 18.0;
        update(&mut state);
        assert!(state.alerts.temperature_out_of_range);

        let mut state = base_state();
        state.resources.temperature_c = 32.0;
        update(&mut state);
        assert!(state.alerts.temperature_out_of_range);

        let mut state = base_state();
        state.resources.ph = 9.0;
        update(&mut state);
        assert!(state.alerts.ph_out_of_range);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the boundary is still safe.
        let mut state = base_state();
        state.resources.ammonia_mg = 25.0; // exactly 0.25 ppm in 100L
        update(&mut state);
        assert!(!state.alerts.high_ammonia);
    }

    #[test]
    fn test_low_water_alert() {
        let mut state = base_state();
        state.tank.water_l = 0.6 * state.tank.capacity_l;
        update(&mut state);
        assert!(state.alerts.low_water);
        assert_eq!(warning_count(&state), 1);
    }

    #[test]
    fn test_independent_latches() {
        let mut state = base_state();
        state.resources.ammonia_mg = 100.0;
        state.resources.oxygen_mg_l = 2.0;
        update(&mut state);
        assert_eq!(warning_count(&state), 2);
        assert!(state.alerts.high_ammonia);
        assert!(state.alerts.low_oxygen);
        assert!(!state.alerts.high_nitrite);
    }
}
