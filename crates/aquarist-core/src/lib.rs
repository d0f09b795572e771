//! Aquarist Core - Virtual Aquarium Simulation Engine
//!
//! The state-and-chemistry engine behind a virtual aquarium: given user
//! actions (feed, dose, water change, add livestock, ...) and the passage
//! of discrete time, it produces a new, internally-consistent tank state.
//!
//! # Architecture
//!
//! The engine is a layered pipeline over an immutable snapshot:
//! - **State**: [`state::SimulationState`] is the single root snapshot;
//!   every mutation produces a new snapshot.
//! - **Resource registry**: [`resources::ResourceKind`] carries the bounds,
//!   units, and ppm-conversion rules for every tracked quantity.
//! - **Effect system**: systems describe changes as signed, tiered deltas;
//!   [`effect::apply_effects`] folds them with registry clamping.
//! - **Systems**: pure functions `(state, config) -> effects` for decay,
//!   evaporation, temperature, the nitrogen cycle, gas exchange, pH drift,
//!   algae, plants, and livestock.
//! - **Orchestrator**: [`engine::tick`] composes one simulated hour in a
//!   fixed stage order (immediate equipment control, active biology,
//!   passive drift, alerts).
//! - **Actions**: [`actions::Action`] validates and applies immediate user
//!   commands outside the tick cadence.
//!
//! # Example
//!
//! ```rust
//! use aquarist_core::engine::{create_simulation, tick, SimulationConfig};
//! use aquarist_core::actions::{apply_action, Action};
//!
//! let state = create_simulation(&SimulationConfig::default());
//! let outcome = apply_action(&state, &Action::Feed { grams: 1.0 });
//! let next = tick(&outcome.state);
//! assert_eq!(next.tick, 1);
//! ```

pub mod actions;
pub mod alerts;
pub mod effect;
pub mod engine;
pub mod equipment;
pub mod resources;
pub mod state;
pub mod systems;

/// Commonly used types for convenient importing.
pub mod prelude {
    pub use crate::actions::{apply_action, Action, ActionOutcome};
    pub use crate::engine::{create_simulation, day_number, hour_of_day, tick, SimulationConfig};
    pub use crate::state::SimulationState;
}
