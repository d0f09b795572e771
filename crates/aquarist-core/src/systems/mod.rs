//! The chemistry and biology systems.
//!
//! Every system is a pure function over a read-only snapshot: it returns
//! effects (and, for the two biology subsystems, new entity lists and log
//! entries) and never writes state itself. All systems compute from the
//! state as it stood at the start of the tick; the orchestrator folds
//! their effects together once, in stage order, at the end.

pub mod algae;
pub mod decay;
pub mod evaporation;
pub mod gas_exchange;
pub mod livestock;
pub mod nitrogen;
pub mod ph;
pub mod plants;
pub mod temperature;
