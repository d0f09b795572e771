//! Pure aquarium chemistry and biology formulas.
//!
//! This crate contains the numeric heart of the engine, independent of any
//! state snapshot, registry, or runtime. Functions take plain data and
//! return plain data, making them unit-testable in isolation and reusable
//! from the engine crate and the headless harness alike.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Per-system tunable records with documented defaults |
//! | [`growth`] | Photosynthesis limits, overgrowth penalty, condition bands, logistic colonies |
//! | [`math`] | Q10 scaling, exponential approach, Liebig minimum, zero-guarded ratios |
//! | [`schedule`] | Daily equipment schedules interpreted modulo 24 |
//! | [`species`] | Plant and fish species tables (demand tiers, tolerances, lifespans) |
//! | [`stress`] | Per-stressor fish stress scoring scaled by species hardiness |

pub mod config;
pub mod growth;
pub mod math;
pub mod schedule;
pub mod species;
pub mod stress;
