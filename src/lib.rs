//! Flip-Flop Colony - synchronous D flip-flop GRN in dividing bacteria
//!
//! This library models a synthetic D-type flip-flop gene regulatory
//! network inside capsule-shaped, dividing bacterial cells. Each cell
//! integrates a four-state ODE circuit, exchanges its output chemicals
//! with shared extracellular fields once per tick, and partitions its
//! internal state between two descendants at division.
//!
//! The spatial/physical engine, the diffusive field solver, and the
//! division trigger are external collaborators; this crate defines the
//! interfaces they plug into (`ChemicalField`, the per-tick `step`, and
//! the `divide` function).

pub mod cell;
pub mod config;
pub mod error;
pub mod field;
pub mod grn;

pub use cell::{divide, Capsule, DivisionOutcome, FlipFlopBacterium};
pub use config::Parameters;
pub use error::ModelError;
pub use field::{ChemicalField, FieldHandle, FieldSet, WellMixedField};
pub use grn::{DFlipFlopSystem, OdeSystem, Rk4, IDX_A, IDX_AC, IDX_Q, IDX_QC, NUM_EQ};
