//! Gene regulatory network module.
//!
//! Implements the intracellular synchronous D flip-flop circuit as an ODE
//! system, together with the fixed-step integrator used to advance it.
//!
//! The circuit is a pair of mutually repressive latch nodes (`a`, `ac`)
//! gated by external data and clock signals, driving a pair of mutually
//! repressive output nodes (`q`, `qc`). Sharp biochemical thresholds are
//! approximated by a unit step function, so the right-hand side is
//! non-smooth; a fixed-step 4th-order Runge-Kutta scheme handles this
//! acceptably at the timesteps used here.

pub mod flipflop;
pub mod integrator;

pub use flipflop::{DFlipFlopSystem, IDX_A, IDX_AC, IDX_Q, IDX_QC, NUM_EQ};
pub use integrator::{OdeSystem, Rk4};
