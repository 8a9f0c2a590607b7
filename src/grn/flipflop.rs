//! The synchronous D flip-flop gene circuit.
//!
//! Four ODEs over the state `[a, ac, q, qc]`: a mutually repressive latch
//! pair gated by the external data (D) and clock (CLK) levels, driving a
//! mutually repressive output pair. Thresholded regulation is modeled with
//! a unit step function.
//!
//! Two quirks of the model are deliberate and must not be "fixed":
//! - Every derivative component is multiplied by the current time `t`,
//!   making the system formally time-variant.
//! - In the colony coupling (see `cell::bacterium`), the circuit's D input
//!   is driven by the extracellular qc field, not the d field.

use crate::config::GrnParameters;
use crate::error::ModelError;
use crate::grn::integrator::OdeSystem;

/// Number of equations in the flip-flop system
pub const NUM_EQ: usize = 4;

/// Index of the latch node `a`
pub const IDX_A: usize = 0;
/// Index of the complementary latch node `ac`
pub const IDX_AC: usize = 1;
/// Index of the output node `q`
pub const IDX_Q: usize = 2;
/// Index of the complementary output node `qc`
pub const IDX_QC: usize = 3;

/// Unit step: 0 for negative input, 1 otherwise (boundary-inclusive on the
/// high side, so `unit_step(0.0) == 1.0`).
#[inline]
pub(crate) fn unit_step(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        1.0
    }
}

/// The D flip-flop ODE system
///
/// Holds the kinetic parameters plus the two externally set input levels.
/// Derivative evaluation is pure with respect to the state, the time, and
/// the stored inputs. Each cell owns a private instance; a fresh instance
/// has both inputs reset to zero.
#[derive(Debug, Clone)]
pub struct DFlipFlopSystem {
    params: GrnParameters,
    /// External data (D) chemical level
    external_d: f64,
    /// External clock (CLK) chemical level
    external_clk: f64,
}

impl DFlipFlopSystem {
    /// Create a fresh system with the given kinetics and zeroed inputs
    pub fn new(params: GrnParameters) -> Self {
        Self {
            params,
            external_d: 0.0,
            external_clk: 0.0,
        }
    }

    /// Set the external data and clock levels used by subsequent
    /// derivative evaluations. Accepts any reals; no validation.
    pub fn set_external_levels(&mut self, d: f64, clk: f64) {
        self.external_d = d;
        self.external_clk = clk;
    }

    /// Currently stored (data, clock) input levels
    pub fn external_levels(&self) -> (f64, f64) {
        (self.external_d, self.external_clk)
    }

    /// Kinetic parameters of this instance
    pub fn params(&self) -> &GrnParameters {
        &self.params
    }
}

impl OdeSystem for DFlipFlopSystem {
    fn num_equations(&self) -> usize {
        NUM_EQ
    }

    fn derivatives(&self, t: f64, y: &[f64], dydt: &mut [f64]) -> Result<(), ModelError> {
        if y.len() != NUM_EQ {
            return Err(ModelError::Dimensionality {
                expected: NUM_EQ,
                actual: y.len(),
            });
        }
        if dydt.len() != NUM_EQ {
            return Err(ModelError::Dimensionality {
                expected: NUM_EQ,
                actual: dydt.len(),
            });
        }

        let p = &self.params;
        let d = self.external_d;
        let clk = self.external_clk;

        // Latch pair: data-gated production when the clock is low, plus
        // cross-repression, minus first-order decay.
        dydt[IDX_A] = p.a1 * unit_step(d - p.kd1) * unit_step(p.kd2 - clk)
            + p.a2 * unit_step(p.kd3 - y[IDX_AC])
            - p.dt1 * y[IDX_A];
        dydt[IDX_AC] = p.a1 * unit_step(p.kd1 - d) * unit_step(p.kd2 - clk)
            + p.a2 * unit_step(p.kd3 - y[IDX_A])
            - p.dt1 * y[IDX_AC];

        // Output pair: latch-driven production when the clock is high,
        // saturating at kd7, plus cross-repression, minus decay.
        dydt[IDX_Q] = p.a3
            * unit_step(y[IDX_A] - p.kd4)
            * unit_step(clk - p.kd5)
            * unit_step(p.kd7 - y[IDX_Q])
            + p.a4 * unit_step(p.kd6 - y[IDX_QC]) * unit_step(p.kd7 - y[IDX_Q])
            - p.dt2 * y[IDX_Q];
        dydt[IDX_QC] = p.a3
            * unit_step(y[IDX_AC] - p.kd4)
            * unit_step(clk - p.kd5)
            * unit_step(p.kd7 - y[IDX_QC])
            + p.a4 * unit_step(p.kd6 - y[IDX_Q]) * unit_step(p.kd7 - y[IDX_QC])
            - p.dt2 * y[IDX_QC];

        // Deliberate time scaling of the whole derivative (see module docs)
        for component in dydt.iter_mut() {
            *component *= t;
        }

        Ok(())
    }

    fn initial_conditions(&self) -> Vec<f64> {
        vec![0.0; NUM_EQ]
    }
}
