//! The flip-flop bacterium agent.
//!
//! Owns one [`DFlipFlopSystem`] and one 4-component state vector, and
//! couples them to the shared extracellular fields once per simulation
//! tick. The host engine advances geometry and growth first, then calls
//! [`FlipFlopBacterium::step`].

use glam::Vec3;

use crate::cell::capsule::Capsule;
use crate::config::Parameters;
use crate::error::ModelError;
use crate::field::FieldSet;
use crate::grn::{DFlipFlopSystem, OdeSystem, Rk4, IDX_Q, IDX_QC};

/// A capsule-shaped bacterium carrying the D flip-flop circuit
pub struct FlipFlopBacterium {
    capsule: Capsule,
    fields: FieldSet,
    grn: DFlipFlopSystem,
    /// GRN state `[a, ac, q, qc]`, replaced wholesale each step
    state: Vec<f64>,
    params: Parameters,
}

impl FlipFlopBacterium {
    /// Create a cell with a fresh GRN at its initial conditions
    pub fn new(capsule: Capsule, fields: FieldSet, params: Parameters) -> Self {
        let grn = DFlipFlopSystem::new(params.grn.clone());
        let state = grn.initial_conditions();
        Self {
            capsule,
            fields,
            grn,
            state,
            params,
        }
    }

    /// Convenience constructor building the capsule from the two pole
    /// positions and the configured geometry defaults
    pub fn from_poles(x1: Vec3, x2: Vec3, fields: FieldSet, params: Parameters) -> Self {
        let capsule = Capsule::new(x1, x2, &params.capsule);
        Self::new(capsule, fields, params)
    }

    /// Advance the intracellular circuit by one tick.
    ///
    /// `sim_time` and `dt` are in the engine's time base; both are divided
    /// by the configured rescale factor before reaching the GRN model.
    ///
    /// The tick: sample the d/i/q/qc field concentrations at the capsule
    /// center, feed the circuit inputs, integrate one RK4 step, then relax
    /// the extracellular q/qc pools toward the new intracellular levels
    /// through the cell wall.
    pub fn step(&mut self, sim_time: f64, dt: f64, integrator: &mut Rk4) -> Result<(), ModelError> {
        let position = self.capsule.center();

        // External chemical levels at the cell's position. The d field is
        // sampled with the rest but the latch's D input is driven by the
        // qc field below (deliberate feedback reversal in this variant).
        let _external_data = self.fields.d.concentration(position);
        let external_clk = self.fields.i.concentration(position);
        let external_q = self.fields.q.concentration(position);
        let external_qc = self.fields.qc.concentration(position);

        // Qc for reverse!
        self.grn.set_external_levels(external_qc, external_clk);

        // Integrate in the GRN's native time base
        let rescale = self.params.coupling.time_rescale;
        let y_new = integrator.step(&self.grn, sim_time / rescale, &self.state, dt / rescale)?;
        self.state = y_new;

        // Whatever the intracellular q/qc pools gained, the extracellular
        // pools lose, scaled by the cell wall diffusivity. This is a
        // per-step linear relaxation toward equality, not an equilibrium
        // solve.
        let delta_q = external_q - self.state[IDX_Q];
        let delta_qc = external_qc - self.state[IDX_QC];
        let diffusivity = self.params.coupling.cell_wall_diffusivity;
        self.fields.q.add_quantity(position, diffusivity * -delta_q);
        self.fields.qc.add_quantity(position, diffusivity * -delta_qc);

        Ok(())
    }

    /// Current GRN state `[a, ac, q, qc]`
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    /// Capsule geometry
    pub fn capsule(&self) -> &Capsule {
        &self.capsule
    }

    /// Mutable capsule geometry, for the host's mechanics/growth update
    pub fn capsule_mut(&mut self) -> &mut Capsule {
        &mut self.capsule
    }

    /// The cell's GRN instance
    pub fn grn(&self) -> &DFlipFlopSystem {
        &self.grn
    }

    /// Field handles this cell is wired to
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Parameters this cell was built with
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Replace the GRN state vector, e.g. with an inherited state at
    /// division. Fails fast on a wrongly sized vector.
    pub fn install_state(&mut self, state: Vec<f64>) -> Result<(), ModelError> {
        if state.len() != self.grn.num_equations() {
            return Err(ModelError::Dimensionality {
                expected: self.grn.num_equations(),
                actual: state.len(),
            });
        }
        self.state = state;
        Ok(())
    }

    /// Swap in a fresh GRN instance (inputs zeroed); the state vector is
    /// untouched, since the trajectory lives there, not in the model
    pub(crate) fn reset_grn(&mut self) {
        self.grn = DFlipFlopSystem::new(self.params.grn.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::WellMixedField;
    use crate::grn::NUM_EQ;

    fn zero_fields() -> FieldSet {
        FieldSet::new(
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
        )
    }

    fn test_cell() -> FlipFlopBacterium {
        FlipFlopBacterium::from_poles(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            zero_fields(),
            Parameters::default(),
        )
    }

    #[test]
    fn test_new_cell_starts_at_ics() {
        let cell = test_cell();
        assert_eq!(cell.state(), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(cell.grn().external_levels(), (0.0, 0.0));
    }

    #[test]
    fn test_step_keeps_dimensionality() {
        let mut cell = test_cell();
        let mut integrator = Rk4::default();

        for tick in 0..10 {
            cell.step(tick as f64 * 0.01, 0.01, &mut integrator).unwrap();
            assert_eq!(cell.state().len(), NUM_EQ);
        }
    }

    #[test]
    fn test_install_state_rejects_wrong_length() {
        let mut cell = test_cell();
        let err = cell.install_state(vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ModelError::Dimensionality {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_reset_grn_clears_inputs_but_not_state() {
        let mut cell = test_cell();
        cell.install_state(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut integrator = Rk4::default();
        cell.step(60.0, 0.5, &mut integrator).unwrap();

        cell.reset_grn();
        assert_eq!(cell.grn().external_levels(), (0.0, 0.0));
        assert_ne!(cell.state(), &[0.0, 0.0, 0.0, 0.0]);
    }
}
