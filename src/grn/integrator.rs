//! ODE integration for the GRN.
//!
//! Implements 4th-order Runge-Kutta (RK4) single-step integration over a
//! time-dependent derivative system.
//!
//! Unlike a metabolic integrator, this one does not clamp the state to
//! non-negative values: the flip-flop model is not guaranteed non-negative
//! and clamping would distort the latch dynamics.
//!
//! Reference: Press et al., Numerical Recipes, 3rd ed., Cambridge University Press 2007

use crate::error::ModelError;

/// A system of ordinary differential equations dy/dt = f(t, y).
///
/// Implementors must write exactly `num_equations()` derivative components
/// into `dydt` and must reject state slices of any other length with
/// [`ModelError::Dimensionality`].
pub trait OdeSystem {
    /// Number of equations in the system
    fn num_equations(&self) -> usize;

    /// Evaluate dy/dt at time `t` and state `y`, writing into `dydt`
    fn derivatives(&self, t: f64, y: &[f64], dydt: &mut [f64]) -> Result<(), ModelError>;

    /// Initial conditions for the system
    fn initial_conditions(&self) -> Vec<f64>;
}

/// Fixed-step 4th-order Runge-Kutta integrator
///
/// Performs one step per call; the caller owns the time loop. Scratch
/// buffers are reused across calls to avoid per-step allocation.
///
/// # RK4 Algorithm
/// k1 = f(t, y)
/// k2 = f(t + dt/2, y + dt/2 * k1)
/// k3 = f(t + dt/2, y + dt/2 * k2)
/// k4 = f(t + dt, y + dt * k3)
/// y_new = y + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
pub struct Rk4 {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    y_temp: Vec<f64>,
}

impl Rk4 {
    /// Create a new RK4 integrator for a system with n variables
    pub fn new(n_variables: usize) -> Self {
        Self {
            k1: vec![0.0; n_variables],
            k2: vec![0.0; n_variables],
            k3: vec![0.0; n_variables],
            k4: vec![0.0; n_variables],
            y_temp: vec![0.0; n_variables],
        }
    }

    /// Resize internal buffers if system size changes
    fn resize(&mut self, n_variables: usize) {
        if self.k1.len() != n_variables {
            self.k1.resize(n_variables, 0.0);
            self.k2.resize(n_variables, 0.0);
            self.k3.resize(n_variables, 0.0);
            self.k4.resize(n_variables, 0.0);
            self.y_temp.resize(n_variables, 0.0);
        }
    }

    /// Advance `y` by one step of size `dt` starting at time `t`,
    /// returning the new state vector.
    ///
    /// The input state is replaced wholesale, never mutated in place.
    pub fn step<S: OdeSystem>(
        &mut self,
        system: &S,
        t: f64,
        y: &[f64],
        dt: f64,
    ) -> Result<Vec<f64>, ModelError> {
        let n = system.num_equations();
        if y.len() != n {
            return Err(ModelError::Dimensionality {
                expected: n,
                actual: y.len(),
            });
        }
        self.resize(n);

        // k1 = f(t, y)
        system.derivatives(t, y, &mut self.k1)?;

        // k2 = f(t + dt/2, y + dt/2 * k1)
        for i in 0..n {
            self.y_temp[i] = y[i] + 0.5 * dt * self.k1[i];
        }
        system.derivatives(t + 0.5 * dt, &self.y_temp, &mut self.k2)?;

        // k3 = f(t + dt/2, y + dt/2 * k2)
        for i in 0..n {
            self.y_temp[i] = y[i] + 0.5 * dt * self.k2[i];
        }
        system.derivatives(t + 0.5 * dt, &self.y_temp, &mut self.k3)?;

        // k4 = f(t + dt, y + dt * k3)
        for i in 0..n {
            self.y_temp[i] = y[i] + dt * self.k3[i];
        }
        system.derivatives(t + dt, &self.y_temp, &mut self.k4)?;

        // y_new = y + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
        let dt_6 = dt / 6.0;
        let mut y_new = y.to_vec();
        for i in 0..n {
            y_new[i] += dt_6 * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]);
        }

        Ok(y_new)
    }
}

impl Default for Rk4 {
    fn default() -> Self {
        Self::new(crate::grn::NUM_EQ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dy/dt = -y, analytical solution y(t) = exp(-t)
    struct ExponentialDecay;

    impl OdeSystem for ExponentialDecay {
        fn num_equations(&self) -> usize {
            1
        }

        fn derivatives(&self, _t: f64, y: &[f64], dydt: &mut [f64]) -> Result<(), ModelError> {
            dydt[0] = -y[0];
            Ok(())
        }

        fn initial_conditions(&self) -> Vec<f64> {
            vec![1.0]
        }
    }

    /// dy/dt = t, analytical solution y(t) = t²/2
    struct LinearInTime;

    impl OdeSystem for LinearInTime {
        fn num_equations(&self) -> usize {
            1
        }

        fn derivatives(&self, t: f64, _y: &[f64], dydt: &mut [f64]) -> Result<(), ModelError> {
            dydt[0] = t;
            Ok(())
        }

        fn initial_conditions(&self) -> Vec<f64> {
            vec![0.0]
        }
    }

    #[test]
    fn test_rk4_exponential_decay() {
        let system = ExponentialDecay;
        let mut integrator = Rk4::new(1);
        let mut y = system.initial_conditions();

        let dt = 0.01;
        let mut t = 0.0;
        while t < 1.0 {
            y = integrator.step(&system, t, &y, dt).unwrap();
            t += dt;
        }

        let expected = (-t).exp();
        let error = (y[0] - expected).abs();
        assert!(
            error < 1e-6,
            "RK4 error too large: {} vs expected {}",
            y[0],
            expected
        );
    }

    #[test]
    fn test_rk4_time_dependent_system() {
        // RK4 is exact for polynomial right-hand sides of low order,
        // so dy/dt = t must integrate to t²/2 up to rounding.
        let system = LinearInTime;
        let mut integrator = Rk4::new(1);
        let mut y = system.initial_conditions();

        let dt = 0.1;
        for i in 0..10 {
            y = integrator.step(&system, i as f64 * dt, &y, dt).unwrap();
        }

        let expected = 0.5; // 1²/2
        assert!(
            (y[0] - expected).abs() < 1e-12,
            "dy/dt = t should integrate exactly: {} vs {}",
            y[0],
            expected
        );
    }

    #[test]
    fn test_wrong_state_length_is_rejected() {
        let system = ExponentialDecay;
        let mut integrator = Rk4::new(1);

        let result = integrator.step(&system, 0.0, &[1.0, 2.0], 0.01);
        assert_eq!(
            result,
            Err(ModelError::Dimensionality {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_state_is_replaced_not_mutated() {
        let system = ExponentialDecay;
        let mut integrator = Rk4::new(1);
        let y = vec![1.0];

        let y_new = integrator.step(&system, 0.0, &y, 0.1).unwrap();
        assert!((y[0] - 1.0).abs() < 1e-15, "input state must be untouched");
        assert!(y_new[0] < 1.0, "decay should reduce the state");
    }
}
