//! Parameter structures for the flip-flop GRN and the cell lifecycle.
//!
//! Defaults are the published parameter set of the synchronous D flip-flop
//! circuit; the two clock thresholds are rescaled for a shorter clock
//! oscillator period.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// GRN reaction kinetics (rates, thresholds, decay)
    pub grn: GrnParameters,
    /// Cell wall / field coupling parameters
    pub coupling: CouplingParameters,
    /// Division perturbation magnitudes
    pub division: DivisionParameters,
    /// Capsule geometry defaults
    pub capsule: CapsuleParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        Self::load_from_dir("data/parameters")
    }

    /// Load parameters from a specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let grn = GrnParameters::load_or_default(dir.join("grn.json"));
        let coupling = CouplingParameters::load_or_default(dir.join("coupling.json"));
        let division = DivisionParameters::load_or_default(dir.join("division.json"));
        let capsule = CapsuleParameters::load_or_default(dir.join("capsule.json"));

        Self {
            grn,
            coupling,
            division,
            capsule,
        }
    }
}

macro_rules! impl_load_or_default {
    ($ty:ident, $label:expr) => {
        impl $ty {
            /// Load from JSON file or return defaults
            pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
                match std::fs::read_to_string(path.as_ref()) {
                    Ok(contents) => match serde_json::from_str(&contents) {
                        Ok(params) => {
                            log::info!("Loaded {} parameters from {:?}", $label, path.as_ref());
                            params
                        }
                        Err(e) => {
                            log::warn!(
                                "Failed to parse {} parameters: {}, using defaults",
                                $label,
                                e
                            );
                            Self::default()
                        }
                    },
                    Err(_) => {
                        log::info!("{} parameters file not found, using defaults", $label);
                        Self::default()
                    }
                }
            }
        }
    };
}

/// Kinetic parameters of the D flip-flop gene circuit
///
/// Rates are in s⁻¹, thresholds in nM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrnParameters {
    /// Data-gated production rate of the latch nodes (s⁻¹)
    pub a1: f64,
    /// Cross-repression production rate of the latch nodes (s⁻¹)
    pub a2: f64,
    /// Clock-gated production rate of the output nodes (s⁻¹)
    pub a3: f64,
    /// Cross-repression production rate of the output nodes (s⁻¹)
    pub a4: f64,

    /// Data input threshold (nM)
    pub kd1: f64,
    /// Clock threshold gating latch production (nM)
    pub kd2: f64,
    /// Latch cross-repression threshold (nM)
    pub kd3: f64,
    /// Latch level threshold driving the outputs (nM)
    pub kd4: f64,
    /// Clock threshold gating output production (nM)
    pub kd5: f64,
    /// Output cross-repression threshold (nM)
    pub kd6: f64,
    /// Output saturation threshold (nM)
    pub kd7: f64,

    /// Latch node degradation rate (s⁻¹)
    pub dt1: f64,
    /// Output node degradation rate (s⁻¹)
    pub dt2: f64,
}

impl Default for GrnParameters {
    fn default() -> Self {
        Self {
            a1: 0.8508,
            a2: 1.5299,
            a3: 0.3431,
            a4: 1.5299,

            kd1: 99.0481,
            kd2: 1246.72,
            kd3: 34.9188,
            kd4: 99.0481,
            kd5: 1466.98,
            kd6: 11.7473,
            kd7: 99.8943,

            dt1: 0.0036,
            dt2: 0.0036,
        }
    }
}

impl_load_or_default!(GrnParameters, "GRN");

/// Coupling between the intracellular GRN and the extracellular fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingParameters {
    /// Cell wall diffusivity for the q/qc write-back, taken from other
    /// capsule bacterium implementations
    pub cell_wall_diffusivity: f64,
    /// Divisor converting engine time and timestep into the GRN model's
    /// native time base
    pub time_rescale: f64,
}

impl Default for CouplingParameters {
    fn default() -> Self {
        Self {
            cell_wall_diffusivity: 2.0,
            time_rescale: 60.0,
        }
    }
}

impl_load_or_default!(CouplingParameters, "coupling");

/// Perturbation magnitudes applied at division
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionParameters {
    /// Magnitude of the uniform split-point asymmetry, relative to the
    /// maximum capsule length
    pub asymmetry: f32,
    /// Magnitude of the per-axis uniform pole jitter, relative to the
    /// initial capsule length
    pub pole_jitter: f32,
    /// Magnitude of the Gaussian perturbation applied to each GRN state
    /// component, relative to that component's value
    pub state_perturbation: f64,
}

impl Default for DivisionParameters {
    fn default() -> Self {
        Self {
            asymmetry: 0.1,
            pole_jitter: 0.05,
            state_perturbation: 0.1,
        }
    }
}

impl_load_or_default!(DivisionParameters, "division");

/// Capsule geometry defaults (μm)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapsuleParameters {
    /// Capsule radius (μm)
    pub radius: f32,
    /// Length at which a fresh cell starts (μm)
    pub length_initial: f32,
    /// Length scale for the division asymmetry draw (μm)
    pub length_max: f32,
}

impl Default for CapsuleParameters {
    fn default() -> Self {
        Self {
            radius: 0.5,
            length_initial: 2.0,
            length_max: 7.0,
        }
    }
}

impl_load_or_default!(CapsuleParameters, "capsule");
