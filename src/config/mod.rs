//! Configuration module for simulation parameters.

pub mod parameters;

pub use parameters::{
    CapsuleParameters, CouplingParameters, DivisionParameters, GrnParameters, Parameters,
};
