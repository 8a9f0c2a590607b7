//! Capsule geometry for rod-shaped bacteria.
//!
//! A capsule is two pole points plus a radius. This is a plain value type
//! held by composition inside the cell agent; the host engine is expected
//! to move the poles and grow `length` toward its own targets between
//! ticks.

use glam::Vec3;

use crate::config::CapsuleParameters;

/// Rod-shaped cell geometry (μm)
#[derive(Debug, Clone)]
pub struct Capsule {
    /// First pole position
    pub x1: Vec3,
    /// Second pole position
    pub x2: Vec3,
    /// Capsule radius
    pub radius: f32,
    /// Current target rest length, maintained by the host's growth model
    pub length: f32,
    /// Length at which a fresh cell starts; scales the division pole jitter
    pub length_initial: f32,
    /// Maximum length; scales the division asymmetry draw
    pub length_max: f32,
}

impl Capsule {
    /// Create a capsule spanning the two pole positions
    pub fn new(x1: Vec3, x2: Vec3, params: &CapsuleParameters) -> Self {
        Self {
            x1,
            x2,
            radius: params.radius,
            length: x1.distance(x2),
            length_initial: params.length_initial,
            length_max: params.length_max,
        }
    }

    /// Vector from pole 1 to pole 2
    pub fn axis(&self) -> Vec3 {
        self.x2 - self.x1
    }

    /// Actual pole-to-pole distance (may differ from the rest `length`
    /// while the host's mechanics are relaxing the capsule)
    pub fn actual_length(&self) -> f32 {
        self.axis().length()
    }

    /// Capsule midpoint, used as the cell's position for field sampling
    pub fn center(&self) -> Vec3 {
        0.5 * (self.x1 + self.x2)
    }
}
