//! Chemical field interface.
//!
//! The diffusive field solver itself lives in the host engine; this module
//! only defines the surface the cells need: a point concentration query and
//! a local quantity injection. Fields are engine-owned, shared objects
//! handed to each cell at construction, so the trait takes `&self` and
//! implementors are responsible for their own internal synchronization
//! (multiple cells may read and write the same field within one tick).
//!
//! Snapshot policy: this crate applies write-backs immediately as cells are
//! stepped. Hosts wanting strict read-before-write snapshot semantics for a
//! tick must order all concentration reads ahead of all write-backs
//! themselves.

use std::sync::{Arc, Mutex};

use glam::Vec3;

/// A spatial scalar concentration field
pub trait ChemicalField: Send + Sync {
    /// Concentration at a world-space position
    fn concentration(&self, position: Vec3) -> f64;

    /// Add (or, with a negative amount, remove) quantity near a position
    fn add_quantity(&self, position: Vec3, amount: f64);
}

/// Shared handle to an engine-owned field
pub type FieldHandle = Arc<dyn ChemicalField>;

/// The five named fields a flip-flop bacterium is wired to.
///
/// `i` carries the clock signal and `d` the data signal. Cloning a
/// `FieldSet` clones the handles, not the fields, so mother and daughter
/// cells share the same extracellular pools after division. The `h` field
/// is wired through but never read by the cell itself; it is part of the
/// colony-level circuit owned by the host.
#[derive(Clone)]
pub struct FieldSet {
    /// Helper field of the colony-level circuit
    pub h: FieldHandle,
    /// Clock (CLK) field
    pub i: FieldHandle,
    /// Data (D) field
    pub d: FieldHandle,
    /// Output field
    pub q: FieldHandle,
    /// Complementary output field
    pub qc: FieldHandle,
}

impl FieldSet {
    /// Wire up the five field handles
    pub fn new(
        h: FieldHandle,
        i: FieldHandle,
        d: FieldHandle,
        q: FieldHandle,
        qc: FieldHandle,
    ) -> Self {
        Self { h, i, d, q, qc }
    }
}

/// A spatially uniform reference field.
///
/// Holds a single well-mixed pool: the concentration is the same at every
/// position and injected quantity raises it directly (unit volume). Useful
/// for hosts that do not need spatial resolution and for integration tests;
/// a real diffusive grid solver satisfies the same trait.
#[derive(Debug)]
pub struct WellMixedField {
    pool: Mutex<f64>,
}

impl WellMixedField {
    /// Create a field with the given initial concentration
    pub fn new(initial_concentration: f64) -> Self {
        Self {
            pool: Mutex::new(initial_concentration),
        }
    }

    /// Convenience constructor returning a shared handle
    pub fn handle(initial_concentration: f64) -> FieldHandle {
        Arc::new(Self::new(initial_concentration))
    }
}

impl ChemicalField for WellMixedField {
    fn concentration(&self, _position: Vec3) -> f64 {
        *self.pool.lock().expect("field pool lock poisoned")
    }

    fn add_quantity(&self, _position: Vec3, amount: f64) {
        *self.pool.lock().expect("field pool lock poisoned") += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_mixed_field_is_uniform() {
        let field = WellMixedField::new(3.5);
        assert_eq!(field.concentration(Vec3::ZERO), 3.5);
        assert_eq!(field.concentration(Vec3::new(10.0, -4.0, 2.0)), 3.5);
    }

    #[test]
    fn test_add_quantity_accumulates() {
        let field = WellMixedField::new(1.0);
        field.add_quantity(Vec3::ZERO, 2.0);
        field.add_quantity(Vec3::ONE, -0.5);
        assert!((field.concentration(Vec3::ZERO) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_field_set_clone_shares_pools() {
        let fields = FieldSet::new(
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
            WellMixedField::handle(0.0),
        );
        let clone = fields.clone();

        fields.q.add_quantity(Vec3::ZERO, 4.0);
        assert!((clone.q.concentration(Vec3::ZERO) - 4.0).abs() < 1e-12);
    }
}
