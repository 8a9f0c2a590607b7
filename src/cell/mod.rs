//! Cell agent module.
//!
//! A flip-flop bacterium is a capsule-shaped agent owning one GRN instance
//! and one state vector, coupled bidirectionally to the shared chemical
//! fields. The host engine owns motion, collision, and growth mechanics and
//! decides when a cell divides; this module owns what happens inside the
//! cell each tick and how its state is partitioned when it does.

pub mod bacterium;
pub mod capsule;
pub mod division;

pub use bacterium::FlipFlopBacterium;
pub use capsule::Capsule;
pub use division::{divide, DivisionOutcome};
