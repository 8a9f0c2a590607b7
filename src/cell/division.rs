//! Cell division: one cell becomes two.
//!
//! Division is a pure-ish function over (parent, RNG): it consumes the
//! parent and returns both descendants, rather than mutating a live agent
//! while spawning a sibling. The host engine decides *when* a cell divides
//! (e.g. by length threshold) and registers the daughter in the population;
//! this function decides *how* the geometry and the GRN state are
//! partitioned.
//!
//! The split point is drawn uniformly around the midpoint (asymmetry
//! scaled by the maximum capsule length), both new pole positions receive
//! independent per-axis jitter, and each GRN state component is perturbed
//! by anti-correlated Gaussian noise: the mother gets `y + p`, the daughter
//! `y - p`, so the pair sums to exactly twice the pre-division state.

use glam::Vec3;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::cell::bacterium::FlipFlopBacterium;
use crate::cell::capsule::Capsule;
use crate::error::ModelError;

/// Both descendants of a division, each `Growing`
pub struct DivisionOutcome {
    /// The continuing cell, shortened to its new segment
    pub mother: FlipFlopBacterium,
    /// The freshly allocated sibling; the caller registers it in the
    /// population
    pub daughter: FlipFlopBacterium,
}

/// Split `parent` into two descendant cells.
///
/// Fails with [`ModelError::InvalidGeometry`] if either daughter segment
/// would come out with non-positive length; that is a precondition
/// violation by the caller's division trigger and is never clamped over.
pub fn divide<R: Rng>(
    mut parent: FlipFlopBacterium,
    rng: &mut R,
) -> Result<DivisionOutcome, ModelError> {
    let division = parent.params().division.clone();
    let capsule = parent.capsule().clone();

    let u = capsule.axis();
    let l_actual = u.length();

    // Uniform perturbation of the split point, scaled by the maximum
    // (not actual) capsule length
    let div_pert = division.asymmetry * capsule.length_max * (rng.gen::<f32>() - 0.5);

    let l1 = 0.5 * l_actual * (1.0 + div_pert) - capsule.radius;
    let l2 = 0.5 * l_actual * (1.0 - div_pert) - capsule.radius;
    if l1 <= 0.0 || l2 <= 0.0 {
        return Err(ModelError::InvalidGeometry { l1, l2 });
    }

    let jitter_scale = division.pole_jitter * capsule.length_initial;
    let pole_jitter = |rng: &mut R| {
        Vec3::new(
            jitter_scale * (rng.gen::<f32>() - 0.5),
            jitter_scale * (rng.gen::<f32>() - 0.5),
            jitter_scale * (rng.gen::<f32>() - 0.5),
        )
    };

    // Mother's new far pole, at distance L1 from x1 along the axis;
    // daughter's near pole, at distance L2 back from x2
    let x2_new = capsule.x1 + u * (l1 / l_actual) + pole_jitter(rng);
    let x1_child = capsule.x2 - u * (l2 / l_actual) + pole_jitter(rng);

    // Anti-correlated partition of the GRN state
    let mut mother_state = parent.state().to_vec();
    let mut child_state = parent.state().to_vec();
    for i in 0..mother_state.len() {
        let noise: f64 = rng.sample(StandardNormal);
        let pert = division.state_perturbation * noise * mother_state[i];
        mother_state[i] += pert;
        child_state[i] -= pert;
    }

    // Daughter spans (x1_child, old x2) and shares the parent's field
    // handles and parameters
    let daughter_capsule = Capsule {
        x1: x1_child,
        x2: capsule.x2,
        radius: capsule.radius,
        length: l2,
        length_initial: capsule.length_initial,
        length_max: capsule.length_max,
    };
    let mut daughter = FlipFlopBacterium::new(
        daughter_capsule,
        parent.fields().clone(),
        parent.params().clone(),
    );
    daughter.install_state(child_state)?;

    // The mother keeps its pole x1, gets the new shared pole, and a fresh
    // GRN instance; the inherited perturbed state is what persists
    parent.reset_grn();
    parent.install_state(mother_state)?;
    {
        let geometry = parent.capsule_mut();
        geometry.x2 = x2_new;
        geometry.length = l1;
    }

    log::debug!(
        "cell divided: L = {:.3} -> L1 = {:.3}, L2 = {:.3}",
        l_actual,
        l1,
        l2
    );

    Ok(DivisionOutcome {
        mother: parent,
        daughter,
    })
}
