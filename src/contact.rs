//! Contacts between particles and their impulse-based resolution.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;

/// Two particles (or one particle and immovable scenery) that touch or
/// violate a constraint.
///
/// Resolving a contact moves body `a` along `+normal` and body `b` along
/// `-normal`. Generators are responsible for choosing the normal with that
/// convention.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact<V: Vec> {
    pub a: usize,
    /// `None` means the other side is immovable scenery.
    pub b: Option<usize>,
    /// Unit contact normal.
    pub normal: V,
    /// Overlap along the normal still to be removed.
    pub penetration: V::Scalar,
    /// 1 is perfectly elastic, 0 is perfectly inelastic.
    pub restitution: V::Scalar,
}

impl<V: Vec> Default for Contact<V> {
    fn default() -> Self {
        Contact {
            a: 0,
            b: None,
            normal: V::zero(),
            penetration: V::Scalar::zero(),
            restitution: V::Scalar::zero(),
        }
    }
}

impl<V: Vec> Contact<V> {
    pub fn new(a: usize, b: Option<usize>, normal: V, penetration: V::Scalar, restitution: V::Scalar) -> Self {
        Contact { a, b, normal, penetration, restitution }
    }

    /// Resolve velocity first, then interpenetration. Returns how far each
    /// body was moved by the positional correction.
    pub fn resolve(&self, particles: &mut [Particle<V>], dt: V::Scalar) -> [V; 2] {
        self.resolve_velocity(particles, dt);
        self.resolve_interpenetration(particles)
    }

    /// Relative velocity of `a` with respect to `b` along the normal.
    /// Positive means the bodies are moving apart.
    pub fn separating_velocity(&self, particles: &[Particle<V>]) -> V::Scalar {
        let mut relative = particles[self.a].velocity();
        if let Some(b) = self.b {
            relative = relative - particles[b].velocity();
        }
        relative.dot(self.normal)
    }

    /// Sum of the inverse masses of both bodies. Zero when neither can move.
    pub fn total_inverse_mass(&self, particles: &[Particle<V>]) -> V::Scalar {
        let mut total = particles[self.a].inverse_mass();
        if let Some(b) = self.b {
            total = total + particles[b].inverse_mass();
        }
        total
    }

    /// Apply the impulse that turns the closing velocity into the
    /// restitution-scaled separating velocity.
    ///
    /// The bounce caused by one frame of acceleration is removed using
    /// [`Particle::acceleration`] only. Forces from generators are cleared by
    /// integration, so a constant field such as gravity has to be set with
    /// [`Particle::with_acceleration`] for resting contacts to settle.
    pub fn resolve_velocity(&self, particles: &mut [Particle<V>], dt: V::Scalar) {
        let zero = V::Scalar::zero();
        let separating = self.separating_velocity(particles);
        if separating > zero {
            return;
        }

        let mut new_separating = -separating * self.restitution;

        // Velocity gained from this frame's acceleration alone must not
        // bounce, or resting contacts jitter.
        let mut acc_caused = particles[self.a].acceleration();
        if let Some(b) = self.b {
            acc_caused = acc_caused - particles[b].acceleration();
        }
        let acc_caused_separating = acc_caused.dot(self.normal) * dt;
        if acc_caused_separating < zero {
            new_separating = new_separating + self.restitution * acc_caused_separating;
            new_separating = new_separating.max(zero);
        }

        let delta_velocity = new_separating - separating;

        let total_inverse_mass = self.total_inverse_mass(particles);
        if total_inverse_mass <= zero {
            return;
        }

        let impulse = delta_velocity / total_inverse_mass;
        let impulse_per_imass = self.normal.scale(impulse);

        let pa = &mut particles[self.a];
        let va = pa.velocity() + impulse_per_imass.scale(pa.inverse_mass());
        pa.set_velocity(va);

        if let Some(b) = self.b {
            let pb = &mut particles[b];
            let vb = pb.velocity() + impulse_per_imass.scale(-pb.inverse_mass());
            pb.set_velocity(vb);
        }
    }

    /// Push the bodies apart along the normal in proportion to their inverse
    /// mass. Only positions change.
    pub fn resolve_interpenetration(&self, particles: &mut [Particle<V>]) -> [V; 2] {
        let zero = V::Scalar::zero();
        let mut movement = [V::zero(); 2];
        if self.penetration <= zero {
            return movement;
        }

        let total_inverse_mass = self.total_inverse_mass(particles);
        if total_inverse_mass <= zero {
            return movement;
        }

        let move_per_imass = self.normal.scale(self.penetration / total_inverse_mass);

        let pa = &mut particles[self.a];
        movement[0] = move_per_imass.scale(pa.inverse_mass());
        pa.set_position(pa.position() + movement[0]);

        if let Some(b) = self.b {
            let pb = &mut particles[b];
            movement[1] = move_per_imass.scale(-pb.inverse_mass());
            pb.set_position(pb.position() + movement[1]);
        }

        movement
    }
}
