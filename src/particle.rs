//! Point masses with semi-implicit Euler integration.

use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::vec::Vec;

/// A point mass with a per-frame force accumulator.
///
/// Infinite mass is stored as `inverse_mass == 0`; such a particle is never
/// moved by forces, impulses or positional correction.
#[derive(Clone, Debug)]
pub struct Particle<V: Vec> {
    inverse_mass: V::Scalar,
    damping: V::Scalar,
    position: V,
    velocity: V,
    acceleration: V,
    force_accum: V,
}

impl<V: Vec> Particle<V> {
    /// Create a finite-mass particle at rest with a damping of 0.99.
    pub fn new(position: V, mass: V::Scalar) -> PhysicsResult<Self> {
        let mut particle = Self::immovable(position);
        particle.set_mass(mass)?;
        Ok(particle)
    }

    /// Create a particle with infinite mass (scenery, anchors, pinned ends).
    pub fn immovable(position: V) -> Self {
        Particle {
            inverse_mass: V::Scalar::zero(),
            damping: V::Scalar::from_f32(0.99),
            position,
            velocity: V::zero(),
            acceleration: V::zero(),
            force_accum: V::zero(),
        }
    }

    pub fn with_velocity(mut self, velocity: V) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: V) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_damping(mut self, damping: V::Scalar) -> PhysicsResult<Self> {
        self.set_damping(damping)?;
        Ok(self)
    }

    /// Advance the particle by `dt`.
    ///
    /// Position moves with the velocity from the start of the step; the
    /// acceleration term is left out of the position update. Velocity then
    /// picks up `acceleration + force_accum * inverse_mass` and is damped by
    /// `damping^dt`. The force accumulator is always cleared.
    pub fn integrate(&mut self, dt: V::Scalar) -> PhysicsResult<()> {
        if self.inverse_mass <= V::Scalar::zero() {
            self.clear_accumulator();
            return Ok(());
        }
        if !(dt > V::Scalar::zero()) || !dt.is_finite() {
            return Err(PhysicsError::InvalidTimeStep);
        }

        self.position = self.position + self.velocity.scale(dt);

        let resulting_acc = self.acceleration + self.force_accum.scale(self.inverse_mass);
        self.velocity = self.velocity + resulting_acc.scale(dt);
        self.velocity = self.velocity.scale(self.damping.powf(dt));

        self.clear_accumulator();
        Ok(())
    }

    /// Set a finite mass. Zero, negative and non-finite values are rejected.
    pub fn set_mass(&mut self, mass: V::Scalar) -> PhysicsResult<()> {
        if !(mass > V::Scalar::zero()) || !mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        self.inverse_mass = V::Scalar::one() / mass;
        Ok(())
    }

    /// Mass of the particle, or [`Float::max_value`] for infinite mass.
    pub fn mass(&self) -> V::Scalar {
        if self.inverse_mass == V::Scalar::zero() {
            V::Scalar::max_value()
        } else {
            V::Scalar::one() / self.inverse_mass
        }
    }

    /// Set the inverse mass directly. Zero makes the particle immovable.
    pub fn set_inverse_mass(&mut self, inverse_mass: V::Scalar) -> PhysicsResult<()> {
        if inverse_mass < V::Scalar::zero() || !inverse_mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        self.inverse_mass = inverse_mass;
        Ok(())
    }

    pub fn inverse_mass(&self) -> V::Scalar {
        self.inverse_mass
    }

    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > V::Scalar::zero()
    }

    /// Fraction of velocity kept per second of simulated time.
    pub fn set_damping(&mut self, damping: V::Scalar) -> PhysicsResult<()> {
        if !(damping > V::Scalar::zero()) || damping > V::Scalar::one() {
            return Err(PhysicsError::InvalidDamping);
        }
        self.damping = damping;
        Ok(())
    }

    pub fn damping(&self) -> V::Scalar {
        self.damping
    }

    pub fn position(&self) -> V {
        self.position
    }

    pub fn set_position(&mut self, position: V) {
        self.position = position;
    }

    pub fn velocity(&self) -> V {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: V) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> V {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: V) {
        self.acceleration = acceleration;
    }

    /// Force accumulated since the last integration or clear.
    pub fn accumulated_force(&self) -> V {
        self.force_accum
    }

    pub fn add_force(&mut self, force: V) {
        self.force_accum = self.force_accum + force;
    }

    pub fn clear_accumulator(&mut self) {
        self.force_accum = V::zero();
    }

    /// Linear momentum. Zero for immovable particles.
    pub fn momentum(&self) -> V {
        if self.has_finite_mass() {
            self.velocity.scale(self.mass())
        } else {
            V::zero()
        }
    }

    /// Kinetic energy. Zero for immovable particles.
    pub fn kinetic_energy(&self) -> V::Scalar {
        if self.has_finite_mass() {
            V::Scalar::from_f32(0.5) * self.mass() * self.velocity.length_sq()
        } else {
            V::Scalar::zero()
        }
    }
}
