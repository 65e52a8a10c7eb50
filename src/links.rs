//! Cables and rods, between two particles or from a particle to an anchor.
//!
//! Each of these writes at most one contact per frame: nothing while the
//! link is satisfied, one contact while it is violated.

use crate::contact::Contact;
use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::generator::ContactGenerator;
use crate::particle::Particle;
use crate::vec::Vec;

fn check_length<F: Float>(length: F) -> PhysicsResult<()> {
    if length < F::zero() || !length.is_finite() {
        return Err(PhysicsError::InvalidLength);
    }
    Ok(())
}

/// Write the rod contact for a rod of `length` whose ends are `current`
/// apart. `toward_other` points from body `a` to the other end.
fn rod_contact<V: Vec>(
    contact: &mut Contact<V>,
    a: usize,
    b: Option<usize>,
    toward_other: V,
    current: V::Scalar,
    length: V::Scalar,
) {
    let normal = toward_other.normalize();
    let (normal, penetration) = if current > length {
        (normal, current - length)
    } else {
        (-normal, length - current)
    };
    *contact = Contact::new(a, b, normal, penetration, V::Scalar::zero());
}

/// Inextensible but slack cable between two particles.
#[derive(Clone, Debug)]
pub struct CableLink<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub max_length: V::Scalar,
    pub restitution: V::Scalar,
}

impl<V: Vec> CableLink<V> {
    pub fn new(a: usize, b: usize, max_length: V::Scalar, restitution: V::Scalar) -> Self {
        CableLink { a, b, max_length, restitution }
    }

    pub fn try_new(a: usize, b: usize, max_length: V::Scalar, restitution: V::Scalar) -> PhysicsResult<Self> {
        check_length(max_length)?;
        Ok(Self::new(a, b, max_length, restitution))
    }

    pub fn current_length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.a].position().distance(particles[self.b].position())
    }
}

impl<V: Vec> ContactGenerator<V> for CableLink<V> {
    fn add_contact(&self, particles: &[Particle<V>], contacts: &mut [Contact<V>]) -> usize {
        let Some(contact) = contacts.first_mut() else { return 0 };
        let length = self.current_length(particles);
        if length < self.max_length {
            return 0;
        }

        let normal = (particles[self.b].position() - particles[self.a].position()).normalize();
        *contact = Contact::new(
            self.a,
            Some(self.b),
            normal,
            length - self.max_length,
            self.restitution,
        );
        1
    }
}

/// Rigid rod between two particles. Any change of length is a violation.
#[derive(Clone, Debug)]
pub struct RodLink<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub length: V::Scalar,
}

impl<V: Vec> RodLink<V> {
    pub fn new(a: usize, b: usize, length: V::Scalar) -> Self {
        RodLink { a, b, length }
    }

    pub fn try_new(a: usize, b: usize, length: V::Scalar) -> PhysicsResult<Self> {
        check_length(length)?;
        Ok(Self::new(a, b, length))
    }

    /// Rod whose length is the current distance between `a` and `b`.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<V>]) -> Self {
        let length = particles[a].position().distance(particles[b].position());
        RodLink { a, b, length }
    }

    pub fn current_length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.a].position().distance(particles[self.b].position())
    }
}

impl<V: Vec> ContactGenerator<V> for RodLink<V> {
    fn add_contact(&self, particles: &[Particle<V>], contacts: &mut [Contact<V>]) -> usize {
        let Some(contact) = contacts.first_mut() else { return 0 };
        let current = self.current_length(particles);
        if current == self.length {
            return 0;
        }

        let toward_other = particles[self.b].position() - particles[self.a].position();
        rod_contact(contact, self.a, Some(self.b), toward_other, current, self.length);
        1
    }
}

/// Cable from a particle to a fixed anchor point.
#[derive(Clone, Debug)]
pub struct CableConstraint<V: Vec> {
    pub particle: usize,
    pub anchor: V,
    pub max_length: V::Scalar,
    pub restitution: V::Scalar,
}

impl<V: Vec> CableConstraint<V> {
    pub fn new(particle: usize, anchor: V, max_length: V::Scalar, restitution: V::Scalar) -> Self {
        CableConstraint { particle, anchor, max_length, restitution }
    }

    pub fn try_new(particle: usize, anchor: V, max_length: V::Scalar, restitution: V::Scalar) -> PhysicsResult<Self> {
        check_length(max_length)?;
        Ok(Self::new(particle, anchor, max_length, restitution))
    }

    pub fn current_length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.particle].position().distance(self.anchor)
    }
}

impl<V: Vec> ContactGenerator<V> for CableConstraint<V> {
    fn add_contact(&self, particles: &[Particle<V>], contacts: &mut [Contact<V>]) -> usize {
        let Some(contact) = contacts.first_mut() else { return 0 };
        let length = self.current_length(particles);
        if length < self.max_length {
            return 0;
        }

        let normal = (self.anchor - particles[self.particle].position()).normalize();
        *contact = Contact::new(
            self.particle,
            None,
            normal,
            length - self.max_length,
            self.restitution,
        );
        1
    }
}

/// Rigid rod from a particle to a fixed anchor point.
#[derive(Clone, Debug)]
pub struct RodConstraint<V: Vec> {
    pub particle: usize,
    pub anchor: V,
    pub length: V::Scalar,
}

impl<V: Vec> RodConstraint<V> {
    pub fn new(particle: usize, anchor: V, length: V::Scalar) -> Self {
        RodConstraint { particle, anchor, length }
    }

    pub fn try_new(particle: usize, anchor: V, length: V::Scalar) -> PhysicsResult<Self> {
        check_length(length)?;
        Ok(Self::new(particle, anchor, length))
    }

    pub fn current_length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.particle].position().distance(self.anchor)
    }
}

impl<V: Vec> ContactGenerator<V> for RodConstraint<V> {
    fn add_contact(&self, particles: &[Particle<V>], contacts: &mut [Contact<V>]) -> usize {
        let Some(contact) = contacts.first_mut() else { return 0 };
        let current = self.current_length(particles);
        if current == self.length {
            return 0;
        }

        let toward_anchor = self.anchor - particles[self.particle].position();
        rod_contact(contact, self.particle, None, toward_anchor, current, self.length);
        1
    }
}
