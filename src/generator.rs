//! Contact generators: anything that inspects particle state and reports
//! violations as contacts.

use crate::contact::Contact;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;

/// Inspects the particles and writes contacts into `contacts`.
///
/// `contacts` holds only the slots still free this frame, so its length is
/// the limit. Returns how many leading slots were written; the rest are left
/// untouched.
pub trait ContactGenerator<V: Vec> {
    fn add_contact(&self, particles: &[Particle<V>], contacts: &mut [Contact<V>]) -> usize;
}

/// Collides every particle against the plane `height == 0`.
#[derive(Clone, Debug)]
pub struct GroundContacts<V: Vec> {
    pub restitution: V::Scalar,
}

impl<V: Vec> GroundContacts<V> {
    /// Ground with a small bounce (restitution 0.2).
    pub fn new() -> Self {
        GroundContacts { restitution: V::Scalar::from_f32(0.2) }
    }

    pub fn with_restitution(mut self, restitution: V::Scalar) -> Self {
        self.restitution = restitution;
        self
    }
}

impl<V: Vec> Default for GroundContacts<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vec> ContactGenerator<V> for GroundContacts<V> {
    fn add_contact(&self, particles: &[Particle<V>], contacts: &mut [Contact<V>]) -> usize {
        let mut count = 0;
        for (index, particle) in particles.iter().enumerate() {
            if count >= contacts.len() {
                break;
            }
            let height = particle.position().height();
            if height < V::Scalar::zero() {
                contacts[count] = Contact::new(index, None, V::up(), -height, self.restitution);
                count += 1;
            }
        }
        count
    }
}
