//! Greedy iterative contact resolver.

use crate::contact::Contact;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;
use tracing::{debug, trace};

/// Resolves a batch of contacts, worst first.
///
/// Each iteration picks the contact with the lowest separating velocity among
/// those still closing or penetrating, resolves it, and then re-evaluates
/// everything, because resolving one contact changes the others that share a
/// particle. Contacts where neither body can move are skipped.
#[derive(Clone, Debug, Default)]
pub struct ContactResolver {
    iterations: usize,
    iterations_used: usize,
}

impl ContactResolver {
    pub fn new(iterations: usize) -> Self {
        ContactResolver { iterations, iterations_used: 0 }
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Iterations spent by the last call to [`ContactResolver::resolve_contacts`].
    pub fn iterations_used(&self) -> usize {
        self.iterations_used
    }

    /// Resolve `contacts` in place. Penetration depths of contacts that share
    /// a moved particle are updated as positions are corrected.
    pub fn resolve_contacts<V: Vec>(
        &mut self,
        contacts: &mut [Contact<V>],
        particles: &mut [Particle<V>],
        dt: V::Scalar,
    ) {
        self.iterations_used = 0;

        while self.iterations_used < self.iterations {
            let Some(worst) = Self::find_worst(contacts, particles) else {
                break;
            };

            let movement = contacts[worst].resolve(particles, dt);
            trace!(
                contact = worst,
                iteration = self.iterations_used,
                "resolved contact"
            );

            let (a, b) = (contacts[worst].a, contacts[worst].b);
            for contact in contacts.iter_mut() {
                Self::adjust_penetration(contact, a, b, &movement);
            }
            contacts[worst].penetration = V::Scalar::zero();

            self.iterations_used += 1;
        }

        if self.iterations_used == self.iterations
            && Self::find_worst(contacts, particles).is_some()
        {
            debug!(
                iterations = self.iterations,
                "contact resolver ran out of iterations"
            );
        }
    }

    fn find_worst<V: Vec>(contacts: &[Contact<V>], particles: &[Particle<V>]) -> Option<usize> {
        let zero = V::Scalar::zero();
        let mut worst = None;
        let mut lowest = V::Scalar::max_value();

        for (i, contact) in contacts.iter().enumerate() {
            // Nothing can move, so resolving it would only burn iterations.
            if contact.total_inverse_mass(particles) <= zero {
                continue;
            }
            let separating = contact.separating_velocity(particles);
            if separating < lowest && (separating < zero || contact.penetration > zero) {
                lowest = separating;
                worst = Some(i);
            }
        }

        worst
    }

    /// Account for the movement of the particles `a` and `b` in `contact`'s
    /// penetration. Moving body `a` along the normal reduces penetration,
    /// moving body `b` along it increases penetration.
    fn adjust_penetration<V: Vec>(contact: &mut Contact<V>, a: usize, b: Option<usize>, movement: &[V; 2]) {
        let moved = [Some(a), b];
        for (mover, delta) in moved.iter().zip(movement.iter()) {
            let Some(mover) = *mover else { continue };
            if contact.a == mover {
                contact.penetration = contact.penetration - delta.dot(contact.normal);
            }
            if contact.b == Some(mover) {
                contact.penetration = contact.penetration + delta.dot(contact.normal);
            }
        }
    }
}
