//! The particle world: owns every particle and runs the per-frame pipeline.

use crate::config::WorldConfig;
use crate::contact::Contact;
use crate::error::{PhysicsError, PhysicsResult};
use crate::float::Float;
use crate::force::{ForceRegistry, GeneratorId};
use crate::generator::ContactGenerator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::resolver::ContactResolver;
use crate::vec::Vec;
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec as AllocVec;
use tracing::debug;

/// A set of particles together with the forces and contact generators that
/// act on them.
///
/// Particles are addressed by the index returned from
/// [`ParticleWorld::add_particle`]. Links, contacts and force registrations
/// store these indices, so particles should only be removed between frames
/// and with care for anything still referring to them.
///
/// A frame is `start_frame → forces → integrate → generate contacts →
/// resolve`, all done by [`ParticleWorld::run_physics`].
pub struct ParticleWorld<V: Vec> {
    particles: AllocVec<Particle<V>>,
    contact_generators: AllocVec<Box<dyn ContactGenerator<V>>>,
    registry: ForceRegistry<V>,
    resolver: ContactResolver,
    contacts: AllocVec<Contact<V>>,
    used_contacts: usize,
    calculate_iterations: bool,
}

impl<V: Vec> ParticleWorld<V> {
    /// Create a world holding up to `max_contacts` contacts per frame.
    /// `iterations == 0` gives the resolver twice the number of contacts
    /// found each frame.
    pub fn new(max_contacts: usize, iterations: usize) -> Self {
        Self::with_config(
            WorldConfig::new()
                .with_max_contacts(max_contacts)
                .with_iterations(iterations),
        )
    }

    pub fn with_config(config: WorldConfig) -> Self {
        ParticleWorld {
            particles: AllocVec::new(),
            contact_generators: AllocVec::new(),
            registry: ForceRegistry::new(),
            resolver: ContactResolver::new(config.iterations),
            contacts: vec![Contact::default(); config.max_contacts],
            used_contacts: 0,
            calculate_iterations: config.calculates_iterations(),
        }
    }

    pub fn add_particle(&mut self, particle: Particle<V>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Generators are consulted every frame in the order they were added.
    ///
    /// Particle indices held by the generator are not checked here. An index
    /// past the end of the particle list panics in the next
    /// [`ParticleWorld::generate_contacts`].
    pub fn add_contact_generator<G: ContactGenerator<V> + 'static>(&mut self, generator: G) {
        self.contact_generators.push(Box::new(generator));
    }

    /// Drive `particle` with a registered force generator, checking the index.
    pub fn add_force(&mut self, particle: usize, generator: GeneratorId) -> PhysicsResult<()> {
        self.check_index(particle)?;
        self.registry.add(particle, generator);
        Ok(())
    }

    fn check_index(&self, index: usize) -> PhysicsResult<()> {
        if index >= self.particles.len() {
            return Err(PhysicsError::ParticleOutOfBounds {
                index,
                count: self.particles.len(),
            });
        }
        Ok(())
    }

    /// Clear every particle's force accumulator.
    pub fn start_frame(&mut self) {
        for p in self.particles.iter_mut() {
            p.clear_accumulator();
        }
    }

    /// Ask each contact generator, in the order they were added, to fill the
    /// free part of the contact buffer. Once the buffer is full the remaining
    /// generators are skipped for this frame. Returns the number of contacts
    /// written.
    pub fn generate_contacts(&mut self) -> usize {
        let capacity = self.contacts.len();
        let mut used = 0;

        for (i, generator) in self.contact_generators.iter().enumerate() {
            if used >= capacity {
                debug!(
                    capacity,
                    skipped = self.contact_generators.len() - i,
                    "contact buffer full, skipping remaining generators"
                );
                break;
            }
            let written = generator.add_contact(&self.particles, &mut self.contacts[used..]);
            used += written.min(capacity - used);
        }

        self.used_contacts = used;
        used
    }

    /// Advance every particle by `dt`.
    pub fn integrate(&mut self, dt: V::Scalar) -> PhysicsResult<()> {
        check_time_step(dt)?;
        for p in self.particles.iter_mut() {
            p.integrate(dt)?;
        }
        Ok(())
    }

    /// Run one full frame.
    pub fn run_physics(&mut self, dt: V::Scalar) -> PhysicsResult<()> {
        self.run_physics_with(dt, &mut NoOpStepObserver)
    }

    /// Run one full frame, reporting each stage to `observer`.
    ///
    /// Forces added to particles before this call are discarded by the
    /// accumulator reset at the start of the frame; use force generators for
    /// anything that should act during the frame.
    pub fn run_physics_with<O: StepObserver>(
        &mut self,
        dt: V::Scalar,
        observer: &mut O,
    ) -> PhysicsResult<()> {
        check_time_step(dt)?;

        self.start_frame();

        self.registry.update_forces(&mut self.particles, dt);
        observer.on_forces_applied();

        self.integrate(dt)?;
        observer.on_integrate();

        let used = self.generate_contacts();
        observer.on_contacts_generated(used);

        if used > 0 {
            if self.calculate_iterations {
                self.resolver.set_iterations(used * 2);
            }
            self.resolver
                .resolve_contacts(&mut self.contacts[..used], &mut self.particles, dt);
            observer.on_contacts_resolved(self.resolver.iterations_used());
        }

        observer.on_step_complete();
        Ok(())
    }

    pub fn particles(&self) -> &[Particle<V>] {
        &self.particles
    }

    /// The particle collection itself, so the host can add or remove
    /// particles between frames.
    pub fn particles_mut(&mut self) -> &mut AllocVec<Particle<V>> {
        &mut self.particles
    }

    pub fn particle(&self, index: usize) -> &Particle<V> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<V> {
        &mut self.particles[index]
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn contact_generators(&self) -> &[Box<dyn ContactGenerator<V>>] {
        &self.contact_generators
    }

    pub fn contact_generators_mut(&mut self) -> &mut AllocVec<Box<dyn ContactGenerator<V>>> {
        &mut self.contact_generators
    }

    pub fn force_registry(&self) -> &ForceRegistry<V> {
        &self.registry
    }

    pub fn force_registry_mut(&mut self) -> &mut ForceRegistry<V> {
        &mut self.registry
    }

    /// Contacts written by the last [`ParticleWorld::generate_contacts`].
    /// After a frame they hold the penetration left after resolution.
    pub fn contacts(&self) -> &[Contact<V>] {
        &self.contacts[..self.used_contacts]
    }

    pub fn resolver(&self) -> &ContactResolver {
        &self.resolver
    }

    pub fn max_contacts(&self) -> usize {
        self.contacts.len()
    }
}

fn check_time_step<F: Float>(dt: F) -> PhysicsResult<()> {
    if !(dt > F::zero()) || !dt.is_finite() {
        return Err(PhysicsError::InvalidTimeStep);
    }
    Ok(())
}
