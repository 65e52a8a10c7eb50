//! Force generators and the registry that applies them each frame.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Something that pushes a force into a particle's accumulator.
///
/// Generators hold no per-particle state, so one instance can drive any
/// number of particles. They must only call [`Particle::add_force`] and never
/// touch position or velocity directly.
pub trait ForceGenerator<V: Vec> {
    /// Accumulate this generator's force on `particles[particle]`.
    ///
    /// Panics if `particle` (or any particle the generator refers to) is out
    /// of bounds.
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], dt: V::Scalar);
}

/// Constant acceleration field, scaled by each particle's mass.
#[derive(Clone, Debug)]
pub struct Gravity<V: Vec> {
    pub gravity: V,
}

impl<V: Vec> Gravity<V> {
    pub fn new(gravity: V) -> Self {
        Gravity { gravity }
    }
}

impl<V: Vec> ForceGenerator<V> for Gravity<V> {
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], _dt: V::Scalar) {
        let p = &mut particles[particle];
        if !p.has_finite_mass() {
            return;
        }
        let force = self.gravity.scale(p.mass());
        p.add_force(force);
    }
}

/// Hooke's law between `offset = position - other_end` and `rest_length`.
/// Pulls when stretched, pushes when compressed.
fn spring_force<V: Vec>(offset: V, spring_constant: V::Scalar, rest_length: V::Scalar) -> V {
    let length = offset.length();
    if length.is_near_zero(V::Scalar::from_f32(1e-10)) {
        return V::zero();
    }
    let magnitude = spring_constant * (length - rest_length);
    offset.normalize().scale(-magnitude)
}

/// Spring between the driven particle and another particle.
#[derive(Clone, Debug)]
pub struct Spring<V: Vec> {
    pub other: usize,
    pub spring_constant: V::Scalar,
    pub rest_length: V::Scalar,
}

impl<V: Vec> Spring<V> {
    pub fn new(other: usize, spring_constant: V::Scalar, rest_length: V::Scalar) -> Self {
        Spring { other, spring_constant, rest_length }
    }
}

impl<V: Vec> ForceGenerator<V> for Spring<V> {
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], _dt: V::Scalar) {
        let offset = particles[particle].position() - particles[self.other].position();
        let force = spring_force(offset, self.spring_constant, self.rest_length);
        particles[particle].add_force(force);
    }
}

/// Spring between the driven particle and a fixed point in space.
#[derive(Clone, Debug)]
pub struct AnchoredSpring<V: Vec> {
    pub anchor: V,
    pub spring_constant: V::Scalar,
    pub rest_length: V::Scalar,
}

impl<V: Vec> AnchoredSpring<V> {
    pub fn new(anchor: V, spring_constant: V::Scalar, rest_length: V::Scalar) -> Self {
        AnchoredSpring { anchor, spring_constant, rest_length }
    }

    pub fn set_anchor(&mut self, anchor: V) {
        self.anchor = anchor;
    }
}

impl<V: Vec> ForceGenerator<V> for AnchoredSpring<V> {
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], _dt: V::Scalar) {
        let offset = particles[particle].position() - self.anchor;
        let force = spring_force(offset, self.spring_constant, self.rest_length);
        particles[particle].add_force(force);
    }
}

/// Elastic that only pulls: no force while the ends are within `rest_length`.
#[derive(Clone, Debug)]
pub struct Bungee<V: Vec> {
    pub other: usize,
    pub spring_constant: V::Scalar,
    pub rest_length: V::Scalar,
}

impl<V: Vec> Bungee<V> {
    pub fn new(other: usize, spring_constant: V::Scalar, rest_length: V::Scalar) -> Self {
        Bungee { other, spring_constant, rest_length }
    }
}

impl<V: Vec> ForceGenerator<V> for Bungee<V> {
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], _dt: V::Scalar) {
        let offset = particles[particle].position() - particles[self.other].position();
        if offset.length() <= self.rest_length {
            return;
        }
        let force = spring_force(offset, self.spring_constant, self.rest_length);
        particles[particle].add_force(force);
    }
}

/// Bungee tied to a fixed point in space.
#[derive(Clone, Debug)]
pub struct AnchoredBungee<V: Vec> {
    pub anchor: V,
    pub spring_constant: V::Scalar,
    pub rest_length: V::Scalar,
}

impl<V: Vec> AnchoredBungee<V> {
    pub fn new(anchor: V, spring_constant: V::Scalar, rest_length: V::Scalar) -> Self {
        AnchoredBungee { anchor, spring_constant, rest_length }
    }
}

impl<V: Vec> ForceGenerator<V> for AnchoredBungee<V> {
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], _dt: V::Scalar) {
        let offset = particles[particle].position() - self.anchor;
        if offset.length() <= self.rest_length {
            return;
        }
        let force = spring_force(offset, self.spring_constant, self.rest_length);
        particles[particle].add_force(force);
    }
}

/// Velocity-dependent drag: `-v̂ (k1 |v| + k2 |v|²)`.
#[derive(Clone, Debug)]
pub struct Drag<V: Vec> {
    pub k1: V::Scalar,
    pub k2: V::Scalar,
}

impl<V: Vec> Drag<V> {
    pub fn new(k1: V::Scalar, k2: V::Scalar) -> Self {
        Drag { k1, k2 }
    }
}

impl<V: Vec> ForceGenerator<V> for Drag<V> {
    fn update_force(&self, particle: usize, particles: &mut [Particle<V>], _dt: V::Scalar) {
        let velocity = particles[particle].velocity();
        let speed = velocity.length();
        if speed.is_near_zero(V::Scalar::from_f32(1e-10)) {
            return;
        }
        let magnitude = self.k1 * speed + self.k2 * speed * speed;
        particles[particle].add_force(velocity.normalize().scale(-magnitude));
    }
}

/// Handle to a generator owned by a [`ForceRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratorId(usize);

impl GeneratorId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One particle driven by one generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ForceRegistration {
    pub particle: usize,
    pub generator: GeneratorId,
}

/// Owns force generators and the (particle, generator) pairs they drive.
///
/// Registrations are applied in the order they were added. Duplicates are
/// allowed and apply the force twice.
pub struct ForceRegistry<V: Vec> {
    generators: AllocVec<Box<dyn ForceGenerator<V>>>,
    registrations: AllocVec<ForceRegistration>,
}

impl<V: Vec> ForceRegistry<V> {
    pub fn new() -> Self {
        ForceRegistry {
            generators: AllocVec::new(),
            registrations: AllocVec::new(),
        }
    }

    /// Take ownership of a generator so particles can be attached to it.
    pub fn register<G: ForceGenerator<V> + 'static>(&mut self, generator: G) -> GeneratorId {
        let id = GeneratorId(self.generators.len());
        self.generators.push(Box::new(generator));
        id
    }

    /// Drive `particle` with `generator` from the next update onwards.
    pub fn add(&mut self, particle: usize, generator: GeneratorId) {
        self.registrations.push(ForceRegistration { particle, generator });
    }

    /// Remove every registration of this exact pair. Returns how many were removed.
    pub fn remove(&mut self, particle: usize, generator: GeneratorId) -> usize {
        let before = self.registrations.len();
        self.registrations
            .retain(|r| !(r.particle == particle && r.generator == generator));
        before - self.registrations.len()
    }

    /// Drop all registrations. Registered generators stay available.
    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn generator(&self, id: GeneratorId) -> Option<&dyn ForceGenerator<V>> {
        self.generators.get(id.0).map(|g| &**g)
    }

    pub fn registrations(&self) -> &[ForceRegistration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Apply every registration's generator to its particle.
    pub fn update_forces(&self, particles: &mut [Particle<V>], dt: V::Scalar) {
        for registration in self.registrations.iter() {
            self.generators[registration.generator.0].update_force(
                registration.particle,
                particles,
                dt,
            );
        }
    }
}

impl<V: Vec> Default for ForceRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
