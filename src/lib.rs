//! Particle physics with impulse-based contact resolution for games.
//!
//! `ballast` moves point masses under accumulated forces and keeps them
//! consistent with cables, rods and the ground through an iterative impulse
//! solver. The host game loop calls [`ParticleWorld::run_physics`] once per
//! frame.
//!
//! # Features
//!
//! - **Particles**: Semi-implicit Euler integration with frame-rate independent damping
//! - **Force generators**: Gravity, springs, anchored springs, bungees, drag
//! - **Contacts**: Restitution, resting-contact bias removal, positional correction
//! - **Resolver**: Greedy worst-first iteration with a fixed or automatic budget
//! - **Links**: Cables and rods between particles or to fixed anchors, ground plane
//! - **Observable**: Monitor frames via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use ballast::{GroundContacts, Gravity, Particle, ParticleWorld, Vec2};
//!
//! let mut world: ParticleWorld<Vec2<f64>> = ParticleWorld::new(16, 0);
//! let ball = world.add_particle(Particle::new(Vec2::new(0.0, 1.0), 1.0).unwrap());
//! let gravity = world.force_registry_mut().register(Gravity::new(Vec2::new(0.0, -9.81)));
//! world.add_force(ball, gravity).unwrap();
//! world.add_contact_generator(GroundContacts::new());
//!
//! for _ in 0..120 {
//!     world.run_physics(1.0 / 60.0).unwrap();
//! }
//! assert!(world.particle(ball).position().y >= 0.0);
//! ```
//!
//! Contacts only remove the bounce that comes from a particle's own
//! acceleration, not from accumulated forces. For particles that rest on
//! something, give the constant field to [`Particle::with_acceleration`]
//! instead of a [`Gravity`] generator:
//!
//! ```
//! use ballast::{GroundContacts, Particle, ParticleWorld, Vec2};
//!
//! let mut world: ParticleWorld<Vec2<f64>> = ParticleWorld::new(16, 0);
//! let crate_box = world.add_particle(
//!     Particle::new(Vec2::new(0.0, 0.5), 2.0)
//!         .unwrap()
//!         .with_acceleration(Vec2::new(0.0, -9.81)),
//! );
//! world.add_contact_generator(GroundContacts::new());
//!
//! for _ in 0..240 {
//!     world.run_physics(1.0 / 60.0).unwrap();
//! }
//! assert!(world.particle(crate_box).position().y >= 0.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod force;
pub mod contact;
pub mod resolver;
pub mod generator;
pub mod links;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::Particle;
pub use force::{
    AnchoredBungee, AnchoredSpring, Bungee, Drag, ForceGenerator, ForceRegistration,
    ForceRegistry, GeneratorId, Gravity, Spring,
};
pub use contact::Contact;
pub use resolver::ContactResolver;
pub use generator::{ContactGenerator, GroundContacts};
pub use links::{CableConstraint, CableLink, RodConstraint, RodLink};
pub use world::ParticleWorld;
pub use observer::{StepObserver, NoOpStepObserver};
pub use config::WorldConfig;
pub use error::{PhysicsError, PhysicsResult};
