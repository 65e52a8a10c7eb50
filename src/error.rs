//! Error types for physics operations.
//!
//! Only input validation at the API boundary produces errors. Degenerate
//! physical configurations, a full contact buffer and an exhausted resolver
//! budget are normal outcomes, not errors.

use thiserror::Error;

/// Errors that can occur when configuring or stepping the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Time step must be positive and finite.
    #[error("time step must be positive and finite")]
    InvalidTimeStep,
    /// Mass must be non-zero, positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Damping must be in (0, 1].
    #[error("damping must be in (0, 1]")]
    InvalidDamping,
    /// Link or constraint length must be non-negative and finite.
    #[error("length must be non-negative and finite")]
    InvalidLength,
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
}

/// Result type for physics operations.
pub type PhysicsResult<T> = core::result::Result<T, PhysicsError>;
