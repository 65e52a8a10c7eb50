//! Step observer trait for monitoring the per-frame pipeline.

/// Hooks called by [`crate::ParticleWorld::run_physics_with`] as each stage of
/// a frame completes. All methods default to no-ops.
pub trait StepObserver {
    /// Called after every force registration has been applied.
    fn on_forces_applied(&mut self) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called with the number of contacts written into the buffer.
    fn on_contacts_generated(&mut self, _count: usize) {}

    /// Called with the number of resolver iterations spent. Not called on
    /// frames without contacts.
    fn on_contacts_resolved(&mut self, _iterations_used: usize) {}

    /// Called when the frame is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
