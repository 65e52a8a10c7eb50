//! Configuration for a particle world.

/// Sizing of the per-frame contact buffer and the resolver budget.
///
/// # Builder Pattern
/// ```
/// use ballast::config::WorldConfig;
///
/// let config = WorldConfig::new()
///     .with_max_contacts(64)
///     .with_iterations(16);
/// assert_eq!(config.max_contacts, 64);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Capacity of the contact buffer. Contacts past this are dropped for the
    /// frame. Default: 256.
    pub max_contacts: usize,
    /// Resolver iterations per frame. 0 means twice the number of contacts
    /// generated that frame. Default: 0.
    pub iterations: usize,
}

impl WorldConfig {
    pub fn new() -> Self {
        WorldConfig {
            max_contacts: 256,
            iterations: 0,
        }
    }

    pub fn with_max_contacts(mut self, max_contacts: usize) -> Self {
        self.max_contacts = max_contacts;
        self
    }

    /// Pin the resolver budget. Passing 0 restores the automatic budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Whether the resolver budget is derived from the contact count.
    pub fn calculates_iterations(&self) -> bool {
        self.iterations == 0
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}
