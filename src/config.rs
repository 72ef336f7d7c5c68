use crate::binding::BindingStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub binding: BindingStrategy,
    /// Score candidate literals on the rayon thread pool.
    pub parallel: bool,
    pub max_body_literals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { binding: BindingStrategy::Greedy, parallel: false, max_body_literals: usize::MAX }
    }
}
