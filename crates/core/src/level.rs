//! Level composition domain split into coherent submodules.

pub mod progression;

mod composer;
mod endpoints;
mod model;

pub use composer::{LevelComposer, RetryPolicy};
pub use endpoints::{EndpointPair, farthest_endpoints, near_but_far_endpoints};
pub use model::{GeneratedLevel, LevelMode};

pub fn generate_level(
    run_seed: u64,
    width: usize,
    height: usize,
    mode: LevelMode,
) -> GeneratedLevel {
    LevelComposer::new(run_seed, width, height).generate(mode)
}
