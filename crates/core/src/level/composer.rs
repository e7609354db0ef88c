//! Level orchestration: carve a maze, place endpoints and objectives,
//! validate solvability, retry on a fresh maze, degrade to a safe fallback.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::endpoints::{EndpointPair, farthest_endpoints, near_but_far_endpoints, pick_far_cell};
use super::model::{GeneratedLevel, LevelMode};
use crate::mazegen::{Maze, carve};
use crate::pathfinding::shortest_path;
use crate::seed::derive_attempt_seed;
use crate::types::Pos;

const MAX_COMPOSE_ATTEMPTS: u32 = 250;
const MIN_OBJECTIVE_DISTANCE: u32 = 6;

/// Bounded-retry contract made explicit: how many fresh mazes to try
/// before degrading to the unconstrained fallback level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: MAX_COMPOSE_ATTEMPTS }
    }
}

pub struct LevelComposer {
    run_seed: u64,
    width: usize,
    height: usize,
    policy: RetryPolicy,
}

impl LevelComposer {
    pub fn new(run_seed: u64, width: usize, height: usize) -> Self {
        Self::with_policy(run_seed, width, height, RetryPolicy::default())
    }

    pub fn with_policy(run_seed: u64, width: usize, height: usize, policy: RetryPolicy) -> Self {
        assert!(width >= 1 && height >= 1, "level dimensions must be at least 1x1");
        Self { run_seed, width, height, policy }
    }

    /// Composition never reports failure to its caller: each attempt works
    /// on a freshly carved stream (near/far invariants depend on the whole
    /// topology, so a failed attempt discards the maze, not just the
    /// placement), and an exhausted budget degrades to an unconstrained
    /// far-endpoints level, which is always constructible.
    pub fn generate(&self, mode: LevelMode) -> GeneratedLevel {
        for attempt in 0..self.policy.max_attempts {
            let mut rng = ChaCha8Rng::seed_from_u64(derive_attempt_seed(self.run_seed, attempt));
            if let Some(level) = self.compose_attempt(&mut rng, mode) {
                return level;
            }
        }
        self.fallback_level()
    }

    fn compose_attempt(&self, rng: &mut ChaCha8Rng, mode: LevelMode) -> Option<GeneratedLevel> {
        let maze = carve(rng, self.width, self.height);

        match mode {
            LevelMode::Base => {
                let start = Pos { y: 0, x: 0 };
                let exit = Pos { y: self.height as i32 - 1, x: self.width as i32 - 1 };
                let route = shortest_path(&maze, start, exit)?;
                let pair = EndpointPair { start, exit, opt_len: route.dist };
                Some(assemble(maze, pair, mode, None, Vec::new()))
            }
            LevelMode::FarEndpoints => {
                let pair = farthest_endpoints(&maze, rng);
                Some(assemble(maze, pair, mode, None, Vec::new()))
            }
            LevelMode::NearButFar => {
                let threshold = (self.width * self.height / 2) as u32;
                let pair = near_but_far_endpoints(&maze, rng, threshold);
                Some(assemble(maze, pair, mode, None, Vec::new()))
            }
            LevelMode::Key => {
                let pair = farthest_endpoints(&maze, rng);
                let key_pos =
                    pick_far_cell(&maze, rng, pair.start, objective_distance(pair.opt_len, 35));
                shortest_path(&maze, pair.start, key_pos)?;
                shortest_path(&maze, key_pos, pair.exit)?;
                Some(assemble(maze, pair, mode, Some(key_pos), Vec::new()))
            }
            LevelMode::Sequence => {
                let pair = farthest_endpoints(&maze, rng);
                let threshold = objective_distance(pair.opt_len, 25);
                let first = pick_far_cell(&maze, rng, pair.start, threshold);
                let second = pick_far_cell(&maze, rng, first, threshold);
                shortest_path(&maze, pair.start, first)?;
                shortest_path(&maze, first, second)?;
                shortest_path(&maze, second, pair.exit)?;
                Some(assemble(maze, pair, mode, None, vec![first, second]))
            }
        }
    }

    fn fallback_level(&self) -> GeneratedLevel {
        let fallback_seed = derive_attempt_seed(self.run_seed, self.policy.max_attempts);
        let mut rng = ChaCha8Rng::seed_from_u64(fallback_seed);
        let maze = carve(&mut rng, self.width, self.height);
        let pair = farthest_endpoints(&maze, &mut rng);
        assemble(maze, pair, LevelMode::FarEndpoints, None, Vec::new())
    }
}

fn assemble(
    maze: Maze,
    pair: EndpointPair,
    mode: LevelMode,
    key_pos: Option<Pos>,
    checkpoints: Vec<Pos>,
) -> GeneratedLevel {
    GeneratedLevel {
        maze,
        start: pair.start,
        exit: pair.exit,
        opt_len: pair.opt_len,
        mode,
        key_pos,
        checkpoints,
    }
}

/// `max(6, floor(percent% of the optimal path length))`, in integer math.
fn objective_distance(opt_len: u32, percent: u32) -> u32 {
    MIN_OBJECTIVE_DISTANCE.max(opt_len * percent / 100)
}
