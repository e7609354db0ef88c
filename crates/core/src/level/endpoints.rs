//! Start/exit placement strategies over maze topology.

use rand_chacha::ChaCha8Rng;

use crate::mazegen::Maze;
use crate::pathfinding::bfs_all;
use crate::seed::rand_index;
use crate::types::Pos;

/// Search budget for the near-but-far strategy; exhaustion falls back to
/// the diameter endpoints so placement latency stays bounded.
const NEAR_BUT_FAR_ATTEMPTS: usize = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointPair {
    pub start: Pos,
    pub exit: Pos,
    pub opt_len: u32,
}

/// Double-BFS diameter endpoints: sweep from a random seed cell to its
/// farthest cell, then sweep again. Exact on a spanning-tree maze.
pub fn farthest_endpoints(maze: &Maze, rng: &mut ChaCha8Rng) -> EndpointPair {
    let seed_cell = random_cell(maze, rng);
    let first_sweep = bfs_all(maze, seed_cell);
    let start = first_sweep.farthest().pos;
    let second_sweep = bfs_all(maze, start);
    EndpointPair { start, exit: second_sweep.farthest().pos, opt_len: second_sweep.farthest().dist }
}

/// A start/exit pair within Manhattan distance 2 whose tree path is at
/// least `min_dist` long — visually close, topologically distant. Best
/// effort: bounded random attempts, then the diameter fallback.
pub fn near_but_far_endpoints(maze: &Maze, rng: &mut ChaCha8Rng, min_dist: u32) -> EndpointPair {
    for _ in 0..NEAR_BUT_FAR_ATTEMPTS {
        let start = random_cell(maze, rng);
        let candidates = near_candidates(maze, start);
        if candidates.is_empty() {
            continue;
        }

        let field = bfs_all(maze, start);
        let exit = candidates[rand_index(rng, candidates.len())];
        let dist = field.dist_at(exit);
        if dist >= 0 && dist as u32 >= min_dist {
            return EndpointPair { start, exit, opt_len: dist as u32 };
        }
    }

    farthest_endpoints(maze, rng)
}

/// Uniform pick among cells at graph distance >= `min_distance` from
/// `from`; the farthest cell when no cell qualifies.
pub(crate) fn pick_far_cell(
    maze: &Maze,
    rng: &mut ChaCha8Rng,
    from: Pos,
    min_distance: u32,
) -> Pos {
    let field = bfs_all(maze, from);
    let mut candidates = Vec::new();
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let pos = Pos { y, x };
            let dist = field.dist_at(pos);
            if dist >= 0 && dist as u64 >= min_distance as u64 {
                candidates.push(pos);
            }
        }
    }

    if candidates.is_empty() {
        return field.farthest().pos;
    }
    candidates[rand_index(rng, candidates.len())]
}

fn random_cell(maze: &Maze, rng: &mut ChaCha8Rng) -> Pos {
    Pos { y: rand_index(rng, maze.height()) as i32, x: rand_index(rng, maze.width()) as i32 }
}

/// In-bounds cells within Manhattan distance 1..=2 of `start`, enumerated
/// in row order.
fn near_candidates(maze: &Maze, start: Pos) -> Vec<Pos> {
    let mut candidates = Vec::new();
    for dy in -2_i32..=2 {
        for dx in -2_i32..=2 {
            let manhattan = dx.abs() + dy.abs();
            if manhattan == 0 || manhattan > 2 {
                continue;
            }
            let candidate = Pos { y: start.y + dy, x: start.x + dx };
            if maze.in_bounds(candidate) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}
