//! Randomized depth-first maze carving over a seeded stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::model::Maze;
use crate::seed::rand_index;
use crate::types::{Dir, Pos};

pub struct MazeGenerator {
    rng: ChaCha8Rng,
    width: usize,
    height: usize,
}

impl MazeGenerator {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "maze dimensions must be at least 1x1");
        Self { rng: ChaCha8Rng::seed_from_u64(seed), width, height }
    }

    pub fn generate(&mut self) -> Maze {
        carve(&mut self.rng, self.width, self.height)
    }
}

/// Iterative randomized depth-first carving: every cell is visited exactly
/// once, and one shared edge opens per first visit, so the passage graph is
/// a spanning tree of the grid.
pub(crate) fn carve(rng: &mut ChaCha8Rng, width: usize, height: usize) -> Maze {
    let mut maze = Maze::closed(width, height);
    let mut visited = vec![false; width * height];
    let mut stack: Vec<Pos> = Vec::new();
    let mut current = Pos { y: 0, x: 0 };
    visited[0] = true;

    loop {
        match pick_unvisited_neighbor(rng, &maze, &visited, current) {
            Some((dir, next)) => {
                maze.open_passage(current, dir);
                stack.push(current);
                visited[(next.y as usize) * width + (next.x as usize)] = true;
                current = next;
            }
            None => match stack.pop() {
                Some(parent) => current = parent,
                None => break,
            },
        }
    }

    maze
}

/// Uniformly shuffle the four directions and take the first in-bounds
/// unvisited neighbor, which picks uniformly among the valid candidates.
fn pick_unvisited_neighbor(
    rng: &mut ChaCha8Rng,
    maze: &Maze,
    visited: &[bool],
    current: Pos,
) -> Option<(Dir, Pos)> {
    let mut dirs = Dir::ALL;
    for i in (1..dirs.len()).rev() {
        dirs.swap(i, rand_index(rng, i + 1));
    }

    dirs.into_iter().find_map(|dir| {
        let next = current.step(dir);
        if !maze.in_bounds(next) {
            return None;
        }
        if visited[(next.y as usize) * maze.width() + (next.x as usize)] {
            return None;
        }
        Some((dir, next))
    })
}
