//! Breadth-first connectivity over maze topology.
//! This module exists so distance fields, predecessor trees, and path
//! reconstruction are reusable across endpoint placement and validation.
//! It does not own placement policy or retry flow.

use std::collections::VecDeque;

use crate::mazegen::Maze;
use crate::types::{Dir, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Farthest {
    pub pos: Pos,
    pub dist: u32,
}

#[derive(Clone, Debug)]
pub struct BfsField {
    width: usize,
    height: usize,
    dist: Vec<i32>,
    prev: Vec<Option<Pos>>,
    farthest: Farthest,
}

impl BfsField {
    /// Graph distance from the BFS start; `-1` when unreached.
    pub fn dist_at(&self, pos: Pos) -> i32 {
        self.dist[self.index(pos)]
    }

    pub fn prev_at(&self, pos: Pos) -> Option<Pos> {
        self.prev[self.index(pos)]
    }

    /// The first cell that attained the maximum distance in frontier order.
    /// The tie-break is a traversal artifact, not a contract.
    pub fn farthest(&self) -> Farthest {
        self.farthest
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            pos.x >= 0
                && pos.y >= 0
                && (pos.x as usize) < self.width
                && (pos.y as usize) < self.height,
            "field position out of bounds: {pos:?}"
        );
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    /// Every cell on the route, start and goal included.
    pub cells: Vec<Pos>,
    pub dist: u32,
}

/// Breadth-first sweep from `start` honoring `Maze::can_move` as the sole
/// edge-validity test.
pub fn bfs_all(maze: &Maze, start: Pos) -> BfsField {
    assert!(maze.in_bounds(start), "bfs start out of bounds: {start:?}");

    let width = maze.width();
    let height = maze.height();
    let mut dist = vec![-1_i32; width * height];
    let mut prev: Vec<Option<Pos>> = vec![None; width * height];
    let mut queue = VecDeque::from([start]);
    dist[(start.y as usize) * width + (start.x as usize)] = 0;

    let mut farthest = Farthest { pos: start, dist: 0 };

    while let Some(current) = queue.pop_front() {
        let current_dist = dist[(current.y as usize) * width + (current.x as usize)];
        if current_dist as u32 > farthest.dist {
            farthest = Farthest { pos: current, dist: current_dist as u32 };
        }

        for dir in Dir::ALL {
            if !maze.can_move(current, dir) {
                continue;
            }
            let next = current.step(dir);
            let next_index = (next.y as usize) * width + (next.x as usize);
            if dist[next_index] != -1 {
                continue;
            }
            dist[next_index] = current_dist + 1;
            prev[next_index] = Some(current);
            queue.push_back(next);
        }
    }

    BfsField { width, height, dist, prev, farthest }
}

/// The unique tree path between two cells, reconstructed backward over the
/// predecessor grid. `None` when the goal is unreached — impossible on a
/// well-formed maze, handled anyway.
pub fn shortest_path(maze: &Maze, start: Pos, goal: Pos) -> Option<ShortestPath> {
    let field = bfs_all(maze, start);
    let dist = field.dist_at(goal);
    if dist < 0 {
        return None;
    }

    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(parent) = field.prev_at(current) {
        cells.push(parent);
        current = parent;
    }
    cells.reverse();

    Some(ShortestPath { cells, dist: dist as u32 })
}
