pub mod level;
pub mod mazegen;
pub mod pathfinding;
pub mod session;
pub mod types;

mod seed;

pub use level::{GeneratedLevel, LevelComposer, LevelMode, RetryPolicy, generate_level};
pub use mazegen::{Cell, Maze, MazeGenerator, generate_maze};
pub use pathfinding::{BfsField, Farthest, ShortestPath, bfs_all, shortest_path};
pub use session::LevelSession;
pub use types::{Dir, Pos};
