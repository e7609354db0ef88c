//! Public data model for composed levels.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::mazegen::Maze;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelMode {
    Base,
    FarEndpoints,
    NearButFar,
    Key,
    Sequence,
}

impl LevelMode {
    pub const ALL: [LevelMode; 5] = [
        LevelMode::Base,
        LevelMode::FarEndpoints,
        LevelMode::NearButFar,
        LevelMode::Key,
        LevelMode::Sequence,
    ];

    fn code(self) -> u8 {
        match self {
            LevelMode::Base => 0,
            LevelMode::FarEndpoints => 1,
            LevelMode::NearButFar => 2,
            LevelMode::Key => 3,
            LevelMode::Sequence => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLevel {
    pub maze: Maze,
    pub start: Pos,
    pub exit: Pos,
    /// Graph distance of the start-to-exit tree path.
    pub opt_len: u32,
    pub mode: LevelMode,
    /// Present only for `Key` levels.
    pub key_pos: Option<Pos>,
    /// Empty, or exactly two ordered checkpoints for `Sequence` levels.
    pub checkpoints: Vec<Pos>,
}

impl GeneratedLevel {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.maze.canonical_bytes();
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());
        bytes.extend(self.opt_len.to_le_bytes());
        bytes.push(self.mode.code());

        match self.key_pos {
            None => bytes.push(0),
            Some(key) => {
                bytes.push(1);
                bytes.extend(key.y.to_le_bytes());
                bytes.extend(key.x.to_le_bytes());
            }
        }

        bytes.extend((self.checkpoints.len() as u32).to_le_bytes());
        for checkpoint in &self.checkpoints {
            bytes.extend(checkpoint.y.to_le_bytes());
            bytes.extend(checkpoint.x.to_le_bytes());
        }

        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
