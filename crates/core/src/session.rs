//! Single-level play session: step legality, objective progress, and the
//! locked-exit rule. Cross-level bookkeeping (unlocked levels, regenerate
//! requests) stays with the caller.

use crate::level::{GeneratedLevel, LevelMode};
use crate::types::{Dir, Pos};

pub struct LevelSession {
    level: GeneratedLevel,
    player: Pos,
    has_key: bool,
    checkpoints_reached: usize,
}

impl LevelSession {
    pub fn new(level: GeneratedLevel) -> Self {
        let start = level.start;
        let mut session = Self { level, player: start, has_key: false, checkpoints_reached: 0 };
        session.collect_at(start);
        session
    }

    pub fn level(&self) -> &GeneratedLevel {
        &self.level
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn has_key(&self) -> bool {
        self.has_key
    }

    pub fn checkpoints_reached(&self) -> usize {
        self.checkpoints_reached
    }

    /// Apply one step if the maze allows it; reports whether the player
    /// moved.
    pub fn try_move(&mut self, dir: Dir) -> bool {
        if !self.level.maze.can_move(self.player, dir) {
            return false;
        }
        self.player = self.player.step(dir);
        self.collect_at(self.player);
        true
    }

    pub fn exit_unlocked(&self) -> bool {
        match self.level.mode {
            LevelMode::Key => self.has_key,
            LevelMode::Sequence => self.checkpoints_reached >= self.level.checkpoints.len(),
            _ => true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.exit_unlocked() && self.player == self.level.exit
    }

    fn collect_at(&mut self, pos: Pos) {
        match self.level.mode {
            LevelMode::Key => {
                if self.level.key_pos == Some(pos) {
                    self.has_key = true;
                }
            }
            LevelMode::Sequence => {
                // Checkpoints count only in order; stepping on B early does nothing.
                if self.level.checkpoints.get(self.checkpoints_reached) == Some(&pos) {
                    self.checkpoints_reached += 1;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazegen::generate_maze;

    /// A 1xN maze is a single corridor whatever the seed, which makes the
    /// walk order in these tests fully deterministic.
    fn corridor_level(length: usize, mode: LevelMode) -> GeneratedLevel {
        GeneratedLevel {
            maze: generate_maze(0, length, 1),
            start: Pos { y: 0, x: 0 },
            exit: Pos { y: 0, x: length as i32 - 1 },
            opt_len: length as u32 - 1,
            mode,
            key_pos: None,
            checkpoints: Vec::new(),
        }
    }

    #[test]
    fn walls_reject_moves_and_leave_the_player_in_place() {
        let mut session = LevelSession::new(corridor_level(4, LevelMode::Base));

        assert!(!session.try_move(Dir::North));
        assert!(!session.try_move(Dir::West));
        assert_eq!(session.player(), Pos { y: 0, x: 0 });

        assert!(session.try_move(Dir::East));
        assert_eq!(session.player(), Pos { y: 0, x: 1 });
    }

    #[test]
    fn base_levels_complete_on_reaching_the_exit() {
        let mut session = LevelSession::new(corridor_level(3, LevelMode::Base));
        assert!(session.exit_unlocked());
        assert!(!session.is_complete());

        assert!(session.try_move(Dir::East));
        assert!(session.try_move(Dir::East));
        assert!(session.is_complete());
    }

    #[test]
    fn key_levels_keep_the_exit_locked_until_pickup() {
        let mut level = corridor_level(6, LevelMode::Key);
        level.exit = Pos { y: 0, x: 3 };
        level.opt_len = 3;
        level.key_pos = Some(Pos { y: 0, x: 5 });
        let mut session = LevelSession::new(level);

        for _ in 0..3 {
            assert!(session.try_move(Dir::East));
        }
        assert_eq!(session.player(), session.level().exit);
        assert!(!session.exit_unlocked(), "exit must stay locked without the key");
        assert!(!session.is_complete());

        assert!(session.try_move(Dir::East));
        assert!(session.try_move(Dir::East));
        assert!(session.has_key(), "stepping onto the key cell collects it");

        assert!(session.try_move(Dir::West));
        assert!(session.try_move(Dir::West));
        assert!(session.is_complete());
    }

    #[test]
    fn sequence_checkpoints_only_count_in_order() {
        let mut level = corridor_level(5, LevelMode::Sequence);
        level.checkpoints = vec![Pos { y: 0, x: 3 }, Pos { y: 0, x: 1 }];
        let mut session = LevelSession::new(level);

        // Passing over B (x=1) on the way out must not register.
        for _ in 0..3 {
            assert!(session.try_move(Dir::East));
        }
        assert_eq!(session.checkpoints_reached(), 1, "only A counts on the way out");
        assert!(!session.exit_unlocked());

        // Back to B, then on to the exit.
        assert!(session.try_move(Dir::West));
        assert!(session.try_move(Dir::West));
        assert_eq!(session.checkpoints_reached(), 2);
        assert!(session.exit_unlocked());

        for _ in 0..3 {
            assert!(session.try_move(Dir::East));
        }
        assert!(session.is_complete());
    }
}
