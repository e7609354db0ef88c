//! Seed-and-mode sweep over the composer, asserting the solvability and
//! objective invariants every produced level must keep.

use maze_core::{Dir, LevelMode, LevelSession, Pos, generate_level, shortest_path};

const SEEDS: [u64; 6] = [1, 2, 3, 42, 99, 12_345];
const SIZES: [(usize, usize); 3] = [(9, 9), (13, 11), (20, 20)];

#[test]
fn every_mode_yields_a_solvable_level_with_the_right_shape() {
    for seed in SEEDS {
        for (width, height) in SIZES {
            for mode in LevelMode::ALL {
                let level = generate_level(seed, width, height, mode);
                assert_eq!(level.mode, mode, "seed={seed} {width}x{height}");
                assert_eq!(level.maze.open_passage_count(), width * height - 1);

                let route = shortest_path(&level.maze, level.start, level.exit)
                    .expect("every composed level must be solvable");
                assert_eq!(route.dist, level.opt_len, "seed={seed} mode={mode:?}");

                match mode {
                    LevelMode::Key => {
                        assert!(level.key_pos.is_some());
                        assert!(level.checkpoints.is_empty());
                    }
                    LevelMode::Sequence => {
                        assert!(level.key_pos.is_none());
                        assert_eq!(level.checkpoints.len(), 2);
                    }
                    _ => {
                        assert!(level.key_pos.is_none());
                        assert!(level.checkpoints.is_empty());
                    }
                }
            }
        }
    }
}

#[test]
fn key_levels_always_chain_start_key_exit() {
    for seed in SEEDS {
        let level = generate_level(seed, 13, 13, LevelMode::Key);
        let key_pos = level.key_pos.expect("key level must place a key");

        shortest_path(&level.maze, level.start, key_pos).expect("start -> key");
        shortest_path(&level.maze, key_pos, level.exit).expect("key -> exit");
    }
}

#[test]
fn sequence_levels_always_chain_through_both_checkpoints() {
    for seed in SEEDS {
        let level = generate_level(seed, 13, 13, LevelMode::Sequence);
        let [first, second] = [level.checkpoints[0], level.checkpoints[1]];

        shortest_path(&level.maze, level.start, first).expect("start -> A");
        shortest_path(&level.maze, first, second).expect("A -> B");
        shortest_path(&level.maze, second, level.exit).expect("B -> exit");
    }
}

#[test]
fn key_sessions_complete_after_a_pickup_detour() {
    for seed in SEEDS {
        let level = generate_level(seed, 11, 11, LevelMode::Key);
        let key_pos = level.key_pos.expect("key level must place a key");
        let exit = level.exit;
        let mut session = LevelSession::new(level);

        assert!(!session.exit_unlocked(), "seed={seed}: the exit starts locked");

        walk_to(&mut session, key_pos);
        assert!(session.has_key(), "seed={seed}: reaching the key cell collects it");
        assert!(session.exit_unlocked());

        walk_to(&mut session, exit);
        assert!(session.is_complete(), "seed={seed}: key then exit completes the level");
    }
}

#[test]
fn sequence_sessions_complete_after_visiting_both_checkpoints_in_order() {
    for seed in SEEDS {
        let level = generate_level(seed, 11, 11, LevelMode::Sequence);
        let [first, second] = [level.checkpoints[0], level.checkpoints[1]];
        let exit = level.exit;
        let mut session = LevelSession::new(level);

        walk_to(&mut session, first);
        assert!(session.checkpoints_reached() >= 1, "seed={seed}: A must register");

        walk_to(&mut session, second);
        assert_eq!(session.checkpoints_reached(), 2, "seed={seed}: B must register after A");
        assert!(session.exit_unlocked());

        walk_to(&mut session, exit);
        assert!(session.is_complete(), "seed={seed}");
    }
}

/// Drive the session along the unique tree path to `target`; every step on
/// the route must be accepted by the movement predicate.
fn walk_to(session: &mut LevelSession, target: Pos) {
    let route = shortest_path(&session.level().maze, session.player(), target)
        .expect("walk target must be reachable");
    for pair in route.cells.windows(2) {
        let dir = dir_between(pair[0], pair[1]);
        assert!(session.try_move(dir), "route step {pair:?} must be legal");
    }
    assert_eq!(session.player(), target);
}

fn dir_between(from: Pos, to: Pos) -> Dir {
    Dir::ALL
        .into_iter()
        .find(|&dir| from.step(dir) == to)
        .expect("route cells must be grid-adjacent")
}
