use anyhow::Result;
use clap::Parser;
use maze_core::{Dir, GeneratedLevel, LevelMode, LevelSession, Pos, generate_level, shortest_path};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    iterations: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Starting level fuzz harness on seed {} for {} iterations...",
        args.seed, args.iterations
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let run_seed = rng.next_u64();
        let width = 5 + (rng.next_u64() as usize % 12);
        let height = 5 + (rng.next_u64() as usize % 12);

        for mode in LevelMode::ALL {
            let level = generate_level(run_seed, width, height, mode);
            check_level_invariants(&level, width, height);
        }

        if (iteration + 1) % 50 == 0 {
            println!("checked {} iterations", iteration + 1);
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}

fn check_level_invariants(level: &GeneratedLevel, width: usize, height: usize) {
    let maze = &level.maze;
    assert_eq!(maze.width(), width);
    assert_eq!(maze.height(), height);
    assert_eq!(
        maze.open_passage_count(),
        width * height - 1,
        "Invariant failed: passage graph is not a spanning tree"
    );

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let pos = Pos { y, x };
            for dir in Dir::ALL {
                if maze.can_move(pos, dir) {
                    assert!(
                        maze.can_move(pos.step(dir), dir.opposite()),
                        "Invariant failed: one-way passage at {pos:?} {dir:?}"
                    );
                }
            }
        }
    }

    let route = shortest_path(maze, level.start, level.exit).expect("level must be solvable");
    assert_eq!(route.dist, level.opt_len, "Invariant failed: opt_len mismatch");

    match level.mode {
        LevelMode::Key => {
            let key_pos = level.key_pos.expect("key level must place a key");
            let mut session = LevelSession::new(level.clone());
            assert!(!session.exit_unlocked(), "Invariant failed: exit unlocked before pickup");
            walk_to(&mut session, key_pos);
            assert!(session.has_key());
            walk_to(&mut session, level.exit);
            assert!(session.is_complete(), "Invariant failed: key run did not complete");
        }
        LevelMode::Sequence => {
            assert_eq!(level.checkpoints.len(), 2);
            let mut session = LevelSession::new(level.clone());
            walk_to(&mut session, level.checkpoints[0]);
            walk_to(&mut session, level.checkpoints[1]);
            assert_eq!(session.checkpoints_reached(), 2);
            walk_to(&mut session, level.exit);
            assert!(session.is_complete(), "Invariant failed: sequence run did not complete");
        }
        _ => {
            assert!(level.key_pos.is_none());
            assert!(level.checkpoints.is_empty());
        }
    }
}

fn walk_to(session: &mut LevelSession, target: Pos) {
    let route = shortest_path(&session.level().maze, session.player(), target)
        .expect("walk target must be reachable");
    for pair in route.cells.windows(2) {
        let dir = Dir::ALL
            .into_iter()
            .find(|&dir| pair[0].step(dir) == pair[1])
            .expect("route cells must be adjacent");
        assert!(session.try_move(dir), "legal route step must be accepted");
    }
}
