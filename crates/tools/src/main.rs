use anyhow::{Result, bail};
use clap::Parser;
use maze_core::level::progression::{mode_for_level, size_for_level};
use maze_core::{Dir, GeneratedLevel, LevelMode, Pos, generate_level};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run seed for deterministic generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Campaign level number; sets grid size and mode unless overridden
    #[arg(short, long, default_value_t = 1)]
    level: u32,
    /// Override the grid width
    #[arg(long)]
    width: Option<usize>,
    /// Override the grid height
    #[arg(long)]
    height: Option<usize>,
    /// Override the composition mode (base|far|nearfar|key|sequence)
    #[arg(short, long)]
    mode: Option<String>,
    /// Emit the level as JSON instead of an ASCII rendering
    #[arg(long)]
    json: bool,
}

fn parse_mode(raw: &str) -> Result<LevelMode> {
    Ok(match raw {
        "base" => LevelMode::Base,
        "far" => LevelMode::FarEndpoints,
        "nearfar" => LevelMode::NearButFar,
        "key" => LevelMode::Key,
        "sequence" => LevelMode::Sequence,
        other => bail!("unknown mode {other:?} (expected base|far|nearfar|key|sequence)"),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (default_width, default_height) = size_for_level(args.level);
    let width = args.width.unwrap_or(default_width);
    let height = args.height.unwrap_or(default_height);
    let mode = match &args.mode {
        Some(raw) => parse_mode(raw)?,
        None => mode_for_level(args.level),
    };

    let level = generate_level(args.seed, width, height, mode);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&level)?);
        return Ok(());
    }

    print!("{}", render_ascii(&level));
    println!("seed {}  level {}  mode {:?}  grid {}x{}", args.seed, args.level, level.mode, width, height);
    println!(
        "start ({}, {})  exit ({}, {})  optimal path {}",
        level.start.x, level.start.y, level.exit.x, level.exit.y, level.opt_len
    );
    if let Some(key) = level.key_pos {
        println!("key ({}, {})", key.x, key.y);
    }
    if !level.checkpoints.is_empty() {
        let marks: Vec<String> =
            level.checkpoints.iter().map(|c| format!("({}, {})", c.x, c.y)).collect();
        println!("checkpoints {}", marks.join(" then "));
    }
    println!("fingerprint {:#018x}", level.snapshot_hash());

    Ok(())
}

fn render_ascii(level: &GeneratedLevel) -> String {
    let maze = &level.maze;
    let mut out = String::new();

    out.push('+');
    for _ in 0..maze.width() {
        out.push_str("--+");
    }
    out.push('\n');

    for y in 0..maze.height() as i32 {
        let mut mid = String::from("|");
        let mut bottom = String::from("+");
        for x in 0..maze.width() as i32 {
            let pos = Pos { y, x };
            mid.push(glyph(level, pos));
            mid.push(' ');
            mid.push(if maze.cell(pos).has_wall(Dir::East) { '|' } else { ' ' });
            bottom.push_str(if maze.cell(pos).has_wall(Dir::South) { "--" } else { "  " });
            bottom.push('+');
        }
        out.push_str(&mid);
        out.push('\n');
        out.push_str(&bottom);
        out.push('\n');
    }

    out
}

fn glyph(level: &GeneratedLevel, pos: Pos) -> char {
    if pos == level.start {
        'S'
    } else if pos == level.exit {
        'E'
    } else if level.key_pos == Some(pos) {
        'K'
    } else if level.checkpoints.first() == Some(&pos) {
        'A'
    } else if level.checkpoints.get(1) == Some(&pos) {
        'B'
    } else {
        ' '
    }
}
