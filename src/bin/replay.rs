use std::fs;
use std::path::Path;

use classic_chess::{Coord, Game, GameConfig, PieceKind};

const USAGE: &str = "Usage: replay [--setup <config.json>] [--quiet] <move>...
  <move>  row,col:row,col   e.g. 6,4:4,4 moves the e-pawn two squares
          =q | =r | =b | =n resolves a pending promotion";

enum Step {
    Move(Coord, Coord),
    Promote(PieceKind),
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut setup: Option<String> = None;
    let mut quiet = false;
    let mut steps: Vec<Step> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--setup" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--setup requires a path");
                    std::process::exit(2);
                };
                setup = Some(v.clone());
                i += 2;
            }
            "--quiet" => {
                quiet = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            x => {
                match parse_step(x) {
                    Some(step) => steps.push(step),
                    None => {
                        eprintln!("invalid move {x:?}\n{USAGE}");
                        std::process::exit(2);
                    }
                }
                i += 1;
            }
        }
    }

    let config = match setup {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("cannot load {path}: {e}");
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    let mut game = match Game::with_config(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid setup: {e}");
            std::process::exit(2);
        }
    };

    if !quiet {
        println!("{}", game.board());
    }

    for (n, step) in steps.iter().enumerate() {
        let outcome = match *step {
            Step::Move(from, to) => game
                .attempt_move_from(from, to)
                .map(|r| format!("{:?} {} -> {}", r.kind, r.from, r.to))
                .map_err(|e| e.to_string()),
            Step::Promote(kind) => game
                .resolve_promotion(kind)
                .map(|id| format!("promoted to {kind:?} {id}"))
                .map_err(|e| e.to_string()),
        };
        match outcome {
            Ok(line) => {
                println!("{:>3}. {line}", n + 1);
                if !quiet {
                    println!("{}", game.board());
                }
            }
            Err(e) => {
                eprintln!("step {} rejected: {e}", n + 1);
                std::process::exit(1);
            }
        }
    }

    let status = game.status();
    println!(
        "turn: {}  phase: {:?}  winner: {}",
        status.turn,
        game.phase(),
        status
            .winner
            .map_or_else(|| "-".to_string(), |w| format!("{w:?}"))
    );
}

fn load_config(path: &Path) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn parse_step(s: &str) -> Option<Step> {
    if let Some(choice) = s.strip_prefix('=') {
        let kind = match choice.to_ascii_lowercase().as_str() {
            "q" => PieceKind::Queen,
            "r" => PieceKind::Rook,
            "b" => PieceKind::Bishop,
            "n" => PieceKind::Knight,
            "k" => PieceKind::King,
            "p" => PieceKind::Pawn,
            _ => return None,
        };
        return Some(Step::Promote(kind));
    }
    let (from, to) = s.split_once(':')?;
    Some(Step::Move(parse_coord(from)?, parse_coord(to)?))
}

fn parse_coord(s: &str) -> Option<Coord> {
    let (r, c) = s.split_once(',')?;
    let row: i8 = r.trim().parse().ok()?;
    let col: i8 = c.trim().parse().ok()?;
    Coord::in_bounds(row, col).then(|| Coord::new(row, col))
}
