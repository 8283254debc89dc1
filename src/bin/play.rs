use anyhow::{bail, Context, Result};
use clap::Parser;
use classic_chess::board::Board;
use classic_chess::coord::{Coord, BOARD_SIZE};
use classic_chess::pieces::{Color, PieceKind};
use env_logger::Env;
use log::{info, warn};
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "play", version, about = "Replay moves against a chess board")]
struct Cli {
    /// YAML file holding a serialized board to start from.
    #[arg(long)]
    position: Option<PathBuf>,

    /// Print the board after every applied move, not only at the end.
    #[arg(long)]
    trace: bool,
}

/// Reads moves from stdin, one per line as `start_row start_col end_row end_col`
/// (blank lines and `#` comments are skipped), applies the legal ones and
/// prints the resulting board.
fn main() -> Result<()> {
    let env = Env::default().filter_or("CHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let mut board = match &cli.position {
        Some(path) => load_position(path)?,
        None => Board::new(),
    };

    let stdin = std::io::stdin();
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (start, end) = parse_move(line).with_context(|| format!("line {}", lineno + 1))?;
        if board.make_move(start, end) {
            info!("applied ({},{}) -> ({},{})", start.row, start.col, end.row, end.col);
            if cli.trace {
                print!("{}", render(&board));
            }
        } else {
            warn!("rejected ({},{}) -> ({},{})", start.row, start.col, end.row, end.col);
        }
    }

    print!("{}", render(&board));
    println!("side to move: {}", board.current_turn());
    Ok(())
}

fn load_position(path: &PathBuf) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read position file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse position file {}", path.display()))
}

fn parse_move(line: &str) -> Result<(Coord, Coord)> {
    let fields: Vec<i16> = line
        .split_whitespace()
        .map(|f| f.parse::<i16>().with_context(|| format!("bad coordinate {f:?}")))
        .collect::<Result<_>>()?;
    if fields.len() != 4 {
        bail!("expected 4 coordinates, got {}", fields.len());
    }
    Ok((
        Coord::new(fields[0], fields[1]),
        Coord::new(fields[2], fields[3]),
    ))
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let ch = match board.get_piece(row, col) {
                None => '.',
                Some(p) => {
                    let c = letter(p.kind);
                    match p.color {
                        Color::White => c.to_ascii_uppercase(),
                        Color::Black => c,
                    }
                }
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    }
}
