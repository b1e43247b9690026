//! Command line browser for chess opening lines.
//!
//! Usage: `openings [DATASET.json]`
//!
//! The dataset is a JSON array of opening records. Without one, a few well
//! known lines are available. Set `RUST_LOG=debug` to see how move tokens
//! were read.

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Write};

use log::{info, warn};

use openings_engine::{Category, MoveSequence, Opening, Position, PositionEngine, Viewer};

enum InputKind {
    Exit,
    Help,
    List(Option<Category>),
    Open(usize),
    Moves(String),
    Start,
    Back,
    Next,
    End,
    Error,
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let (command, argument) = match s.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (s, ""),
        };
        match (command, argument) {
            ("exit" | "quit" | "q", "") => Self::Exit,
            ("help" | "h", "") => Self::Help,
            ("list" | "ls", "") => Self::List(None),
            ("list" | "ls", name) => match Category::ALL.into_iter().find(|c| c.as_str() == name) {
                Some(category) => Self::List(Some(category)),
                None => Self::Error,
            },
            ("open" | "o", index) => index.parse().map_or(Self::Error, Self::Open),
            ("moves" | "m", text) if !text.is_empty() => Self::Moves(text.to_string()),
            ("start" | "s", "") => Self::Start,
            ("back" | "b", "") => Self::Back,
            ("next" | "n", "") => Self::Next,
            ("end" | "e", "") => Self::End,
            _ => Self::Error,
        }
    }
}

fn load_openings(path: &str) -> Result<Vec<Opening>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn builtin_openings() -> Vec<Opening> {
    let opening = |eco: &str, name: &str, pgn: &str, fen: &str| Opening {
        name: name.to_string(),
        eco: eco.to_string(),
        pgn: pgn.to_string(),
        fen: fen.to_string(),
        ..Default::default()
    };
    vec![
        opening(
            "C60",
            "Ruy Lopez",
            "1. e4 e5 2. Nf3 Nc6 3. Bb5",
            "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        ),
        opening(
            "C50",
            "Italian Game",
            "1. e4 e5 2. Nf3 Nc6 3. Bc4",
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        ),
        opening(
            "B20",
            "Sicilian Defense",
            "1. e4 c5",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
        ),
        opening(
            "C00",
            "French Defense",
            "1. e4 e6",
            "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        ),
        opening(
            "D06",
            "Queen's Gambit",
            "1. d4 d5 2. c4",
            "rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR b KQkq c3 0 2",
        ),
        opening(
            "E20",
            "Nimzo-Indian Defense",
            "1. d4 Nf6 2. c4 e6 3. Nc3 Bb4",
            "rnbqk2r/pppp1ppp/4pn2/8/1bPP4/2N5/PP2PPPP/R1BQKBNR w KQkq - 2 4",
        ),
        opening(
            "A10",
            "English Opening",
            "1. c4",
            "rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR b KQkq c3 0 1",
        ),
    ]
}

fn print_help() {
    println!("Commands:");
    println!("list | ls [category] => List openings, optionally of one category.");
    println!("  categories: {}", category_names());
    println!("open | o <n> => Open opening number n from the list.");
    println!("moves | m <text> => Open a line of moves, e.g. `moves 1. d4 d5 2. c4`.");
    println!("start | s => Go to the starting position.");
    println!("back | b => Go back one move.");
    println!("next | n => Go forward one move.");
    println!("end | e => Go to the final position.");
    println!("help | h => Print this help text.");
    println!("exit | q => End CLI.");
}

fn category_names() -> String {
    Category::ALL
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn halt_message(moves: &MoveSequence, halted_at: usize) -> String {
    format!("Could not read `{}`, showing the line up to it.", &moves[halted_at])
}

fn print_position(viewer: &mut Viewer) {
    let cursor = *viewer.cursor();
    println!(
        "\n{} [{}] ply {}/{}",
        viewer.opening(),
        viewer.label(),
        cursor.ply(),
        cursor.last_ply()
    );
    match viewer.fen() {
        Ok(fen) => match fen.parse::<Position>() {
            Ok(position) => println!("{position}"),
            Err(err) => println!("Fen: {fen}\n({err})"),
        },
        Err(err) => println!("{err}"),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    println!("Openings CLI 0.1.0\n");

    let openings = match env::args().nth(1) {
        Some(path) => match load_openings(&path) {
            Ok(openings) => {
                info!("loaded {} openings from {path}", openings.len());
                openings
            }
            Err(err) => {
                eprintln!("Could not load {path}: {err}");
                return Ok(());
            }
        },
        None => builtin_openings(),
    };

    let engine = PositionEngine::standard();
    let mut viewer = Viewer::standard(openings.first().cloned().unwrap_or_default());
    let mut input = String::new();
    println!("{} openings available. Type `help` for commands.", openings.len());

    loop {
        print_position(&mut viewer);
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match InputKind::from(input.trim()) {
            InputKind::Exit => break,
            InputKind::Help => print_help(),
            InputKind::List(category) => {
                for (index, opening) in openings.iter().enumerate() {
                    let opening_category = opening.category();
                    if category.map_or(true, |category| category == opening_category) {
                        println!("{index:>4}  {opening}  ({opening_category})");
                    }
                }
            }
            InputKind::Open(index) => match openings.get(index) {
                Some(opening) => viewer.open(opening.clone()),
                None => println!("No opening number {index}."),
            },
            InputKind::Moves(text) => {
                let moves = MoveSequence::parse(&text);
                let replay = engine.final_position(&moves);
                if let Some(halted_at) = replay.halted_at {
                    warn!("line stops before move {halted_at}");
                    println!("{}", halt_message(&moves, halted_at));
                }
                viewer.open(Opening {
                    name: "Custom line".to_string(),
                    pgn: moves.to_string(),
                    fen: replay.fen,
                    ..Default::default()
                });
            }
            InputKind::Start => viewer.cursor_mut().go_to_start(),
            InputKind::Back => {
                if !viewer.cursor_mut().step_back() {
                    println!("Already at the starting position.");
                }
            }
            InputKind::Next => {
                if !viewer.cursor_mut().step_forward() {
                    println!("Already at the final position.");
                }
            }
            InputKind::End => viewer.cursor_mut().go_to_end(),
            InputKind::Error => println!("Invalid command: {}", input.trim()),
        }
    }
    Ok(())
}
