//! Chess opening position engine.
//!
//! Replays the moves of an opening line from the initial position and answers
//! "position at ply N" queries as FEN strings, for any N from the initial
//! position (`-1`) to the last move. Move text is read leniently and a
//! line that stops making sense ends the replay instead of failing it.
//!
//! ```rust
//! use openings_engine::{MoveSequence, PositionEngine, START_FEN};
//!
//! let engine = PositionEngine::standard();
//! let moves = MoveSequence::parse("1. e4 e5 2. Nf3");
//! let final_fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2";
//!
//! assert_eq!(engine.position_at_ply(&moves, -1, final_fen).unwrap(), START_FEN);
//! assert_eq!(engine.position_at_ply(&moves, 2, final_fen).unwrap(), final_fen);
//! ```

pub mod bitboard;
pub mod boardrepr;
pub mod cache;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod fen;
pub(crate) mod movegen;
pub mod movelist;
pub mod movetext;
pub mod navigation;
pub mod notation;
pub mod opening;
pub mod perft;
pub mod position;
pub mod rules;
pub mod san;

pub use cache::PositionCache;
pub use engine::{PlyIndex, PositionEngine, Replay, START_PLY};
pub use error::{Error, ErrorKind};
pub use fen::{Fen, START_FEN};
pub use movetext::MoveSequence;
pub use navigation::{PlyCursor, Viewer};
pub use notation::Fallback;
pub use opening::{Category, Opening};
pub use position::Position;
pub use rules::{Rules, StandardRules};
