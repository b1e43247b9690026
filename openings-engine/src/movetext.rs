//! Move text parsing.
//!
//! Opening lines arrive as loosely formatted algebraic notation such as
//! `"1. e4 e5 2. Nf3 Nc6 3. Bb5"`. Parsing drops move numbers and whitespace
//! and keeps the remaining tokens in ply order, without looking at what they say.

use std::fmt::{self, Display};
use std::ops::Index;

use crate::engine::{ply_after, PlyIndex};

/// Ordered move tokens of one line. Index 0 is White's first move.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveSequence {
    tokens: Vec<String>,
}

impl MoveSequence {
    /// Parses raw move text into tokens.
    ///
    /// Every move number prefix, one or more digits followed by one or more
    /// dots and any whitespace, is removed. The rest is split on whitespace.
    /// Input with nothing but numbers and whitespace gives an empty sequence.
    pub fn parse(raw: &str) -> Self {
        strip_move_numbers(raw)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token played at ply index, if in range.
    pub fn get(&self, ply: usize) -> Option<&str> {
        self.tokens.get(ply).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Ply index of the position after the last move, `-1` when empty.
    pub fn last_ply(&self) -> PlyIndex {
        ply_after(self.tokens.len())
    }
}

/// Shorthand for [`MoveSequence::parse`].
pub fn parse(raw: &str) -> MoveSequence {
    MoveSequence::parse(raw)
}

/// Removes every `<digits> <dots> <whitespace>` run. Digits not followed by a
/// dot are kept, so `e4` or `Nf3` are untouched.
fn strip_move_numbers(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find(|ch: char| ch.is_ascii_digit()) {
        stripped.push_str(&rest[..start]);
        let digits = &rest[start..];
        let after_digits = digits.trim_start_matches(|ch: char| ch.is_ascii_digit());
        let after_dots = after_digits.trim_start_matches('.');

        if after_dots.len() < after_digits.len() {
            rest = after_dots.trim_start();
        } else {
            stripped.push_str(&digits[..digits.len() - after_digits.len()]);
            rest = after_digits;
        }
    }
    stripped.push_str(rest);
    stripped
}

impl Index<usize> for MoveSequence {
    type Output = str;
    fn index(&self, ply: usize) -> &Self::Output {
        &self.tokens[ply]
    }
}

impl<S: Into<String>> FromIterator<S> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for MoveSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// Renders numbered move text, `1. e4 e5 2. Nf3`.
impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (ply, token) in self.tokens.iter().enumerate() {
            if ply > 0 {
                f.write_str(" ")?;
            }
            if ply % 2 == 0 {
                write!(f, "{}. ", ply / 2 + 1)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        MoveSequence::parse(raw).tokens().to_vec()
    }

    #[test]
    fn parse_numbered_text() {
        let expected = vec!["e4", "e5", "Nf3", "Nc6", "Bb5"];
        assert_eq!(tokens("1. e4 e5 2. Nf3 Nc6 3. Bb5"), expected);
        assert_eq!(tokens("1.e4 e5 2.Nf3 Nc6 3.Bb5"), expected);
        assert_eq!(tokens("  1.  e4   e5\n2.\tNf3 Nc6 3. Bb5  "), expected);
        assert_eq!(tokens("e4 e5 Nf3 Nc6 Bb5"), expected);
    }

    #[test]
    fn parse_black_move_numbers() {
        assert_eq!(tokens("1. e4 1... c5 2. Nf3"), vec!["e4", "c5", "Nf3"]);
        assert_eq!(tokens("12...Nxd4"), vec!["Nxd4"]);
    }

    #[test]
    fn parse_keeps_square_digits() {
        assert_eq!(tokens("1. d4 Nf6 2. c4 e6 3. Nc3 Bb4"), vec!["d4", "Nf6", "c4", "e6", "Nc3", "Bb4"]);
        assert_eq!(tokens("10. O-O-O Qxe7+"), vec!["O-O-O", "Qxe7+"]);
    }

    #[test]
    fn parse_empty_inputs() {
        for raw in ["", "   ", "1.", "1. 2. 3.", "\n\t"] {
            let moves = MoveSequence::parse(raw);
            assert!(moves.is_empty(), "{raw:?}");
            assert_eq!(moves.last_ply(), -1);
        }
    }

    #[test]
    fn accessors_and_display() {
        let moves: MoveSequence = ["e4", "e5", "Nf3"].into_iter().collect();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.last_ply(), 2);
        assert_eq!(moves.get(1), Some("e5"));
        assert_eq!(moves.get(3), None);
        assert_eq!(&moves[2], "Nf3");
        assert_eq!(moves.to_string(), "1. e4 e5 2. Nf3");
        assert_eq!(MoveSequence::parse(&moves.to_string()), moves);
    }
}
