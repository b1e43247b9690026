//! Opening records as they appear in opening datasets.
//!
//! The position engine only reads `pgn` and `fen`. The remaining fields are
//! carried for display.

use std::fmt::{self, Display};

use crate::movetext::MoveSequence;

/// One named opening line.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Opening {
    pub name: String,
    /// ECO code, e.g. `C60`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub eco: String,
    /// Move text of the line, e.g. `1. e4 e5 2. Nf3 Nc6 3. Bb5`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pgn: String,
    /// Trusted FEN of the position after the last move.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fen: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub unique_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub parent_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub strategy: Option<String>,
}

/// Coarse grouping of openings by first moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Category {
    WhiteE4,
    BlackVsE4,
    WhiteD4,
    BlackVsD4,
    WhiteOther,
    Unknown,
}

const BLACK_VS_E4_REPLIES: &[&str] = &["c5", "e6", "c6", "d5", "d6", "g6", "Nf6", "Nc6"];
const BLACK_VS_E4_NAMES: &[&str] = &[
    "sicilian",
    "french",
    "caro",
    "kann",
    "scandinavian",
    "center counter",
    "pirc",
    "modern",
    "alekhine",
    "nimzowitsch",
];
const BLACK_VS_D4_REPLIES: &[&str] = &["Nf6", "e6", "c5", "f5", "Nc6", "g6"];
const BLACK_VS_D4_NAMES: &[&str] = &["indian", "nimzo", "grunfeld", "benoni", "benko", "dutch"];

impl Opening {
    /// Parsed moves of the line.
    pub fn moves(&self) -> MoveSequence {
        MoveSequence::parse(&self.pgn)
    }

    /// Classifies the line by White's first move and Black's reply,
    /// falling back on name keywords and the ECO letter.
    pub fn category(&self) -> Category {
        let moves = self.moves();
        let first = match moves.get(0) {
            Some(first) => first.trim_end_matches(|ch| ch == '+' || ch == '#'),
            None => return Category::Unknown,
        };
        let reply = moves.get(1).map(|reply| reply.trim_end_matches(|ch| ch == '+' || ch == '#'));
        let name = self.name.to_lowercase();
        let named = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));
        let replied = |replies: &[&str]| reply.map_or(false, |reply| replies.contains(&reply));

        match first {
            "e4" if reply == Some("e5") => Category::WhiteE4,
            "e4" if replied(BLACK_VS_E4_REPLIES)
                || named(BLACK_VS_E4_NAMES)
                || self.eco.starts_with('B') =>
            {
                Category::BlackVsE4
            }
            "e4" => Category::WhiteE4,
            "d4" if reply == Some("d5") => Category::WhiteD4,
            "d4" if replied(BLACK_VS_D4_REPLIES)
                || named(BLACK_VS_D4_NAMES)
                || self.eco.starts_with('E') =>
            {
                Category::BlackVsD4
            }
            "d4" => Category::WhiteD4,
            _ => Category::WhiteOther,
        }
    }
}

impl Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.eco.is_empty() {
            true => write!(f, "{}", self.name),
            false => write!(f, "{} {}", self.eco, self.name),
        }
    }
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::WhiteE4,
        Category::BlackVsE4,
        Category::WhiteD4,
        Category::BlackVsD4,
        Category::WhiteOther,
        Category::Unknown,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::WhiteE4 => "white-e4",
            Category::BlackVsE4 => "black-vs-e4",
            Category::WhiteD4 => "white-d4",
            Category::BlackVsD4 => "black-vs-d4",
            Category::WhiteOther => "white-other",
            Category::Unknown => "unknown",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening(name: &str, eco: &str, pgn: &str) -> Opening {
        Opening {
            name: name.to_string(),
            eco: eco.to_string(),
            pgn: pgn.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn categories_by_reply() {
        let cases = [
            ("Ruy Lopez", "C60", "1. e4 e5 2. Nf3 Nc6 3. Bb5", Category::WhiteE4),
            ("Sicilian Defense", "B20", "1. e4 c5", Category::BlackVsE4),
            ("Alekhine Defense", "B02", "1. e4 Nf6", Category::BlackVsE4),
            ("Queen's Gambit", "D06", "1. d4 d5 2. c4", Category::WhiteD4),
            ("Dutch Defense", "A80", "1. d4 f5", Category::BlackVsD4),
            ("English Opening", "A10", "1. c4", Category::WhiteOther),
            ("Reti Opening", "A04", "1. Nf3", Category::WhiteOther),
            ("Empty", "", "", Category::Unknown),
        ];
        for (name, eco, pgn, category) in cases {
            assert_eq!(opening(name, eco, pgn).category(), category, "{name}");
        }
    }

    #[test]
    fn categories_by_name_and_eco() {
        assert_eq!(opening("King's Pawn Game", "C20", "1. e4").category(), Category::WhiteE4);
        assert_eq!(opening("Owen Defense", "B00", "1. e4 b6").category(), Category::BlackVsE4);
        assert_eq!(opening("Nimzo-Indian", "", "1. d4").category(), Category::BlackVsD4);
        assert_eq!(opening("Catalan", "E01", "1. d4").category(), Category::BlackVsD4);
        assert_eq!(opening("Queen's Pawn Game", "A40", "1. d4 b6").category(), Category::WhiteD4);
    }

    #[test]
    fn display_and_strings() {
        assert_eq!(opening("Ruy Lopez", "C60", "").to_string(), "C60 Ruy Lopez");
        assert_eq!(Category::BlackVsE4.to_string(), "black-vs-e4");
        assert_eq!(Category::ALL.len(), 6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_record() {
        let json = r#"{
            "name": "Italian Game",
            "eco": "C50",
            "pgn": "1. e4 e5 2. Nf3 Nc6 3. Bc4",
            "fen": "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
            "parentName": "King's Pawn Game",
            "strategy": "Rapid development"
        }"#;
        let italian: Opening = serde_json::from_str(json).unwrap();
        assert_eq!(italian.eco, "C50");
        assert_eq!(italian.parent_name.as_deref(), Some("King's Pawn Game"));
        assert_eq!(italian.description, None);
        assert_eq!(italian.moves().len(), 5);

        let round_trip: Opening =
            serde_json::from_str(&serde_json::to_string(&italian).unwrap()).unwrap();
        assert_eq!(round_trip, italian);
    }
}
