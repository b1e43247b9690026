//! Reading move tokens the way opening datasets write them.

use openings_engine::*;

fn final_fen(line: &str) -> Replay {
    PositionEngine::standard().final_position(&MoveSequence::parse(line))
}

fn assert_replays(line: &str, expected_fen: &str) {
    let replay = final_fen(line);
    assert!(replay.is_complete(), "{line} halted at {:?}", replay.halted_at);
    assert_eq!(replay.fen, expected_fen, "{line}");
}

#[test]
fn castling_both_sides() {
    assert_replays(
        "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. O-O Nf6",
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 w kq - 6 5",
    );
    assert_replays(
        "1. d4 d5 2. Nc3 Nc6 3. Bf4 Bf5 4. Qd2 Qd7 5. 0-0-0 O-O-O",
        "2kr1bnr/pppqpppp/2n5/3p1b2/3P1B2/2N5/PPPQPPPP/2KR1BNR w - - 8 6",
    );
}

#[test]
fn castling_through_check_is_rejected() {
    // The bishop on a6 covers f1.
    let replay = final_fen("1. e4 b6 2. Nf3 Ba6 3. g3 e6 4. Bh3 g6 5. O-O");
    assert_eq!(replay.halted_at, Some(8));
}

#[test]
fn en_passant_capture() {
    assert_replays(
        "1. e4 a6 2. e5 d5 3. exd6",
        "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3",
    );
    assert_replays(
        "1. e4 a6 2. e5 d5 3. exd6e.p.",
        "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3",
    );
}

#[test]
fn promotion_forms() {
    let line = "1. h4 g5 2. hxg5 h6 3. gxh6 Nf6 4. h7 Rg8 5. hxg8";
    let queen = "rnbqkbQ1/pppppp2/5n2/8/8/8/PPPPPPP1/RNBQKBNR b KQq - 0 5";
    for promotion in ["=Q", "Q", "=q"] {
        assert_replays(&format!("{line}{promotion}"), queen);
    }
    assert_replays(
        &format!("{line}=N"),
        "rnbqkbN1/pppppp2/5n2/8/8/8/PPPPPPP1/RNBQKBNR b KQq - 0 5",
    );
    let bishop = "rnbqkbB1/pppppp2/5n2/8/8/8/PPPPPPP1/RNBQKBNR b KQq - 0 5";
    for promotion in ["=B", "=b"] {
        assert_replays(&format!("{line}{promotion}"), bishop);
    }
}

#[test]
fn disambiguation_by_file_and_rank() {
    assert_replays(
        "1. Nf3 d5 2. d3 e5 3. Nbd2",
        "rnbqkbnr/ppp2ppp/8/3pp3/8/3P1N2/PPPNPPPP/R1BQKB1R b KQkq - 1 3",
    );
    assert_replays(
        "1. Nf3 d5 2. d3 e5 3. Nfd2",
        "rnbqkbnr/ppp2ppp/8/3pp3/8/3P4/PPPNPPPP/RNBQKB1R b KQkq - 1 3",
    );
    // Rooks on a1 and a3 both reach a2.
    let rooks = "1. a4 a5 2. h4 h5 3. Rh3 Rh6 4. Rha3 Rha6 5.";
    assert_replays(
        &format!("{rooks} R1a2"),
        "rnbqkbn1/1pppppp1/r7/p6p/P6P/R7/RPPPPPP1/1NBQKBN1 b q - 5 5",
    );
    assert_eq!(final_fen(&format!("{rooks} Ra2")).halted_at, Some(8));
    let ambiguous = final_fen("1. Nf3 d5 2. d3 e5 3. Nd2");
    assert_eq!(ambiguous.halted_at, Some(4));
}

#[test]
fn suffixes_and_glyphs() {
    let expected = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2";
    for line in ["e4 e5 Nf3", "e4! e5?! Nf3+", "e4 e5 Ng1-f3", "e2e4 e7e5 g1f3", "e4 e5 Nf3#"] {
        assert_replays(line, expected);
    }
}

#[test]
fn case_fallbacks() {
    let expected = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2";
    assert_replays("E4 E5 Nf3", expected);
    assert_replays("e4 E5 Nf3", expected);

    let castle = final_fen("1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. o-o");
    assert!(castle.is_complete());
    assert!(castle.fen.contains("RNBQ1RK1"));
}

#[test]
fn fallback_order_is_public() {
    assert_eq!(
        Fallback::ORDER,
        [
            Fallback::Exact,
            Fallback::Lowercase,
            Fallback::Uppercase,
            Fallback::StripAnnotations
        ]
    );
}

#[test]
fn unresolvable_tokens_halt() {
    for (line, halted_at) in [
        ("e4 e5 Ke3", 2),
        ("e4 e5 Nf3 Nf6 Nxe5 Nxe4 Qe2 Nf6 Nc6+ ??", 9),
        ("1. e4 e5 2. e5", 2),
        ("e4 e5 Nf3 Nc6 Bb5 a6 Bxc6 dxc6 O-O f6 Xx", 10),
    ] {
        assert_eq!(final_fen(line).halted_at, Some(halted_at), "{line}");
    }
}
