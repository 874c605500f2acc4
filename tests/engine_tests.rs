//! End-to-end engine tests.
//!
//! These drive whole games through `Session` the way the REPL does, and
//! check the frozen deals, the error taxonomy, undo and replay.

use freecell_engine::core::{deal, Card, Destination, GameState, Move, MoveError};
use freecell_engine::rules::{FreeCellRules, RulesEngine};
use freecell_engine::session::{Outcome, Session};
use freecell_engine::zones::Location;
use freecell_engine::{GameConfig, GameRecord, DEFAULT_SEED};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(card).collect()
}

/// Test the default deal is frozen.
#[test]
fn test_default_deal_layout() {
    let expected = [
        "AH 3D KD JC 6C JD KC",
        "AS 3H 6H 5D 2C 7D 8D",
        "4H QS 5S 5C TH 8H 2S",
        "AC QC 4D 8C QH 9C 3S",
        "2D 8S 9H 9D 6D 2H",
        "6S 7H JH TD TC QD",
        "TS AD 9S KH 4S 4C",
        "JS KS 3C 7C 7S 5H",
    ];

    assert_eq!(DEFAULT_SEED, 11982);
    let session = Session::with_config(GameConfig::default());
    for (i, column) in expected.iter().enumerate() {
        assert_eq!(session.state().cascades()[i].cards(), cards(column).as_slice());
    }
    assert_eq!(deal(DEFAULT_SEED)[7], cards(expected[7]));
}

/// Test every card starts indexed at its dealt cascade and depth.
#[test]
fn test_fresh_deal_index() {
    let state = GameState::new(DEFAULT_SEED);

    assert_eq!(state.index().len(), 52);
    for (i, cascade) in state.cascades().iter().enumerate() {
        for (depth, &c) in cascade.cards().iter().enumerate() {
            let position = state.position(c).unwrap();
            assert_eq!(position.location, Location::Cascade);
            assert_eq!((position.index, position.depth), (i, depth));
            assert_eq!(position.weight, 0);
        }
    }
    assert!(state.open_cells().is_empty());
    assert!(state.foundations().iter().all(|f| f.is_empty()));
}

/// Test a buried card is refused and nothing moves.
#[test]
fn test_buried_card_not_playable() {
    let mut session = Session::new(DEFAULT_SEED);
    let before = session.state().clone();

    for line in ["ah f", "ah o", "ah c 3"] {
        assert_eq!(session.execute(line), Err(MoveError::NotExposed(card("AH"))));
    }

    assert_eq!(session.state(), &before);
    assert_eq!(session.state().move_count(), 0);
}

/// Test each error kind from a fresh default deal.
#[test]
fn test_error_taxonomy() {
    let mut session = Session::new(DEFAULT_SEED);

    assert_eq!(session.execute("ZZ F"), Err(MoveError::UnknownCard("ZZ".into())));
    assert_eq!(session.execute("KC"), Err(MoveError::Malformed("KC".into())));
    assert_eq!(session.execute("KC C"), Err(MoveError::Malformed("KC C".into())));
    assert_eq!(session.execute("KC X"), Err(MoveError::UnrecognizedCommand("X".into())));
    assert_eq!(session.execute("frob"), Err(MoveError::UnrecognizedCommand("FROB".into())));
    assert_eq!(
        session.execute("KC F"),
        Err(MoveError::IllegalMove { card: card("KC"), target: Destination::Foundation })
    );
    assert_eq!(
        session.execute("KC C 6"),
        Err(MoveError::IllegalMove { card: card("KC"), target: Destination::Cascade(6) })
    );

    assert_eq!(session.state().move_count(), 0);
}

/// Test error messages read the way the REPL prints them.
#[test]
fn test_error_messages() {
    let mut session = Session::new(DEFAULT_SEED);

    let err = session.execute("ah f").unwrap_err();
    assert_eq!(err.to_string(), "card not playable: AH");

    let err = session.execute("kc f").unwrap_err();
    assert_eq!(err.to_string(), "illegal move: KC to FOUNDATION");
}

/// Test the open pool holds at most four cards.
#[test]
fn test_open_cells_fill_up() {
    let mut session = Session::new(DEFAULT_SEED);

    for line in ["kc o", "8d o", "2s o", "3s o"] {
        assert!(matches!(session.execute(line), Ok(Outcome::Played(_))));
    }
    assert!(session.state().open_cells().is_full());

    let before = session.state().clone();
    assert_eq!(session.execute("2h o"), Err(MoveError::NoOpenCells));
    assert_eq!(session.state(), &before);

    assert_eq!(
        session.state().open_cells().cards(),
        cards("KC 8D 2S 3S").as_slice()
    );
}

/// Test a card can leave an open cell for a cascade but not for another cell.
#[test]
fn test_open_card_moves() {
    let mut session = Session::new(DEFAULT_SEED);
    session.execute("5h o").unwrap();

    assert_eq!(
        session.execute("5h o"),
        Err(MoveError::IllegalMove { card: card("5H"), target: Destination::Open })
    );

    // Uncover the black 6 in cascade 0, then bring 5H back down onto it
    session.execute("kc o").unwrap();
    session.execute("jd o").unwrap();
    session.execute("5h c 0").unwrap();

    let state = session.state();
    assert_eq!(state.cascades()[0].top(), Some(card("5H")));
    assert_eq!(state.position(card("5H")).unwrap().depth, 5);
    assert_eq!(state.open_cells().cards(), cards("KC JD").as_slice());
}

/// Test a legal cascade-to-cascade move updates both piles and the index.
#[test]
fn test_cascade_move() {
    let mut session = Session::new(DEFAULT_SEED);

    session.play(Move::to_cascade(card("4C"), 7)).unwrap();

    let state = session.state();
    assert_eq!(state.cascades()[6].top(), Some(card("4S")));
    assert_eq!(state.cascades()[7].top(), Some(card("4C")));
    let position = state.position(card("4C")).unwrap();
    assert_eq!((position.location, position.index, position.depth), (Location::Cascade, 7, 6));
    assert_eq!(state.log_line(), "REPLAY 4C CASCADE 7");
}

/// Test foundations build by suit and undo takes back one move.
#[test]
fn test_foundation_run_then_undo() {
    let mut session = Session::new(218);

    for line in ["AC F", "2C F", "3C F"] {
        assert!(matches!(session.execute(line), Ok(Outcome::Played(_))));
    }
    assert_eq!(session.state().foundation(0).len(), 3);
    assert_eq!(session.state().foundation(0).top(), Some(card("3C")));

    assert_eq!(session.execute("undo"), Ok(Outcome::Undone));

    assert_eq!(session.state().foundation(0).len(), 2);
    assert_eq!(session.state().move_count(), 2);
    assert_eq!(session.state().log_line(), "REPLAY AC F; 2C F");
    assert_eq!(session.state().cascades()[0].top(), Some(card("3C")));
}

/// Test undo all the way back matches a fresh deal.
#[test]
fn test_undo_to_start() {
    let mut session = Session::new(218);
    for line in ["AC F", "2C F", "3C F", "ks o"] {
        session.execute(line).unwrap();
    }

    while session.execute("u") == Ok(Outcome::Undone) {}

    assert_eq!(session.state(), &GameState::new(218));
}

/// Test replaying a log line rebuilds an identical state.
#[test]
fn test_replay_log_line() {
    let mut session = Session::new(218);
    for line in ["ac fou", "2c f", "3c foundation", "ts c 7", "ks o"] {
        assert!(matches!(session.execute(line), Ok(Outcome::Played(_))));
    }
    let line = session.state().log_line();

    let mut fresh = Session::new(218);
    let outcome = fresh.execute(&line).unwrap();

    match outcome {
        Outcome::Replayed(report) => assert!(report.is_clean()),
        other => panic!("expected replay, got {:?}", other),
    }
    assert_eq!(fresh.state(), session.state());

    // Replaying the same line again on the result is not a no-op: the moves
    // are no longer legal, and every one is reported
    let outcome = fresh.execute(&line).unwrap();
    match outcome {
        Outcome::Replayed(report) => assert_eq!(report.applied, 0),
        other => panic!("expected replay, got {:?}", other),
    }
    assert_eq!(fresh.state(), session.state());
}

/// Test a stored record survives binary encoding and restores the game.
#[test]
fn test_record_restore() {
    let mut session = Session::new(218);
    for line in ["AC F", "2C F", "3C F"] {
        session.execute(line).unwrap();
    }

    let bytes = GameRecord::from_state(session.state()).to_bytes().unwrap();
    let record = GameRecord::from_bytes(&bytes).unwrap();
    let (restored, report) = record.restore(GameConfig::default());

    assert!(report.is_clean());
    assert_eq!(restored.state(), session.state());
    assert_eq!(restored.config().seed, 218);
}

/// Test zap discards history but keeps the deal.
#[test]
fn test_zap_restarts_deal() {
    let mut session = Session::new(218);
    session.execute("AC F").unwrap();

    assert_eq!(session.execute("z"), Ok(Outcome::Zapped));
    assert_eq!(session.state(), &GameState::new(218));
    assert_eq!(session.execute("undo"), Ok(Outcome::NothingToUndo));
}

/// Test the rules engine can be driven without a session.
#[test]
fn test_rules_engine_directly() {
    let rules = FreeCellRules::new();
    let mut state = GameState::new(218);
    let mv = Move::to_foundation(card("AC"));

    assert_eq!(rules.validate(&state, &mv), Ok(()));
    rules.play(&mut state, &mv, "AC F").unwrap();

    assert_eq!(state.log_line(), "REPLAY AC F");
    assert_eq!(rules.validate(&state, &mv), Err(MoveError::NotExposed(card("AC"))));
    assert!(!rules.is_won(&state));
}

/// Test the snapshot serializes.
#[test]
fn test_snapshot_json() {
    let mut session = Session::new(218);
    session.execute("AC F").unwrap();

    let snapshot = session.state().snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();

    assert!(json.contains("\"AC\""));
    let parsed: freecell_engine::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.move_count, 1);
    assert!(!parsed.won);
}
