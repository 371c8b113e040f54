//! Life depletion tests.
//!
//! Lives drop at the mismatch and the re-deal happens at the resolution that
//! sees zero, so both boundaries are checked separately:
//! - `1 -> 0` on the mismatch
//! - `0 -> reset` on `resolve_mismatch`

use pairs_engine::{
    CardId, EngineConfig, EngineError, FaceId, GameEngine, Resolution, RoundStatus, SelectOutcome,
};

fn first_of(engine: &GameEngine, face: &str) -> CardId {
    let face = FaceId::from(face);
    let id = engine
        .state()
        .cards_with_face(&face)
        .next()
        .expect("face is dealt");
    id
}

fn miss(engine: &mut GameEngine) -> SelectOutcome {
    let a = first_of(engine, "A");
    let b = first_of(engine, "B");
    engine.select_card(a).unwrap();
    engine.select_card(b).unwrap()
}

/// 25 mismatches from a fresh deal empty the lives and force a re-deal.
#[test]
fn test_twenty_five_mismatches_reset_round() {
    let mut engine = GameEngine::new(EngineConfig::new(["A", "B"]), 42).unwrap();

    for expected in (1..25).rev() {
        assert_eq!(
            miss(&mut engine),
            SelectOutcome::Mismatch {
                first: first_of(&engine, "A"),
                second: first_of(&engine, "B"),
                lives_left: expected,
            }
        );
        assert_eq!(engine.resolve_mismatch(), Resolution::Hidden);
    }
    assert_eq!(engine.state().lives(), 1);
    assert_eq!(engine.state().attempts(), 48);

    assert!(matches!(miss(&mut engine), SelectOutcome::Mismatch { lives_left: 0, .. }));
    assert_eq!(engine.state().lives(), 0);

    assert_eq!(engine.resolve_mismatch(), Resolution::RoundReset);
    assert_eq!(engine.state().lives(), 25);
    assert_eq!(engine.state().score(), 0);
    assert_eq!(engine.state().attempts(), 0);
    assert_eq!(engine.state().round(), 2);
    assert!(engine.state().revealed().is_empty());
    assert_eq!(engine.state().pending_first_pick(), None);
}

/// The mismatch taking the last life shows lives 0 until resolved.
#[test]
fn test_boundary_one_to_zero() {
    let config = EngineConfig::builder().faces(["A", "B"]).starting_lives(1).build().unwrap();
    let mut engine = GameEngine::new(config, 8).unwrap();

    assert!(matches!(miss(&mut engine), SelectOutcome::Mismatch { lives_left: 0, .. }));
    assert_eq!(engine.state().lives(), 0);
    assert_eq!(engine.status(), RoundStatus::AwaitingResolution);
    assert_eq!(engine.state().round(), 1);

    // Still blocked until the host resolves
    let other = engine.state().deck()[0].id;
    assert_eq!(engine.select_card(other), Err(EngineError::ResolutionPending));
}

/// Resolving at zero lives deals a fresh round with full lives.
#[test]
fn test_boundary_zero_to_reset() {
    let config = EngineConfig::builder().faces(["A", "B", "C"]).starting_lives(1).build().unwrap();
    let mut engine = GameEngine::new(config, 8).unwrap();

    // Score something first so the reset is visible
    let c = FaceId::from("C");
    let cs: Vec<_> = engine.state().cards_with_face(&c).collect();
    engine.select_card(cs[0]).unwrap();
    engine.select_card(cs[1]).unwrap();
    assert_eq!(engine.state().score(), 1);

    miss(&mut engine);
    assert_eq!(engine.resolve_mismatch(), Resolution::RoundReset);

    let state = engine.state();
    assert_eq!(state.lives(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.streak(), 0);
    assert!(state.matched().is_empty());
    assert_eq!(state.deck().len(), 6);
    assert!(state.history().is_empty());
}

/// Running out of lives re-deals with the face set of the last reset.
#[test]
fn test_exhaustion_redeals_current_face_set() {
    let config = EngineConfig::builder().faces(["A", "B"]).starting_lives(1).build().unwrap();
    let mut engine = GameEngine::new(config, 21).unwrap();
    engine.reset(["A", "B", "Z"]).unwrap();

    miss(&mut engine);
    assert_eq!(engine.resolve_mismatch(), Resolution::RoundReset);

    let state = engine.state();
    assert_eq!(state.deck().len(), 6);
    assert_eq!(state.lives(), 1);
    assert_eq!(state.cards_with_face(&FaceId::from("Z")).count(), 2);
}

/// Matches never cost lives.
#[test]
fn test_matches_keep_lives() {
    let mut engine = GameEngine::new(EngineConfig::new(["A", "B"]), 3).unwrap();
    for face in ["A", "B"] {
        let face = FaceId::from(face);
        let ids: Vec<_> = engine.state().cards_with_face(&face).collect();
        engine.select_card(ids[0]).unwrap();
        engine.select_card(ids[1]).unwrap();
    }
    assert_eq!(engine.state().lives(), 25);
}
