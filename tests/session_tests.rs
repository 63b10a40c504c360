//! Game session integration tests.
//!
//! These tests drive a `GameController` through whole games: matching
//! pairs, clearing levels, and running the clock out. A second generator
//! built from the same seed tells the tests where each pair sits.

use flip_a_pair::cards::{CardIdentity, Palette};
use flip_a_pair::core::{EngineConfig, GameRng};
use flip_a_pair::deck::DeckGenerator;
use flip_a_pair::events::EngineEvent;
use flip_a_pair::leaderboard::MemoryStorage;
use flip_a_pair::matching::RejectReason;
use flip_a_pair::session::{CellView, GameController, GamePhase};

const SEED: u64 = 31;

fn new_game(config: EngineConfig) -> GameController<MemoryStorage> {
    GameController::new(config, GameRng::new(SEED), MemoryStorage::new()).unwrap()
}

/// Faces of the boards a same-seed controller will deal, level by level.
fn shadow_faces(levels: u32) -> Vec<Vec<CardIdentity>> {
    let mut deck = DeckGenerator::new(Palette::with_size(10), GameRng::new(SEED));
    (1..=levels)
        .map(|level| {
            deck.generate(level)
                .unwrap()
                .cells()
                .iter()
                .map(|c| c.identity())
                .collect()
        })
        .collect()
}

fn pairs_of(faces: &[CardIdentity]) -> Vec<[usize; 2]> {
    let mut pairs = Vec::new();
    for (i, face) in faces.iter().enumerate() {
        if let Some(j) = faces[i + 1..].iter().position(|f| f == face) {
            pairs.push([i, i + 1 + j]);
        }
    }
    pairs
}

fn play_pair(game: &mut GameController<MemoryStorage>, [a, b]: [usize; 2]) -> Vec<EngineEvent> {
    assert_eq!(game.request_flip(a), vec![EngineEvent::FlipAccepted(a)]);
    let events = game.request_flip(b);
    let Some(EngineEvent::ResolutionScheduled { ticket, delay_ms }) = events.last().cloned() else {
        panic!("second flip should schedule a resolution, got {events:?}");
    };
    assert_eq!(delay_ms, 500);
    game.resolve_pending(ticket).unwrap()
}

// =============================================================================
// Matching and level progression
// =============================================================================

/// Level 1: two matches clear the board and deal level 2.
#[test]
fn test_clearing_level_one() {
    let boards = shadow_faces(1);
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();

    let pairs = pairs_of(&boards[0]);
    assert_eq!(pairs.len(), 2);

    let first = play_pair(&mut game, pairs[0]);
    assert_eq!(
        first,
        vec![EngineEvent::MatchFound {
            indices: pairs[0],
            score_delta: 10
        }]
    );

    let second = play_pair(&mut game, pairs[1]);
    assert_eq!(
        second,
        vec![
            EngineEvent::MatchFound {
                indices: pairs[1],
                score_delta: 10
            },
            EngineEvent::BoardCleared { next_level: 2 },
        ]
    );

    let status = game.status();
    assert_eq!(status.score, 20);
    assert_eq!(status.level, 2);
    assert_eq!(status.phase, GamePhase::Playing);

    let board = game.board_snapshot().unwrap();
    assert_eq!(board.cells.len(), 6);
    assert!(board.cells.iter().all(|c| *c == CellView::Hidden));
}

/// Score accumulates over several levels and the clock carries over.
#[test]
fn test_progress_through_three_levels() {
    let boards = shadow_faces(3);
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();

    for _ in 0..5 {
        game.tick();
    }

    for (level, faces) in boards.iter().enumerate() {
        assert_eq!(game.level(), level as u32 + 1);
        for pair in pairs_of(faces) {
            play_pair(&mut game, pair);
        }
    }

    // 2 + 3 + 4 pairs
    assert_eq!(game.score(), 90);
    assert_eq!(game.level(), 4);
    assert_eq!(game.time_remaining(), 55);
}

/// A mismatch flips both cards back and scores nothing.
#[test]
fn test_mismatch_hides_both_cards() {
    let boards = shadow_faces(1);
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();

    let faces = &boards[0];
    let other = (1..4).find(|&i| faces[i] != faces[0]).unwrap();

    assert_eq!(
        play_pair(&mut game, [0, other]),
        vec![EngineEvent::NoMatch { indices: [0, other] }]
    );
    assert_eq!(game.score(), 0);
    assert_eq!(game.board_snapshot().unwrap().hidden_count(), 4);
}

/// While a pair is showing, further flips are refused.
#[test]
fn test_third_flip_rejected_while_pending() {
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();
    game.request_flip(0);
    game.request_flip(1);

    assert_eq!(
        game.request_flip(2),
        vec![EngineEvent::FlipRejected {
            index: 2,
            reason: RejectReason::PendingResolution
        }]
    );
}

/// Flipping the same card twice is refused.
#[test]
fn test_same_card_twice_rejected() {
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();
    game.request_flip(3);

    assert_eq!(
        game.request_flip(3),
        vec![EngineEvent::FlipRejected {
            index: 3,
            reason: RejectReason::AlreadyRevealed
        }]
    );
}

/// Matched cards stay matched and cannot be flipped.
#[test]
fn test_matched_card_rejected() {
    let boards = shadow_faces(2);
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();

    // Clear level 1, then match one pair on level 2.
    for pair in pairs_of(&boards[0]) {
        play_pair(&mut game, pair);
    }
    let pair = pairs_of(&boards[1])[0];
    play_pair(&mut game, pair);

    let board = game.board_snapshot().unwrap();
    assert!(matches!(board.cells[pair[0]], CellView::Matched(_)));
    assert_eq!(
        game.request_flip(pair[0]),
        vec![EngineEvent::FlipRejected {
            index: pair[0],
            reason: RejectReason::AlreadyMatched
        }]
    );
}

/// Indices past the end are refused.
#[test]
fn test_out_of_bounds_flip() {
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();

    assert_eq!(
        game.request_flip(4),
        vec![EngineEvent::FlipRejected {
            index: 4,
            reason: RejectReason::OutOfBounds
        }]
    );
}

// =============================================================================
// Round clock
// =============================================================================

/// Sixty ticks end the game exactly once.
#[test]
fn test_timer_runs_out() {
    let mut game = new_game(EngineConfig::default());
    game.start_game().unwrap();

    let mut expirations = 0;
    let mut last_remaining = None;
    for _ in 0..60 {
        for event in game.tick() {
            match event {
                EngineEvent::TimerTick { remaining } => last_remaining = Some(remaining),
                EngineEvent::TimerExpired => expirations += 1,
                _ => {}
            }
        }
    }

    assert_eq!(expirations, 1);
    assert_eq!(last_remaining, Some(0));
    assert_eq!(game.phase(), GamePhase::GameOver);

    // Further ticks are silent.
    assert!(game.tick().is_empty());
    assert_eq!(game.time_remaining(), 0);
}

/// No flips once the clock has expired.
#[test]
fn test_flip_after_expiry_rejected() {
    let mut game = new_game(EngineConfig::default().with_round_seconds(3));
    game.start_game().unwrap();
    for _ in 0..3 {
        game.tick();
    }

    assert_eq!(
        game.request_flip(0),
        vec![EngineEvent::FlipRejected {
            index: 0,
            reason: RejectReason::NotPlaying
        }]
    );
}

/// The final score is reported with the game-over event.
#[test]
fn test_game_over_carries_score() {
    let boards = shadow_faces(1);
    let mut game = new_game(EngineConfig::default().with_round_seconds(2));
    game.start_game().unwrap();

    play_pair(&mut game, pairs_of(&boards[0])[0]);
    game.tick();
    let events = game.tick();

    assert_eq!(
        events,
        vec![
            EngineEvent::TimerTick { remaining: 0 },
            EngineEvent::TimerExpired,
            EngineEvent::GameOver { score: 10 },
        ]
    );
}

/// Starting again after game over resets score, level and clock.
#[test]
fn test_restart_after_game_over() {
    let boards = shadow_faces(1);
    let mut game = new_game(EngineConfig::default().with_round_seconds(1));
    game.start_game().unwrap();
    play_pair(&mut game, pairs_of(&boards[0])[0]);
    game.tick();
    assert_eq!(game.phase(), GamePhase::GameOver);

    game.start_game().unwrap();
    let status = game.status();
    assert_eq!(status.score, 0);
    assert_eq!(status.level, 1);
    assert_eq!(status.time_remaining, 1);
    assert_eq!(status.phase, GamePhase::Playing);
}
