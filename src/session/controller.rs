//! Level and score controller.
//!
//! The controller owns the `GameSession` and drives it: dealing boards,
//! forwarding flips to the match engine, adding score, moving between
//! levels, reacting to the round clock, and handing finished scores to
//! the leaderboard.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start_game--> Playing --clock expires--> GameOver
//!                               ^                          |
//!                               +-------start_game---------+
//! ```
//!
//! Clearing a board is an internal `Playing -> Playing` step: the next
//! board is dealt in place while score and clock carry over.

use log::{debug, info, warn};

use super::snapshot::{BoardSnapshot, StatusSnapshot};
use super::state::{GamePhase, GameSession, ResolutionTicket};
use crate::cards::Palette;
use crate::core::{EngineConfig, GameError, GameRng, Result};
use crate::deck::DeckGenerator;
use crate::events::EngineEvent;
use crate::leaderboard::{Leaderboard, LeaderboardStorage, LeaderboardStore};
use crate::matching::{FlipOutcome, MatchEngine, MatchState, RejectReason};
use crate::timer::TickOutcome;

/// Drives one player's games from start to leaderboard.
///
/// ## Example
///
/// ```
/// use flip_a_pair::core::{EngineConfig, GameRng};
/// use flip_a_pair::leaderboard::MemoryStorage;
/// use flip_a_pair::session::{GameController, GamePhase};
///
/// let mut game = GameController::new(EngineConfig::default(), GameRng::new(1), MemoryStorage::new())
///     .unwrap();
/// game.start_game().unwrap();
/// assert_eq!(game.phase(), GamePhase::Playing);
/// assert_eq!(game.status().level, 1);
/// assert_eq!(game.board_snapshot().unwrap().cells.len(), 4);
/// ```
#[derive(Debug)]
pub struct GameController<S> {
    config: EngineConfig,
    deck: DeckGenerator,
    leaderboard: LeaderboardStore<S>,
    phase: GamePhase,
    session: Option<GameSession>,
    /// Incremented on every start; invalidates old tickets.
    epoch: u64,
    next_sequence: u64,
    pending: Option<ResolutionTicket>,
    awaiting_submission: bool,
}

impl<S: LeaderboardStorage> GameController<S> {
    /// Create a controller using a numbered palette of `config.palette_size` faces.
    pub fn new(config: EngineConfig, rng: GameRng, storage: S) -> Result<Self> {
        let deck = DeckGenerator::new(Palette::with_size(config.palette_size), rng);
        Self::with_deck(config, deck, storage)
    }

    /// Create a controller with a custom deck generator.
    ///
    /// The deck's palette takes precedence over `config.palette_size`.
    pub fn with_deck(config: EngineConfig, deck: DeckGenerator, storage: S) -> Result<Self> {
        let config = config.with_palette_size(deck.palette().len());
        config.validate()?;

        let leaderboard = LeaderboardStore::open(storage, config.leaderboard_capacity);
        Ok(Self {
            config,
            deck,
            leaderboard,
            phase: GamePhase::NotStarted,
            session: None,
            epoch: 0,
            next_sequence: 0,
            pending: None,
            awaiting_submission: false,
        })
    }

    // === Lifecycle ===

    /// Begin a fresh game at level 1, discarding any previous session.
    pub fn start_game(&mut self) -> Result<Vec<EngineEvent>> {
        let board = self.deck.generate(1)?;
        let cards = board.len();

        self.epoch += 1;
        self.next_sequence = 0;
        self.pending = None;
        self.awaiting_submission = false;
        self.session = Some(GameSession::new(
            MatchEngine::with_match_score(board, self.config.match_score),
            self.config.round_seconds,
        ));
        self.phase = GamePhase::Playing;

        info!(
            "game {} started: {cards} cards, {} s on the clock",
            self.epoch, self.config.round_seconds
        );
        Ok(vec![EngineEvent::GameStarted { level: 1, cards }])
    }

    /// Forward a flip from the player.
    ///
    /// Rejections are reported as events, never as errors.
    pub fn request_flip(&mut self, index: usize) -> Vec<EngineEvent> {
        let rejected = |reason| vec![EngineEvent::FlipRejected { index, reason }];

        if !self.phase.is_playing() {
            return rejected(RejectReason::NotPlaying);
        }
        let Some(session) = self.session.as_mut() else {
            return rejected(RejectReason::NotPlaying);
        };

        match session.engine.flip(index) {
            FlipOutcome::Rejected(reason) => {
                debug!("flip {index} rejected: {reason:?}");
                rejected(reason)
            }
            FlipOutcome::Revealed => vec![EngineEvent::FlipAccepted(index)],
            FlipOutcome::PairPending(_) => {
                let ticket = ResolutionTicket {
                    epoch: self.epoch,
                    sequence: self.next_sequence,
                };
                self.next_sequence += 1;
                self.pending = Some(ticket);
                vec![
                    EngineEvent::FlipAccepted(index),
                    EngineEvent::ResolutionScheduled {
                        ticket,
                        delay_ms: self.config.peek_delay_ms,
                    },
                ]
            }
        }
    }

    /// Settle the pair a ticket was issued for.
    ///
    /// Stale tickets (restart, game over, already resolved) are ignored.
    pub fn resolve_pending(&mut self, ticket: ResolutionTicket) -> Result<Vec<EngineEvent>> {
        if self.pending != Some(ticket) || !self.phase.is_playing() {
            debug!("ignoring stale resolution ticket {ticket:?}");
            return Ok(Vec::new());
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(Vec::new());
        };
        self.pending = None;

        debug_assert_eq!(session.engine.state(), MatchState::PendingResolution);
        let resolution = session.engine.resolve()?;

        let mut events = Vec::with_capacity(2);
        if resolution.matched {
            session.score = session.score.saturating_add(resolution.score_delta);
            events.push(EngineEvent::MatchFound {
                indices: resolution.indices,
                score_delta: resolution.score_delta,
            });
        } else {
            events.push(EngineEvent::NoMatch {
                indices: resolution.indices,
            });
        }

        if resolution.board_cleared {
            let next_level = self.advance_level()?;
            events.push(EngineEvent::BoardCleared { next_level });
        }
        Ok(events)
    }

    /// Advance the round clock by one second.
    pub fn tick(&mut self) -> Vec<EngineEvent> {
        if !self.phase.is_playing() {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        match session.timer.tick() {
            TickOutcome::Idle => Vec::new(),
            TickOutcome::Ticked(remaining) => vec![EngineEvent::TimerTick { remaining }],
            TickOutcome::Expired => {
                let mut events = vec![EngineEvent::TimerTick { remaining: 0 }];
                events.extend(self.on_timer_expired());
                events
            }
        }
    }

    /// End the game because time ran out.
    ///
    /// A pair waiting for resolution is discarded unscored. Calling this
    /// outside `Playing` does nothing.
    pub fn on_timer_expired(&mut self) -> Vec<EngineEvent> {
        if !self.phase.is_playing() {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        if let Some(ticket) = self.pending.take() {
            debug!("cancelling resolution {ticket:?} on expiry");
        }
        session.engine.abandon_selection();
        session.timer.stop();
        let score = session.score;

        self.phase = GamePhase::GameOver;
        self.awaiting_submission = true;
        info!("game {} over at level {} with {score} points", self.epoch, session.level);

        vec![EngineEvent::TimerExpired, EngineEvent::GameOver { score }]
    }

    // === Leaderboard ===

    /// Does the finished game's score earn a leaderboard place?
    #[must_use]
    pub fn qualifies_for_leaderboard(&self) -> bool {
        self.awaiting_submission && self.leaderboard.admits(self.score())
    }

    /// Record the finished game's score under `name`.
    ///
    /// Fails with `NotAdmitted` when the score does not qualify; nothing
    /// is written. A blank name is an error and may be retried. A storage
    /// failure is not: it is reported as `PersistenceFailed` and the
    /// in-memory leaderboard keeps the entry.
    pub fn submit_score(&mut self, name: &str) -> Result<Vec<EngineEvent>> {
        if !self.awaiting_submission || self.phase != GamePhase::GameOver {
            return Err(GameError::SessionNotOver);
        }

        let score = self.score();
        if !self.leaderboard.admits(score) {
            debug!("score {score} does not qualify for the leaderboard");
            return Err(GameError::NotAdmitted { score });
        }
        let mut events = Vec::with_capacity(2);
        match self.leaderboard.submit(name, score) {
            Ok(_) => {}
            Err(GameError::Storage(e)) => {
                warn!("leaderboard not saved: {e}");
                events.push(EngineEvent::PersistenceFailed {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
        self.awaiting_submission = false;

        events.insert(
            0,
            EngineEvent::LeaderboardUpdated(self.leaderboard.leaderboard().entries().to_vec()),
        );
        Ok(events)
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        self.leaderboard.leaderboard()
    }

    #[must_use]
    pub fn leaderboard_storage(&self) -> &S {
        self.leaderboard.storage()
    }

    // === Snapshots ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::score)
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.session.as_ref().map_or(1, GameSession::level)
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.session
            .as_ref()
            .map_or(self.config.round_seconds, GameSession::time_remaining)
    }

    /// Ticket of the pair currently showing, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<ResolutionTicket> {
        self.pending
    }

    #[must_use]
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            score: self.score(),
            level: self.level(),
            time_remaining: self.time_remaining(),
            phase: self.phase,
        }
    }

    /// Visible board, or `None` before the first game.
    #[must_use]
    pub fn board_snapshot(&self) -> Option<BoardSnapshot> {
        self.session
            .as_ref()
            .map(|s| BoardSnapshot::from_board(s.engine.board()))
    }

    /// Deal the board after a clear.
    ///
    /// Levels stop at the palette's limit; clearing the top level deals
    /// another board of the same size.
    fn advance_level(&mut self) -> Result<u32> {
        let max_level = self.deck.max_level();
        let Some(session) = self.session.as_mut() else {
            return Err(GameError::InvalidResolution);
        };

        let next_level = if session.level < max_level {
            session.level + 1
        } else {
            warn!("level cap {max_level} reached, dealing the same size again");
            max_level
        };

        let board = self.deck.generate(next_level)?;
        info!("level {next_level}: {} cards", board.len());
        session.engine = MatchEngine::with_match_score(board, self.config.match_score);
        session.level = next_level;
        Ok(next_level)
    }
}
