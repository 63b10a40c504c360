//! Single-threaded host loop gluing controller, clock and presenter.

use log::{debug, warn};

use super::presenter::Presenter;
use super::scheduler::{Scheduler, Task};
use crate::core::{GameError, Result};
use crate::events::EngineEvent;
use crate::leaderboard::LeaderboardStorage;
use crate::session::GameController;

/// Milliseconds between round clock ticks.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// How many blank names the player may enter before the prompt gives up.
pub const MAX_NAME_ATTEMPTS: usize = 3;

/// Drives a `GameController` on a virtual clock and reports to a `Presenter`.
///
/// The host feeds player flips in with [`flip`](Self::flip) and wall time
/// with [`advance`](Self::advance). Everything else (ticks, delayed
/// resolutions, the end-of-game leaderboard flow) follows from those.
pub struct GameHost<P, S> {
    controller: GameController<S>,
    presenter: P,
    scheduler: Scheduler,
}

impl<P: Presenter, S: LeaderboardStorage> GameHost<P, S> {
    pub fn new(controller: GameController<S>, presenter: P) -> Self {
        Self {
            controller,
            presenter,
            scheduler: Scheduler::new(),
        }
    }

    /// Start a new game and arm the clock.
    pub fn start(&mut self) -> Result<()> {
        self.scheduler.clear();
        let events = self.controller.start_game()?;
        self.scheduler.schedule_in(TICK_INTERVAL_MS, Task::TimerTick);
        self.dispatch(events)
    }

    /// "Play again" from the leaderboard screen.
    pub fn play_again(&mut self) -> Result<()> {
        self.start()
    }

    /// The player clicked a card.
    pub fn flip(&mut self, index: usize) -> Result<()> {
        let events = self.controller.request_flip(index);
        self.dispatch(events)
    }

    /// Let `elapsed_ms` of wall time pass, running everything that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Result<()> {
        let target = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(task) = self.scheduler.pop_due(target) {
            self.run(task)?;
        }
        self.scheduler.advance_to(target);
        Ok(())
    }

    #[must_use]
    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    fn run(&mut self, task: Task) -> Result<()> {
        let events = match task {
            Task::TimerTick => {
                let events = self.controller.tick();
                if self.controller.phase().is_playing() {
                    self.scheduler.schedule_in(TICK_INTERVAL_MS, Task::TimerTick);
                }
                events
            }
            Task::Resolve(ticket) => self.controller.resolve_pending(ticket)?,
        };
        self.dispatch(events)
    }

    fn dispatch(&mut self, events: Vec<EngineEvent>) -> Result<()> {
        let mut game_over = false;
        for event in &events {
            self.presenter.on_event(event);
            if let EngineEvent::ResolutionScheduled { ticket, delay_ms } = event {
                self.scheduler.schedule_in(*delay_ms, Task::Resolve(*ticket));
            }
            game_over |= event.is_game_over();
        }

        if events.is_empty() {
            return Ok(());
        }
        if let Some(board) = self.controller.board_snapshot() {
            self.presenter.render_board(&board);
        }
        self.presenter.render_status(&self.controller.status());

        if game_over {
            self.scheduler.cancel_where(|task| matches!(task, Task::Resolve(_)));
            self.finish_game()?;
        }
        Ok(())
    }

    fn finish_game(&mut self) -> Result<()> {
        if self.controller.qualifies_for_leaderboard() {
            let score = self.controller.score();
            for attempt in 1..=MAX_NAME_ATTEMPTS {
                let Some(name) = self.presenter.prompt_for_name(score) else {
                    debug!("player declined leaderboard entry");
                    break;
                };
                match self.controller.submit_score(&name) {
                    Ok(events) => {
                        for event in &events {
                            self.presenter.on_event(event);
                        }
                        break;
                    }
                    Err(GameError::InvalidName) => {
                        warn!("blank leaderboard name (attempt {attempt}/{MAX_NAME_ATTEMPTS})");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        self.presenter
            .show_leaderboard(self.controller.leaderboard().entries());
        Ok(())
    }
}
