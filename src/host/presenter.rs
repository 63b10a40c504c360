//! Presentation layer contract.

use crate::events::EngineEvent;
use crate::leaderboard::LeaderboardEntry;
use crate::session::{BoardSnapshot, StatusSnapshot};

/// What a UI must provide to be driven by `GameHost`.
///
/// All calls happen on the host's thread, between engine steps.
pub trait Presenter {
    /// Draw the board.
    fn render_board(&mut self, board: &BoardSnapshot);

    /// Draw score, level and remaining time.
    fn render_status(&mut self, status: &StatusSnapshot);

    /// Ask the player for a leaderboard name.
    ///
    /// Only called when the score qualifies. `None` means the player
    /// declined.
    fn prompt_for_name(&mut self, score: u32) -> Option<String>;

    /// Show the final leaderboard with a play-again option.
    fn show_leaderboard(&mut self, entries: &[LeaderboardEntry]);

    /// Observe an engine event. Default does nothing.
    fn on_event(&mut self, _event: &EngineEvent) {}
}
