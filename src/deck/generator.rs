//! Deck generation: dealing a shuffled board of pairs for a level.

use log::debug;

use crate::cards::{Board, CardIdentity, Palette, MIN_BOARD_CARDS};
use crate::core::{GameError, GameRng, Result};

/// Number of cards dealt at `level`: two per level plus one starting pair.
#[must_use]
pub fn cards_for_level(level: u32) -> usize {
    (level as usize).saturating_mul(2).saturating_add(2)
}

/// Deals boards from a palette with a seedable RNG.
///
/// ## Example
///
/// ```
/// use flip_a_pair::cards::Palette;
/// use flip_a_pair::core::GameRng;
/// use flip_a_pair::deck::DeckGenerator;
///
/// let mut deck = DeckGenerator::new(Palette::with_size(10), GameRng::new(42));
/// let board = deck.generate(3).unwrap();
/// assert_eq!(board.len(), 8);
/// assert_eq!(board.pair_count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    palette: Palette,
    rng: GameRng,
}

impl DeckGenerator {
    pub fn new(palette: Palette, rng: GameRng) -> Self {
        Self { palette, rng }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Highest level the palette can deal with all-distinct pairs.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        u32::try_from(self.palette.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Deal a face-down board for `level`.
    ///
    /// Picks `level + 1` distinct faces uniformly without replacement,
    /// doubles each, and shuffles the result.
    pub fn generate(&mut self, level: u32) -> Result<Board> {
        let cards = cards_for_level(level);
        if cards < MIN_BOARD_CARDS || cards % 2 != 0 {
            return Err(GameError::InvalidLevel { level, cards });
        }

        let pairs = cards / 2;
        if pairs > self.palette.len() {
            return Err(GameError::InsufficientAssets {
                required: pairs,
                available: self.palette.len(),
            });
        }

        let faces: Vec<CardIdentity> = self.rng.sample_distinct(self.palette.faces(), pairs);
        let mut deck = Vec::with_capacity(cards);
        deck.extend_from_slice(&faces);
        deck.extend_from_slice(&faces);
        self.rng.shuffle(&mut deck);

        debug!("dealt level {level}: {cards} cards from {} faces", self.palette.len());
        Board::from_identities(deck)
    }
}
