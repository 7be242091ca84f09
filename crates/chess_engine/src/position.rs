//! The position contract every search strategy is written against
//!
//! Searches never look inside a board. They only enumerate legal moves, apply and undo
//! them, and ask the terminal-state questions below, so any game implementing
//! [`GamePosition`] can be searched. [`crate::game::Game`] is the chess implementation.

use crate::error::ChessEngineResult;
use std::fmt::Debug;
use std::hash::Hash;

pub use crate::types::Color;

/// Mutable game state consumed by the searches
///
/// `apply` followed by `undo` must leave the position equal to what it was before.
pub trait GamePosition: Clone {
    /// Opaque move value; only meaningful for the position whose `legal_moves` produced it
    type Move: Copy + Eq + Hash + Debug;

    /// Legal moves for the side to move, in a stable generation order
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play a move taken from [`GamePosition::legal_moves`]
    fn apply(&mut self, mv: Self::Move);

    /// Revert the most recently applied move
    fn undo(&mut self) -> ChessEngineResult<()>;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    /// Whether the side to move could claim a draw (repetition or move-count rules)
    fn is_draw_claimable(&self) -> bool;

    /// Whether the game has ended; searches stop expanding here
    fn is_terminal(&self) -> bool {
        self.is_checkmate() || self.is_stalemate() || self.is_draw_claimable()
    }

    fn is_capture(&self, mv: Self::Move) -> bool;

    fn side_to_move(&self) -> Color;
}
