//! MCTS node representation.

use crate::position::GamePosition;

/// A node in the MCTS arena
///
/// Parent and children are arena indices. Values are accumulated from the root
/// player's point of view.
#[derive(Debug, Clone)]
pub struct MctsNode<P: GamePosition> {
    /// Private copy of the position this node represents
    pub position: P,
    pub parent: Option<usize>,
    /// Move that led here from the parent
    pub mv: Option<P::Move>,
    /// Legal moves not yet expanded into children, popped from the back
    pub untried: Vec<P::Move>,
    pub children: Vec<usize>,
    pub visits: u32,
    pub value: f64,
}

impl<P: GamePosition> MctsNode<P> {
    /// Create a node; terminal positions get no moves to expand
    pub fn new(position: P, parent: Option<usize>, mv: Option<P::Move>) -> Self {
        let untried = if position.is_terminal() {
            Vec::new()
        } else {
            position.legal_moves()
        };
        MctsNode {
            position,
            parent,
            mv,
            untried,
            children: Vec::new(),
            visits: 0,
            value: 0.0,
        }
    }

    /// Mean backed-up value, 0 before the first visit
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / f64::from(self.visits)
        }
    }

    /// UCT score of this node as seen from a parent with `parent_visits` visits
    pub fn uct(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(self.visits);
        self.value / visits + exploration * ((f64::from(parent_visits) + 1.0).ln() / visits).sqrt()
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }
}
