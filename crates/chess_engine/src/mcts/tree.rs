//! MCTS tree operations.
//!
//! [`MctsTree`] owns the arena of nodes and runs the selection, expansion, simulation
//! and backup cycle. The whole tree is dropped when the search returns.

use super::config::MctsConfig;
use super::node::MctsNode;
use super::rollout::simulate;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use crate::types::Color;
use rand::Rng;

const ROOT: usize = 0;

/// Visit statistics of one root child
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildStats<M> {
    pub mv: M,
    pub visits: u32,
    pub value: f64,
}

/// Arena-based MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsTree<P: GamePosition> {
    nodes: Vec<MctsNode<P>>,
    root_color: Color,
}

impl<P: GamePosition> MctsTree<P> {
    /// Create a tree rooted at a copy of `position`
    ///
    /// The root always lists its legal moves, even if the position reports a claimable
    /// draw, so a move can still be chosen there.
    pub fn new(position: &P) -> Self {
        let mut root = MctsNode::new(position.clone(), None, None);
        root.untried = position.legal_moves();
        MctsTree {
            nodes: vec![root],
            root_color: position.side_to_move(),
        }
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_visits(&self) -> u32 {
        self.nodes[ROOT].visits
    }

    /// Statistics of the root's children in expansion order
    pub fn child_stats(&self) -> Vec<ChildStats<P::Move>> {
        self.nodes[ROOT]
            .children
            .iter()
            .filter_map(|&idx| {
                let node = &self.nodes[idx];
                Some(ChildStats {
                    mv: node.mv?,
                    visits: node.visits,
                    value: node.value,
                })
            })
            .collect()
    }

    /// Run `simulations` select / expand / simulate / backup cycles
    pub fn run<E, R>(&mut self, simulations: u32, config: &MctsConfig, evaluator: &E, rng: &mut R)
    where
        E: Evaluator<P>,
        R: Rng + ?Sized,
    {
        for _ in 0..simulations {
            let leaf = self.select(config.exploration);
            let node = self.expand(leaf);
            let result = simulate(
                self.nodes[node].position.clone(),
                self.root_color,
                config,
                evaluator,
                rng,
            );
            self.backup(node, result);
        }
    }

    /// Descend through fully expanded nodes along the highest UCT score
    fn select(&self, exploration: f64) -> usize {
        let mut current = ROOT;
        loop {
            let node = &self.nodes[current];
            if !node.is_fully_expanded() || node.children.is_empty() {
                return current;
            }
            let parent_visits = node.visits;
            let mut best = node.children[0];
            let mut best_score = f64::NEG_INFINITY;
            for &child in &node.children {
                let score = self.nodes[child].uct(parent_visits, exploration);
                if score > best_score {
                    best_score = score;
                    best = child;
                }
            }
            current = best;
        }
    }

    /// Expand one untried move of `idx`, returning the new child (or `idx` if nothing is left)
    fn expand(&mut self, idx: usize) -> usize {
        let Some(mv) = self.nodes[idx].untried.pop() else {
            return idx;
        };
        let mut position = self.nodes[idx].position.clone();
        position.apply(mv);

        let child = self.nodes.len();
        self.nodes.push(MctsNode::new(position, Some(idx), Some(mv)));
        self.nodes[idx].children.push(child);
        child
    }

    /// Add one visit and `result` to every node from `idx` up to the root
    fn backup(&mut self, idx: usize, result: f64) {
        let mut current = Some(idx);
        while let Some(i) = current {
            let node = &mut self.nodes[i];
            node.visits += 1;
            node.value += result;
            current = node.parent;
        }
    }

    /// Move of the most visited root child; the first expanded wins ties
    pub fn best_move(&self) -> ChessEngineResult<P::Move> {
        let mut best: Option<&MctsNode<P>> = None;
        for &idx in &self.nodes[ROOT].children {
            let node = &self.nodes[idx];
            if best.map_or(true, |b| node.visits > b.visits) {
                best = Some(node);
            }
        }
        best.and_then(|node| node.mv).ok_or_else(|| ChessEngineError::NoMoveFound {
            strategy: "mcts".to_string(),
        })
    }
}
