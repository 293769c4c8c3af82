//! Monte Carlo Tree Search engine choosing the snake's next move.
//!
//! Each iteration walks the tree with UCT, expands the reached leaf with one child per legal
//! move, plays a random rollout from one of the new children and backpropagates the reward to
//! the root. After `max_iterations` passes the most visited root child is played.
//!
//! Every random draw (tie-breaks, rollout moves, fruit placement during simulation) comes from
//! the single [`StdRng`] owned by the engine, so a seed plus the sequence of root states fully
//! determines the answers.

use crate::game::direction::Direction;
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::grid::Grid;
use crate::game::is_terminal::is_terminal;
use crate::game::move_snake::move_snake;
use crate::mcts::hyperparameters::MctsHyperparameters;
use crate::mcts::mcts_result::{ChildStats, SearchOutcome};
use crate::mcts::node::{MctsNode, NodeId};
use crate::mcts::selection::select_leaf;
use crate::mcts::tree::{MctsTree, TreeStats};
use crate::scoring::reward::evaluate;
use crate::{Result, SnakeMctsError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct MctsEngine {
    tree: MctsTree,
    hyperparams: MctsHyperparameters,
    rng: StdRng,
    seed: u64,
    side: usize,
}

impl MctsEngine {
    /// Creates an engine rooted at `initial_state`.
    ///
    /// Fails on invalid hyperparameters or on a live board whose snake is not formed yet
    /// (fewer than two segments).
    pub fn new(initial_state: Grid, hyperparams: MctsHyperparameters) -> Result<Self> {
        hyperparams.validate()?;
        check_search_root(&initial_state)?;

        let seed = hyperparams.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "MCTS engine ready on {0}x{0} grid ({1}, effective seed {2})",
            initial_state.side(),
            hyperparams.to_config_string(),
            seed
        );

        Ok(Self {
            side: initial_state.side(),
            tree: MctsTree::new(initial_state),
            hyperparams,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Runs `max_iterations` search iterations and returns the most visited root action.
    pub fn run(&mut self) -> SearchOutcome {
        for _ in 0..self.hyperparams.max_iterations {
            self.iterate();
        }

        let stats = self.tree.stats();
        log::debug!(
            "search done: root visits {}, {} nodes, depth {}, mean reward {:.4}",
            stats.root_visits,
            stats.total_nodes,
            stats.max_depth,
            stats.root_value
        );

        let best = self.tree.most_visited_children(self.tree.root());
        if best.is_empty() {
            log::info!("MCTS reached the end of the game, no move available");
            return SearchOutcome::NoMoveAvailable;
        }

        let chosen = best[self.rng.random_range(0..best.len())];
        match self.tree.get(chosen).action {
            Some(action) => SearchOutcome::Move(action),
            None => SearchOutcome::NoMoveAvailable,
        }
    }

    /// Discards the whole tree and restarts from `new_state`.
    ///
    /// The state is not checked for reachability from the previous root.
    pub fn advance_root(&mut self, new_state: Grid) -> Result<()> {
        if new_state.side() != self.side {
            return Err(SnakeMctsError::InvalidGrid(format!(
                "grid side {} does not match the engine's side {}",
                new_state.side(),
                self.side
            )));
        }
        check_search_root(&new_state)?;

        log::trace!("discarding {} nodes, new root", self.tree.len());
        self.tree = MctsTree::new(new_state);
        Ok(())
    }

    pub fn root(&self) -> &MctsNode {
        self.tree.get(self.tree.root())
    }

    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    pub fn tree_stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// Visits and mean reward of every root child, in expansion order.
    pub fn root_child_stats(&self) -> Vec<ChildStats> {
        self.root()
            .children
            .iter()
            .map(|&id| self.tree.get(id))
            .filter_map(|child| {
                child.action.map(|action| ChildStats {
                    action,
                    visits: child.visits,
                    mean_reward: child.average_value(),
                })
            })
            .collect()
    }

    pub fn hyperparameters(&self) -> &MctsHyperparameters {
        &self.hyperparams
    }

    /// Seed the random stream was created from (drawn at construction when unseeded).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The engine's random stream, shared with the host game for fruit placement.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn iterate(&mut self) {
        let leaf = select_leaf(
            &self.tree,
            self.hyperparams.exploration_constant,
            &mut self.rng,
        );
        self.expand(leaf);
    }

    /// Expands `leaf` and backpropagates the reward of one of its new children.
    ///
    /// Terminal leaves (and leaves without any continuation) stay childless and score 0.
    fn expand(&mut self, leaf: NodeId) {
        let state = self.tree.get(leaf).state.clone();
        let actions = if is_terminal(&state) {
            Vec::new()
        } else {
            get_legal_moves(&state)
        };

        if actions.is_empty() {
            let reward = evaluate(&state, &state);
            self.tree.backpropagate(leaf, reward);
            return;
        }

        for action in actions {
            let next = move_snake(&state, action, &mut self.rng);
            self.tree.add_child(leaf, action, next);
        }

        let children = &self.tree.get(leaf).children;
        let child = children[self.rng.random_range(0..children.len())];
        let reward = rollout(
            &self.tree.get(child).state,
            self.hyperparams.max_rollout_depth,
            &mut self.rng,
        );
        self.tree.backpropagate(child, reward);
    }
}

/// Random playout from `start` until a terminal state or `max_depth` moves, scored against
/// `start`. Each move applies to the state left by the previous one.
fn rollout<R: Rng + ?Sized>(start: &Grid, max_depth: usize, rng: &mut R) -> f64 {
    let mut end = start.clone();

    let mut depth = 0;
    while depth < max_depth && !is_terminal(&end) {
        let actions = get_legal_moves(&end);
        if actions.is_empty() {
            break;
        }
        let action: Direction = actions[rng.random_range(0..actions.len())];
        end = move_snake(&end, action, rng);
        depth += 1;
    }

    evaluate(start, &end)
}

/// A live board needs a formed snake; collapsed (terminal) boards are accepted as-is.
fn check_search_root(state: &Grid) -> Result<()> {
    if !is_terminal(state) && state.snake_length() < 2 {
        return Err(SnakeMctsError::InvalidGrid(format!(
            "snake must have at least two segments before searching, found length {}",
            state.snake_length()
        )));
    }
    Ok(())
}
