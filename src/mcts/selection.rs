//! UCT selection.
//!
//! Formula: mean_reward + c × sqrt(ln(N_parent) / N_child), with never-visited children
//! scored `+inf` so every sibling is tried once before any is exploited. Exact ties are broken
//! uniformly at random from the engine's stream.

use crate::mcts::node::{MctsNode, NodeId};
use crate::mcts::tree::MctsTree;
use rand::Rng;

/// UCT score of `child` under a parent visited `parent_visits` times.
pub fn uct_score(child: &MctsNode, parent_visits: usize, exploration_constant: f64) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }
    let exploitation = child.average_value();
    let exploration = ((parent_visits as f64).ln() / child.visits as f64).sqrt();
    exploitation + exploration_constant * exploration
}

/// Picks the child of `node` with the highest UCT score, `None` for a leaf.
pub fn select_child<R: Rng + ?Sized>(
    tree: &MctsTree,
    node: NodeId,
    exploration_constant: f64,
    rng: &mut R,
) -> Option<NodeId> {
    let parent = tree.get(node);
    let mut best_score = f64::NEG_INFINITY;
    let mut best_children: Vec<NodeId> = Vec::new();

    for &child_id in &parent.children {
        let score = uct_score(tree.get(child_id), parent.visits, exploration_constant);
        if score > best_score {
            best_score = score;
            best_children.clear();
            best_children.push(child_id);
        } else if score == best_score {
            best_children.push(child_id);
        }
    }

    if best_children.is_empty() {
        return None;
    }
    Some(best_children[rng.random_range(0..best_children.len())])
}

/// Walks from the root down to a childless node.
pub fn select_leaf<R: Rng + ?Sized>(
    tree: &MctsTree,
    exploration_constant: f64,
    rng: &mut R,
) -> NodeId {
    let mut current = tree.root();
    while let Some(child) = select_child(tree, current, exploration_constant, rng) {
        current = child;
    }
    current
}
