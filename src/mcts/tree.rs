//! Search tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by [`NodeId`]. The arena is the single
//! owner of every node; replacing the tree drops all of them together.

use crate::game::direction::Direction;
use crate::game::grid::Grid;
use crate::mcts::node::{MctsNode, NodeId};

#[derive(Debug, Clone)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
    root: NodeId,
}

impl MctsTree {
    /// Single-node tree rooted at `root_state`.
    pub fn new(root_state: Grid) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[MctsNode] {
        &self.nodes
    }

    /// Allocates a child of `parent` and links it. Returns the new id.
    pub fn add_child(&mut self, parent: NodeId, action: Direction, state: Grid) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MctsNode::new_child(parent, action, state));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Adds one visit and `reward` to `leaf` and every ancestor up to the root.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.total_reward += reward;
            current = node.parent;
        }
    }

    /// Children of `id` sharing the highest visit count, in insertion order.
    pub fn most_visited_children(&self, id: NodeId) -> Vec<NodeId> {
        let children = &self.get(id).children;
        let Some(best) = children.iter().map(|&c| self.get(c).visits).max() else {
            return Vec::new();
        };
        children
            .iter()
            .copied()
            .filter(|&c| self.get(c).visits == best)
            .collect()
    }

    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_value: root.average_value(),
            max_depth: self.max_depth(),
        }
    }

    fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.get(id).children.iter().map(|&c| (c, depth + 1)));
        }
        deepest
    }
}

/// Statistics about a search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: usize,
    pub root_value: f64,
    pub max_depth: usize,
}
