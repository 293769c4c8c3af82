//! Search tree vertex.
//!
//! Nodes live in the arena owned by [`crate::mcts::tree::MctsTree`]. Children are owned by
//! the arena and listed by id; the parent link is a plain index that never keeps anything
//! alive, so dropping the arena releases the whole tree at once.

use crate::game::direction::Direction;
use crate::game::grid::Grid;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MctsNode {
    /// Parent node index (`None` for the root)
    pub parent: Option<NodeId>,

    /// Move that produced this state from the parent (`None` for the root)
    pub action: Option<Direction>,

    /// World state represented by this node
    pub state: Grid,

    /// Number of completed iterations that passed through this node
    pub visits: usize,

    /// Sum of rewards backpropagated through this node
    pub total_reward: f64,

    /// One child per legal action, filled once by expansion
    pub children: Vec<NodeId>,
}

impl MctsNode {
    pub fn new_root(state: Grid) -> Self {
        MctsNode {
            parent: None,
            action: None,
            state,
            visits: 0,
            total_reward: 0.0,
            children: Vec::new(),
        }
    }

    pub fn new_child(parent: NodeId, action: Direction, state: Grid) -> Self {
        MctsNode {
            parent: Some(parent),
            action: Some(action),
            state,
            visits: 0,
            total_reward: 0.0,
            children: Vec::new(),
        }
    }

    /// Mean reward, 0 for an unvisited node.
    pub fn average_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
