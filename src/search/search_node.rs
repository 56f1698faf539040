use crate::search::{Action, HeuristicValue, Point};
use ordered_float::Float;

/// Index of a node in its [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(id: usize) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the frontier
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is one state reached during search, together with the
/// information needed to rebuild the path to it: the parent node and the move
/// taken from the parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Position of the node in the search space
    node_id: NodeId,
    /// Maze cell this node represents
    state: Point,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, the estimated total cost through this node.
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost to reach this node. Strategies that
    /// do not order by cost still record the path length here.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the remaining cost
    /// to the goal. Zero for uninformed strategies.
    h: HeuristicValue,
    /// Move that led to this node
    action: Action,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
}

impl SearchNode {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: Point) -> Self {
        Self {
            node_id,
            state,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: Action::None,
            parent_id: NO_NODE,
        }
    }

    /// Create a new search node with a parent. This should be used for all
    /// nodes that are not the root node. For root nodes see
    /// [`SearchNode::new_without_parent`].
    pub fn new_with_parent(
        node_id: NodeId,
        state: Point,
        parent_id: NodeId,
        action: Action,
    ) -> Self {
        debug_assert!(parent_id < node_id, "Parent must be created before child");
        Self {
            node_id,
            state,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action,
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::New,
            "Node must be new to open it"
        );
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> Point {
        self.state
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Action {
        self.action
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut node = SearchNode::new_without_parent(NodeId::new(0), Point::new(1, 1));
        assert!(node.is_root());
        assert_eq!(node.get_action(), Action::None);
        assert_eq!(node.get_status(), SearchNodeStatus::New);
        assert!(node.get_f().is_infinite());

        node.open(2.0.into(), 3.0.into());
        assert_eq!(node.get_status(), SearchNodeStatus::Open);
        assert_eq!(node.get_f().into_inner(), 5.0);

        node.close();
        assert_eq!(node.get_status(), SearchNodeStatus::Closed);
    }

    #[test]
    fn child_keeps_parent() {
        let child = SearchNode::new_with_parent(
            NodeId::new(3),
            Point::new(0, 1),
            NodeId::new(1),
            Action::Right,
        );
        assert!(!child.is_root());
        assert_eq!(child.get_parent_id(), NodeId::new(1));
        assert_eq!(child.get_action(), Action::Right);
    }
}
