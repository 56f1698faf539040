use crate::search::{Action, NodeId, Point, SearchNode, Solution, SolutionStep, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node created during a search. Nodes refer to
/// their parents by [`NodeId`], which is the node's index in the space, so
/// the parent chain is just a sequence of lookups.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    pub fn new(initial_state: Point) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
        }
    }

    /// Create a node for `state`, reached from `parent_id` by `action`.
    pub fn insert_node(
        &mut self,
        state: Point,
        action: Action,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new_with_parent(node_id, state, parent_id, action));
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Walk the parent chain from `goal_node` back to the root and return the
    /// moves in forward order. The root itself has no move and is left out.
    pub fn extract_solution(&self, goal_node: &SearchNode) -> Solution {
        let mut steps = vec![];
        let mut current_node = goal_node;
        while NO_NODE != current_node.get_parent_id() {
            steps.push(SolutionStep {
                action: current_node.get_action(),
                cell: current_node.get_state(),
            });
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Solution::new(steps)
    }
}
