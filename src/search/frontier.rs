//! The frontier (open list) of a search. Which node is removed next is the
//! only thing that distinguishes most search strategies, so the frontier is a
//! single type parameterised by a [`FrontierKind`].

use crate::search::{HeuristicValue, NodeId, Point, SearchNode};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frontier is empty")]
pub struct EmptyFrontierError;

/// The removal order of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// Last in, first out.
    Stack,
    /// First in, first out.
    Queue,
    /// Lowest heuristic value first.
    HeuristicPriority,
    /// Lowest `g + h` first.
    CostHeuristicPriority,
    /// Lowest cost to reach first.
    CostPriority,
}

impl FrontierKind {
    fn priority(&self, node: &SearchNode) -> HeuristicValue {
        match self {
            FrontierKind::Stack | FrontierKind::Queue => (0.).into(),
            FrontierKind::HeuristicPriority => node.get_h(),
            FrontierKind::CostHeuristicPriority => node.get_f(),
            FrontierKind::CostPriority => node.get_g(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FrontierEntry {
    node_id: NodeId,
    state: Point,
}

/// Ties on the priority value go to the entry pushed first.
type Priority = Reverse<(HeuristicValue, usize)>;

#[derive(Debug)]
enum OpenList {
    Stack(Vec<FrontierEntry>),
    Queue(VecDeque<FrontierEntry>),
    Priority(PriorityQueue<FrontierEntry, Priority>),
}

#[derive(Debug)]
pub struct Frontier {
    kind: FrontierKind,
    open_list: OpenList,
    /// States currently in the open list, for membership tests.
    states: HashSet<Point>,
    /// Number of pushes so far, used for tie-breaking.
    pushed: usize,
}

impl Frontier {
    pub fn new(kind: FrontierKind) -> Self {
        let open_list = match kind {
            FrontierKind::Stack => OpenList::Stack(Vec::new()),
            FrontierKind::Queue => OpenList::Queue(VecDeque::new()),
            FrontierKind::HeuristicPriority
            | FrontierKind::CostHeuristicPriority
            | FrontierKind::CostPriority => OpenList::Priority(PriorityQueue::new()),
        };
        Self {
            kind,
            open_list,
            states: HashSet::new(),
            pushed: 0,
        }
    }

    pub fn kind(&self) -> FrontierKind {
        self.kind
    }

    /// Add an opened node. The caller must make sure no node with the same
    /// state is already in the frontier.
    pub fn push(&mut self, node: &SearchNode) {
        let entry = FrontierEntry {
            node_id: node.get_node_id(),
            state: node.get_state(),
        };
        let inserted = self.states.insert(entry.state);
        debug_assert!(inserted, "{} is already in the frontier", entry.state);

        match &mut self.open_list {
            OpenList::Stack(stack) => stack.push(entry),
            OpenList::Queue(queue) => queue.push_back(entry),
            OpenList::Priority(queue) => {
                queue.push(entry, Reverse((self.kind.priority(node), self.pushed)));
            }
        }
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Result<NodeId, EmptyFrontierError> {
        let entry = match &mut self.open_list {
            OpenList::Stack(stack) => stack.pop(),
            OpenList::Queue(queue) => queue.pop_front(),
            OpenList::Priority(queue) => queue.pop().map(|(entry, _)| entry),
        }
        .ok_or(EmptyFrontierError)?;
        self.states.remove(&entry.state);
        Ok(entry.node_id)
    }

    pub fn contains_state(&self, state: Point) -> bool {
        self.states.contains(&state)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// States in the frontier, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = Point> + '_ {
        self.states.iter().copied()
    }
}
