
pub mod dijkstra;
pub mod a_star;
pub mod backtracking;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

use std::cmp::Ordering;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Frontier entry shared by the priority searches
/// - `priority` orders the heap (smallest first), `cost` is the confirmed cost from the start
/// - equal priorities pop in discovery order so results are repeatable
#[derive(Debug)]
pub(crate) struct FrontierEntry<T> {
    pub(crate) index: usize,
    pub(crate) cost: T,
    pub(crate) priority: T,
}

impl<T: Ord> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.index == other.index
    }
}
impl<T: PartialEq> Eq for FrontierEntry<T> {}
