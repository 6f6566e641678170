use super::{shortest_path, FrontierEntry, GraphNodeMap, NO_PARENT};
use crate::collections::FxIndexMap;

use std::{collections::BinaryHeap, hash::Hash, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the path from start to goal with its total cost, or None when the goal is unreachable
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    shortest_path(&node_map, goal_index?)
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    // Goal never matches so every reachable node gets settled
    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);

    node_map
}


/// Shortest path from start to every reachable node, start included
/// Keys follow the order nodes were first discovered
pub fn dijkstra_paths_full<N, C, IT, NN>(start: N, neighbors: NN) -> FxIndexMap<N, Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    let node_map = dijkstra_nodes_full(start, neighbors);

    (0..node_map.len())
        .filter_map(|index| shortest_path(&node_map, index))
        .filter_map(|(path, _)| path.last().cloned().map(|node| (node, path)))
        .collect()
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - the frontier pops the least costly node first
    // We store the cost from the starting node
    let mut nodes_to_visit: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();

    // Best known (parent_index, cost) per discovered node
    // for the start node, parent_index is NO_PARENT
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Add start node to the map and queue
    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(FrontierEntry {
        index: start_index,
        cost: Zero::zero(),
        priority: Zero::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(FrontierEntry { cost, index, .. }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Stale entry: a cheaper path to this node was found after it was queued
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            trace!(?node, ?c, settled = nodes_map.len(), "dijkstra reached goal");
            return (nodes_map, Some(index));
        }

        // release the borrow on the map before updating it
        let node = node.clone();

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            };

            // Only add to the queue if we've found a better path
            nodes_to_visit.push(FrontierEntry {
                index: neighbor_index,
                cost: new_cost,
                priority: new_cost,
            });
        }
    }

    (nodes_map, None)
}
