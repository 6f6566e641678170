use super::{shortest_path, FrontierEntry, GraphNodeMap, NO_PARENT};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The result is only guaranteed optimal if the heuristic is admissible
    /// (never overestimates the true cost to reach the goal).
    /// With `zero_heuristic` the search expands exactly like Dijkstra.
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Option<(Vec<N>, C)>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn);

        shortest_path(&node_map, goal_index?)
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C,
        G: Fn(&N) -> bool
    {
        // Open List
        // Nodes that need to be evaluated, sorted by f_cost (cost + heuristic)
        let mut open_list: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();

        // Evaluated nodes, avoids re-evaluating nodes, used to find the final path
        // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the closed_list
        let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();

        let start_f = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
        open_list.push(FrontierEntry {
            index: start_index,
            cost: Zero::zero(),
            priority: start_f,
        });

        while let Some(FrontierEntry { index, cost, .. }) = open_list.pop() {

            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // A cheaper path to this node was queued after this entry
            if cost > c {
                continue;
            }

            if goal_fn(node) {
                trace!(?node, ?c, evaluated = closed_list.len(), "a* reached goal");
                return (closed_list, Some(index));
            }

            let node = node.clone();

            for (neighbor, edge_cost) in neighbors(&node) {

                // confirmed cost, not heuristic
                let new_cost = edge_cost + c;
                let h_cost: C = heuristic_fn(&neighbor);

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        let i = e.index();
                        e.insert((index, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                open_list.push(FrontierEntry {
                    index: neighbor_index,
                    cost: new_cost,
                    priority: new_cost + h_cost,
                });
            }
        }
        (closed_list, None)
    }
}


/// Heuristic that estimates nothing, reducing A* to uniform-cost search
pub fn zero_heuristic<N, C: Zero>(_node: &N) -> C {
    C::zero()
}
