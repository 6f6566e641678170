pub mod generator;
pub mod layout;

use crate::collections::FxIndexMap;
use crate::errors::PathError;

use serde::{Deserialize, Serialize};
use tracing::trace;


/// Undirected weighted edge between two distinct stations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: u32, // strictly positive
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: u32) -> Self {
        Self { a: a.into(), b: b.into(), weight }
    }
}


/// A simple path through the graph along with its total weight
/// Totals are kept in u64 so summing u32 edge weights cannot overflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub cost: u64,
}

impl Route {

    /// Consecutive node pairs, used to highlight the route on a drawing
    pub fn edges(&self) -> Vec<(String, String)> {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}


/// Immutable undirected weighted graph keyed by node name
/// Adjacency is stored on both endpoints so lookups work in either direction.
/// Iteration order follows insertion order, which keeps searches deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: FxIndexMap<String, FxIndexMap<String, u32>>,
    edges: Vec<Edge>,
}

impl Graph {

    /// Build a graph from its nodes and edges
    /// Fails with `InvalidGraph` on duplicate nodes, unknown endpoints, self loops,
    /// repeated edges or zero weights.
    pub fn new<I, S, E>(nodes: I, edges: E) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = Edge>,
    {
        let mut adjacency: FxIndexMap<String, FxIndexMap<String, u32>> = FxIndexMap::default();
        for node in nodes {
            let node = node.into();
            if adjacency.contains_key(&node) {
                return Err(PathError::InvalidGraph(format!("duplicate node {node}")));
            }
            adjacency.insert(node, FxIndexMap::default());
        }

        let mut kept = Vec::new();
        for edge in edges {
            if edge.weight == 0 {
                return Err(PathError::InvalidGraph(format!(
                    "edge {} - {} has non-positive weight", edge.a, edge.b
                )));
            }
            if edge.a == edge.b {
                return Err(PathError::InvalidGraph(format!("self loop on {}", edge.a)));
            }
            for endpoint in [&edge.a, &edge.b] {
                if !adjacency.contains_key(endpoint) {
                    return Err(PathError::InvalidGraph(format!(
                        "edge {} - {} references unknown node {endpoint}", edge.a, edge.b
                    )));
                }
            }
            if adjacency[&edge.a].contains_key(&edge.b) {
                return Err(PathError::InvalidGraph(format!(
                    "duplicate edge {} - {}", edge.a, edge.b
                )));
            }

            if let Some(out) = adjacency.get_mut(&edge.a) {
                out.insert(edge.b.clone(), edge.weight);
            }
            if let Some(out) = adjacency.get_mut(&edge.b) {
                out.insert(edge.a.clone(), edge.weight);
            }
            kept.push(edge);
        }

        trace!(nodes = adjacency.len(), edges = kept.len(), "graph built");
        Ok(Self { adjacency, edges: kept })
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors of a node, empty when the node is unknown
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.adjacent(node).map(|(next, _)| next)
    }

    /// Neighbors of a node along with the connecting edge weight
    pub fn adjacent<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, u32)> + use<'a> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|out| out.iter().map(|(next, &w)| (next.as_str(), w)))
    }

    /// `adjacent` with weights widened to the u64 used for path totals
    pub fn adjacent_costs<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, u64)> + use<'a> {
        self.adjacent(node).map(|(next, w)| (next, u64::from(w)))
    }

    /// Weight of the edge between two nodes, in either direction
    pub fn weight(&self, from: &str, to: &str) -> Result<u32, PathError> {
        self.adjacency
            .get(from)
            .and_then(|out| out.get(to))
            .copied()
            .ok_or_else(|| PathError::NotAdjacent {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Total weight of a node sequence, failing if any hop is not an edge
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Result<u64, PathError> {
        path.windows(2)
            .map(|pair| self.weight(pair[0].as_ref(), pair[1].as_ref()).map(u64::from))
            .sum()
    }

    /// Node names in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Every edge once, as it was given at construction
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            ["X", "Y", "Z"],
            [Edge::new("X", "Y", 4), Edge::new("Y", "Z", 1), Edge::new("X", "Z", 10)],
        ).unwrap()
    }

    #[test]
    fn test_weight_is_symmetric() {
        let graph = triangle();
        assert_eq!(graph.weight("X", "Y").unwrap(), 4);
        assert_eq!(graph.weight("Y", "X").unwrap(), 4);
        assert_eq!(graph.weight("Z", "X").unwrap(), 10);
    }

    #[test]
    fn test_weight_not_adjacent() {
        let graph = Graph::new(["A", "B", "C"], [Edge::new("A", "B", 2)]).unwrap();
        assert_eq!(
            graph.weight("A", "C"),
            Err(PathError::NotAdjacent { from: "A".to_string(), to: "C".to_string() })
        );
        assert!(matches!(graph.weight("A", "Q"), Err(PathError::NotAdjacent { .. })));
    }

    #[test]
    fn test_neighbors_and_contains() {
        let graph = triangle();
        let neighbors: Vec<&str> = graph.neighbors("Y").collect();
        assert_eq!(neighbors, vec!["X", "Z"]);
        assert!(graph.contains("Z"));
        assert!(!graph.contains("Q"));
        assert_eq!(graph.neighbors("Q").count(), 0);
    }

    #[test]
    fn test_counts_and_edges() {
        let graph = triangle();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges()[1], Edge::new("Y", "Z", 1));
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_rejects_unknown_endpoint() {
        let result = Graph::new(["A"], [Edge::new("A", "B", 1)]);
        assert!(matches!(result, Err(PathError::InvalidGraph(_))));
    }

    #[test]
    fn test_rejects_zero_weight() {
        let result = Graph::new(["A", "B"], [Edge::new("A", "B", 0)]);
        assert!(matches!(result, Err(PathError::InvalidGraph(_))));
    }

    #[test]
    fn test_rejects_duplicates_and_loops() {
        assert!(matches!(Graph::new(["A", "A"], Vec::<Edge>::new()), Err(PathError::InvalidGraph(_))));
        assert!(matches!(
            Graph::new(["A", "B"], [Edge::new("A", "B", 1), Edge::new("B", "A", 3)]),
            Err(PathError::InvalidGraph(_))
        ));
        assert!(matches!(
            Graph::new(["A"], [Edge::new("A", "A", 1)]),
            Err(PathError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_path_cost_and_route_edges() {
        let graph = triangle();
        assert_eq!(graph.path_cost(&["X", "Y", "Z"]).unwrap(), 5);
        assert_eq!(graph.path_cost(&["X"]).unwrap(), 0);

        let route = Route { nodes: vec!["X".into(), "Y".into(), "Z".into()], cost: 5 };
        assert_eq!(
            route.edges(),
            vec![("X".to_string(), "Y".to_string()), ("Y".to_string(), "Z".to_string())]
        );
        assert_eq!(route.hops(), 2);
    }

    #[test]
    fn test_path_cost_beyond_u32() {
        let heavy = u32::MAX / 2 + 1;
        let graph = Graph::new(["A", "B", "C"], [Edge::new("A", "B", heavy), Edge::new("B", "C", heavy)]).unwrap();
        assert_eq!(graph.path_cost(&["A", "B", "C"]).unwrap(), 2 * u64::from(heavy));
        assert_eq!(graph.adjacent_costs("B").map(|(_, w)| w).sum::<u64>(), 2 * u64::from(heavy));
    }
}
