//! Path queries against a [`Graph`].
//!
//! Thin adapters that feed the graph's adjacency into the generic searches in
//! [`crate::graph_algos`] and translate the answers back into owned station names.
//! Unknown endpoints are reported as [`PathError::NodeNotFound`]; a missing path
//! is ordinary data (`None` or an empty list).

use crate::collections::FxIndexMap;
use crate::errors::PathError;
use crate::graph::{Graph, Route};
use crate::graph_algos::{
    a_star::{zero_heuristic, AStar},
    backtracking::{self, EnumerationLimits},
    dijkstra,
};

use tracing::debug;


fn require<'a>(graph: &Graph, node: &'a str) -> Result<&'a str, PathError> {
    if graph.contains(node) {
        Ok(node)
    } else {
        Err(PathError::NodeNotFound(node.to_string()))
    }
}

fn to_route(found: Option<(Vec<&str>, u64)>) -> Option<Route> {
    found.map(|(nodes, cost)| Route {
        nodes: nodes.into_iter().map(str::to_string).collect(),
        cost,
    })
}


/// Minimum total weight path from `source` to `goal` (Dijkstra)
/// `Ok(None)` when the two stations are not connected.
pub fn shortest_path(graph: &Graph, source: &str, goal: &str) -> Result<Option<Route>, PathError> {
    let source = require(graph, source)?;
    let goal = require(graph, goal)?;

    let route = to_route(dijkstra::dijkstra(
        source,
        |node: &&str| graph.adjacent_costs(node),
        |node| *node == goal,
    ));
    debug!(source, goal, cost = route.as_ref().map(|r| r.cost), "dijkstra query");
    Ok(route)
}

/// Same query answered by A* with a zero heuristic
/// Expands nodes in the same order as [`shortest_path`] and returns the same route.
pub fn a_star_path(graph: &Graph, source: &str, goal: &str) -> Result<Option<Route>, PathError> {
    let source = require(graph, source)?;
    let goal = require(graph, goal)?;

    let route = to_route(AStar {}.plan(
        source,
        |node: &&str| graph.adjacent_costs(node),
        zero_heuristic,
        |node| *node == goal,
    ));
    debug!(source, goal, cost = route.as_ref().map(|r| r.cost), "a* query");
    Ok(route)
}

/// Every simple path from `source` to `goal`
/// Unknown endpoints and disconnected pairs both give an empty list.
pub fn all_simple_paths(graph: &Graph, source: &str, goal: &str) -> Vec<Vec<String>> {
    all_simple_paths_limited(graph, source, goal, &EnumerationLimits::unbounded())
}

/// [`all_simple_paths`] with cutoffs on path count and length
pub fn all_simple_paths_limited(graph: &Graph, source: &str, goal: &str, limits: &EnumerationLimits) -> Vec<Vec<String>> {
    if !graph.contains(source) || !graph.contains(goal) {
        debug!(source, goal, "enumeration skipped, unknown endpoint");
        return Vec::new();
    }

    let paths = backtracking::all_simple_paths(
        source,
        |node: &&str| graph.neighbors(node),
        |node| *node == goal,
        limits,
    );
    debug!(source, goal, paths = paths.len(), "enumerated simple paths");

    paths
        .into_iter()
        .map(|path| path.into_iter().map(str::to_string).collect())
        .collect()
}

/// Shortest path from `source` to every station reachable from it, `source` included
pub fn reachable_shortest_paths(graph: &Graph, source: &str) -> Result<FxIndexMap<String, Vec<String>>, PathError> {
    let source = require(graph, source)?;

    let paths = dijkstra::dijkstra_paths_full(source, |node: &&str| graph.adjacent_costs(node));
    debug!(source, reachable = paths.len(), "single source shortest paths");

    Ok(paths
        .into_iter()
        .map(|(node, path)| (node.to_string(), path.into_iter().map(str::to_string).collect()))
        .collect())
}
