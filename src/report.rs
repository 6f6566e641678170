use crate::collections::FxIndexMap;
use crate::graph::Route;

use serde::Serialize;


/// Everything the presentation layer shows for one query
/// `found == false` means "no path" and must be displayed as such.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub source: String,
    pub target: String,
    pub found: bool,
    pub path: Vec<String>, // dijkstra path, empty when not found
    pub cost: u64,
    pub path_edges: Vec<(String, String)>, // edges to highlight on the drawing
    pub astar_path: Vec<String>,
    pub backtracking_paths: Vec<Vec<String>>,
    pub reachable: FxIndexMap<String, Vec<String>>, // shortest path from source to each station
}

impl RouteReport {

    /// Merge the answers of the individual searches
    pub fn assemble(
        source: &str,
        target: &str,
        shortest: Option<Route>,
        astar: Option<Route>,
        backtracking_paths: Vec<Vec<String>>,
        reachable: FxIndexMap<String, Vec<String>>,
    ) -> Self {
        let (found, path, cost, path_edges) = match shortest {
            Some(route) => {
                let edges = route.edges();
                (true, route.nodes, route.cost, edges)
            }
            None => (false, Vec::new(), 0, Vec::new()),
        };

        Self {
            source: source.to_string(),
            target: target.to_string(),
            found,
            path,
            cost,
            path_edges,
            astar_path: astar.map(|route| route.nodes).unwrap_or_default(),
            backtracking_paths,
            reachable,
        }
    }

    /// Edges to highlight, or None when there is nothing to draw
    pub fn highlight(&self) -> Option<&[(String, String)]> {
        if self.found && !self.path_edges.is_empty() {
            Some(&self.path_edges)
        } else {
            None
        }
    }
}
