use crate::collections::FxIndexSet;

use std::{hash::Hash, fmt::Debug};
use serde::{Deserialize, Serialize};
use tracing::trace;


/// Cutoffs for the enumeration, whose cost grows exponentially with graph size
/// `None` means unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationLimits {
    pub max_paths: Option<usize>, // stop after this many paths
    pub max_depth: Option<usize>, // longest path, in edges
}

impl EnumerationLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }
}


/// Enumerate every simple path (no repeated node) from start to a goal node
/// Depth first search with backtracking, driven by an explicit stack of neighbor
/// iterators instead of recursion. The current prefix doubles as the visited set:
/// stepping into a neighbor pushes it, exhausting its neighbors pops it again.
/// Paths are emitted in neighbor iteration order, not cost order.
pub fn all_simple_paths<N, IT, NN, G>(start: N, neighbors: NN, goal: G, limits: &EnumerationLimits) -> Vec<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
{
    let mut paths: Vec<Vec<N>> = Vec::new();
    let full = |paths: &Vec<Vec<N>>| limits.max_paths.is_some_and(|max| paths.len() >= max);

    if full(&paths) {
        return paths;
    }
    if goal(&start) {
        paths.push(vec![start]);
        return paths;
    }

    let mut prefix: FxIndexSet<N> = FxIndexSet::default();
    let mut stack: Vec<IT::IntoIter> = vec![neighbors(&start).into_iter()];
    prefix.insert(start);

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.next() else {
            // all alternatives from this node tried, un-visit it
            stack.pop();
            prefix.pop();
            continue;
        };

        if prefix.contains(&next) {
            continue;
        }

        // prefix holds nodes, so its length minus one is the hop count so far
        if limits.max_depth.is_some_and(|max| prefix.len() > max) {
            continue;
        }

        if goal(&next) {
            let mut path: Vec<N> = prefix.iter().cloned().collect();
            path.push(next);
            trace!(?path, "found simple path");
            paths.push(path);
            if full(&paths) {
                break;
            }
            continue;
        }

        let children = neighbors(&next).into_iter();
        prefix.insert(next);
        stack.push(children);
    }

    paths
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn undirected(edges: &[(&'static str, &'static str)]) -> HashMap<&'static str, Vec<&'static str>> {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        for &(a, b) in edges {
            graph.entry(a).or_default().push(b);
            graph.entry(b).or_default().push(a);
        }
        graph
    }

    fn run(graph: &HashMap<&'static str, Vec<&'static str>>, start: &'static str, goal: &'static str, limits: &EnumerationLimits) -> Vec<Vec<&'static str>> {
        all_simple_paths(
            start,
            |n: &&str| graph.get(n).cloned().unwrap_or_default(),
            |n| *n == goal,
            limits,
        )
    }

    #[test]
    fn test_triangle() {
        let graph = undirected(&[("X", "Y"), ("Y", "Z"), ("X", "Z")]);
        let paths = run(&graph, "X", "Z", &EnumerationLimits::unbounded());
        assert_eq!(paths, vec![vec!["X", "Y", "Z"], vec!["X", "Z"]]);
    }

    #[test]
    fn test_start_is_goal() {
        let graph = undirected(&[("X", "Y")]);
        let paths = run(&graph, "X", "X", &EnumerationLimits::unbounded());
        assert_eq!(paths, vec![vec!["X"]]);
    }

    #[test]
    fn test_disconnected() {
        let graph = undirected(&[("A", "B"), ("C", "D")]);
        assert!(run(&graph, "A", "D", &EnumerationLimits::unbounded()).is_empty());
    }

    #[test]
    fn test_complete_graph_counts() {
        // K4: between two fixed nodes there are 1 + 2 + 2 = 5 simple paths
        let graph = undirected(&[("A", "B"), ("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D")]);
        let paths = run(&graph, "A", "D", &EnumerationLimits::unbounded());
        assert_eq!(paths.len(), 5);

        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        for path in &paths {
            let nodes: HashSet<_> = path.iter().collect();
            assert_eq!(nodes.len(), path.len(), "repeated node in {path:?}");
            assert_eq!(path.first(), Some(&"A"));
            assert_eq!(path.last(), Some(&"D"));
        }
    }

    #[test]
    fn test_goal_is_not_passed_through() {
        // the only way to C is through the goal B, so no path may continue past it
        let graph = undirected(&[("A", "B"), ("B", "C")]);
        let paths = run(&graph, "A", "B", &EnumerationLimits::unbounded());
        assert_eq!(paths, vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_limits() {
        let graph = undirected(&[("A", "B"), ("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D")]);

        let capped = EnumerationLimits { max_paths: Some(2), max_depth: None };
        assert_eq!(run(&graph, "A", "D", &capped).len(), 2);

        let direct_only = EnumerationLimits { max_paths: None, max_depth: Some(1) };
        assert_eq!(run(&graph, "A", "D", &direct_only), vec![vec!["A", "D"]]);

        let two_hops = EnumerationLimits { max_paths: None, max_depth: Some(2) };
        assert_eq!(run(&graph, "A", "D", &two_hops).len(), 3);

        let none = EnumerationLimits { max_paths: Some(0), max_depth: None };
        assert!(run(&graph, "A", "D", &none).is_empty());
    }
}
