//! Shortest paths over a small subway network.
//!
//! Three ways of answering "how do I get from A to B" on the same weighted,
//! undirected station graph:
//! - [`shortest_path`]: Dijkstra over a binary heap frontier
//! - [`a_star_path`]: A* with a zero heuristic, identical answers to Dijkstra
//! - [`all_simple_paths`]: every loop-free route, by backtracking
//!
//! [`Session`] ties them together the way an interactive front end uses them:
//! one randomly weighted graph per user, queried from a fixed source station.

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod planner;
pub mod report;
pub mod session;

pub use collections::{FxIndexMap, FxIndexSet};
pub use errors::PathError;
pub use graph::{Edge, Graph, Route};
pub use graph::generator::{generate as generate_graph, generate_with, GeneratorConfig, STATIONS};
pub use graph::layout::station_positions;
pub use graph_algos::backtracking::EnumerationLimits;
pub use planner::{a_star_path, all_simple_paths, all_simple_paths_limited, reachable_shortest_paths, shortest_path};
pub use report::RouteReport;
pub use session::{init_logging, Session, SessionConfig, DEFAULT_SOURCE};
