//! Per-user state: the station graph a user is currently looking at.
//!
//! A [`Session`] generates its graph on first use, reuses it for every later
//! query and throws it away on [`Session::reset`]. Hosts keep one session per
//! user in whatever store they like; the searches themselves never see it.

use crate::collections::FxIndexMap;
use crate::errors::PathError;
use crate::graph::{Graph, generator::{self, GeneratorConfig, STATIONS}};
use crate::graph_algos::backtracking::EnumerationLimits;
use crate::planner;
use crate::report::RouteReport;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;


/// Station every query starts from
pub const DEFAULT_SOURCE: &str = "Gachon Univ";


/// Install a `tracing` subscriber honoring `RUST_LOG`
/// Defaults to `subway_paths=info`; repeated calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("subway_paths=info"));

    // try_init so a second call (or a test harness) doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub source: String,
    pub generator: GeneratorConfig,
    pub limits: EnumerationLimits,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            generator: GeneratorConfig::default(),
            limits: EnumerationLimits::unbounded(),
        }
    }
}


/// Regenerate-or-reuse holder for one user's graph
pub struct Session<R = StdRng> {
    config: SessionConfig,
    rng: R,
    graph: Option<Graph>,
}

impl Session<StdRng> {

    /// Session drawing weights from OS entropy
    pub fn new(config: SessionConfig) -> Result<Self, PathError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Session with reproducible weights
    pub fn seeded(config: SessionConfig, seed: u64) -> Result<Self, PathError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {

    /// Fails with `InvalidConfig` if the source is not one of the generated stations
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self, PathError> {
        config.generator.validate()?;
        if !STATIONS.contains(&config.source.as_str()) {
            return Err(PathError::InvalidConfig(format!("unknown source station {}", config.source)));
        }
        Ok(Self { config, rng, graph: None })
    }

    /// Start from a caller supplied graph instead of a generated one
    /// The source must be a node of that graph. After `reset` the session
    /// falls back to generated station graphs.
    pub fn with_graph(config: SessionConfig, rng: R, graph: Graph) -> Result<Self, PathError> {
        config.generator.validate()?;
        if !graph.contains(&config.source) {
            return Err(PathError::InvalidConfig(format!("source {} is not in the supplied graph", config.source)));
        }
        Ok(Self { config, rng, graph: Some(graph) })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current graph, generated on first use
    pub fn graph(&mut self) -> Result<&Graph, PathError> {
        let graph = match self.graph.take() {
            Some(graph) => graph,
            None => {
                let graph = generator::generate_with(&self.config.generator, &mut self.rng)?;
                info!(nodes = graph.node_count(), edges = graph.edge_count(), "generated station graph");
                graph
            }
        };
        Ok(self.graph.insert(graph))
    }

    /// True once a graph has been generated or supplied
    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    /// Drop the current graph; the next query generates a fresh one
    pub fn reset(&mut self) {
        if self.graph.take().is_some() {
            info!("discarded station graph");
        }
    }

    /// Run every search from the configured source to `target`
    /// Fails with `NodeNotFound` for an unknown target rather than substituting one.
    pub fn query(&mut self, target: &str) -> Result<RouteReport, PathError> {
        let source = self.config.source.clone();
        let limits = self.config.limits.clone();
        let graph = self.graph()?;

        let shortest = planner::shortest_path(graph, &source, target)?;
        let astar = planner::a_star_path(graph, &source, target)?;
        let backtracking = planner::all_simple_paths_limited(graph, &source, target, &limits);
        let reachable = planner::reachable_shortest_paths(graph, &source)?;

        debug!(%source, target, found = shortest.is_some(), paths = backtracking.len(), "query answered");
        Ok(RouteReport::assemble(&source, target, shortest, astar, backtracking, reachable))
    }

    /// Shortest paths from the source to every station, shown before any query is made
    pub fn overview(&mut self) -> Result<FxIndexMap<String, Vec<String>>, PathError> {
        let source = self.config.source.clone();
        let graph = self.graph()?;
        planner::reachable_shortest_paths(graph, &source)
    }
}
