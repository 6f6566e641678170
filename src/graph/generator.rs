use crate::errors::PathError;
use super::{Edge, Graph};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Stations of the demo network
pub const STATIONS: [&str; 10] = [
    "Seolleung",
    "Wangsimni",
    "Seoul Station",
    "Jamsil",
    "Gachon Univ",
    "Bokjeong",
    "Hongdae",
    "Gyodae",
    "Yangjae",
    "Gangnam",
];

/// Fixed topology as index pairs into `STATIONS`
/// The ring 0-1-2-3-4-5-6-7-8-9-0 plus the chords 0-4, 1-4 and 9-1
pub const TOPOLOGY: [(usize, usize); 13] = [
    (0, 1), (1, 2), (2, 3), (3, 4),
    (0, 4), (1, 4), (4, 5), (5, 6),
    (6, 7), (7, 8), (8, 9), (9, 0),
    (9, 1),
];


/// Range the random edge weights are drawn from (inclusive)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_weight: u32,
    pub max_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_weight: 1,
            max_weight: 10,
        }
    }
}

impl GeneratorConfig {

    /// Weights must stay strictly positive and the range must not be empty
    pub fn validate(&self) -> Result<(), PathError> {
        if self.min_weight == 0 {
            return Err(PathError::InvalidConfig("min_weight must be at least 1".to_string()));
        }
        if self.min_weight > self.max_weight {
            return Err(PathError::InvalidConfig(format!(
                "min_weight {} exceeds max_weight {}", self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}


/// Generate the station graph with weights drawn uniformly from [1, 10]
pub fn generate() -> Graph {
    let config = GeneratorConfig::default();
    let mut rng = rand::rng();
    let edges = random_edges(&config, &mut rng);
    // Stations and topology are constants, so construction cannot fail here
    match Graph::new(STATIONS, edges) {
        Ok(graph) => graph,
        Err(e) => unreachable!("fixed station topology rejected: {e}"),
    }
}

/// Generate the station graph with a caller supplied weight range and random source
pub fn generate_with<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Graph, PathError> {
    config.validate()?;
    Graph::new(STATIONS, random_edges(config, rng))
}

fn random_edges<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Edge> {
    let edges: Vec<Edge> = TOPOLOGY
        .iter()
        .map(|&(a, b)| {
            Edge::new(STATIONS[a], STATIONS[b], rng.random_range(config.min_weight..=config.max_weight))
        })
        .collect();
    debug!(edges = edges.len(), "drew random edge weights");
    edges
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_topology() {
        let graph = generate();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 13);
        for station in STATIONS {
            assert!(graph.contains(station));
        }
        for &(a, b) in TOPOLOGY.iter() {
            let w = graph.weight(STATIONS[a], STATIONS[b]).unwrap();
            assert!((1..=10).contains(&w), "weight {w} out of range");
        }
    }

    #[test]
    fn test_gachon_connections() {
        let graph = generate();
        let mut neighbors: Vec<&str> = graph.neighbors("Gachon Univ").collect();
        neighbors.sort();
        assert_eq!(neighbors, vec!["Bokjeong", "Jamsil", "Seolleung", "Wangsimni"]);
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let config = GeneratorConfig::default();
        let a = generate_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_range() {
        let config = GeneratorConfig { min_weight: 3, max_weight: 3 };
        let graph = generate_with(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(graph.edges().iter().all(|e| e.weight == 3));
    }

    #[test]
    fn test_invalid_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let zero = GeneratorConfig { min_weight: 0, max_weight: 5 };
        assert!(matches!(generate_with(&zero, &mut rng), Err(PathError::InvalidConfig(_))));
        let inverted = GeneratorConfig { min_weight: 6, max_weight: 5 };
        assert!(matches!(generate_with(&inverted, &mut rng), Err(PathError::InvalidConfig(_))));
    }
}
