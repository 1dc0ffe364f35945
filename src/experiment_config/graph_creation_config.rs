use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::experiment_config::ExperimentConfigError;
use crate::graph::MatrixGraph;

pub type WeightedEdge = (usize, usize, f64);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GraphCreationConfig {
    Edges(EdgeList),
    File(FileLoad),
}

/// Graph given inline. Nodes are numbered 0 to order - 1.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EdgeList {
    pub order: usize,
    #[serde(default)]
    pub directed: bool,
    pub edges: Vec<WeightedEdge>,
}

/// Graph read from a csv file with one `from,to,weight` row per edge.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FileLoad {
    pub filename: String,
    #[serde(default)]
    pub directed: bool,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    weight: f64,
}

fn read_edges<P: AsRef<Path>>(path: P) -> Result<Vec<WeightedEdge>, ExperimentConfigError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut edges = Vec::new();
    for record in reader.deserialize() {
        let record: EdgeRecord = record?;
        edges.push((record.from, record.to, record.weight));
    }

    Ok(edges)
}

fn build_graph(
    order: usize,
    directed: bool,
    edges: &[WeightedEdge],
) -> Result<MatrixGraph<usize, (), f64>, ExperimentConfigError> {
    let edges = edges
        .iter()
        .flat_map(|&(from, to, weight)| {
            let mirrored = if directed { None } else { Some((to, from, weight)) };
            std::iter::once((from, to, weight)).chain(mirrored)
        })
        .collect();

    MatrixGraph::new_usize_indexed(vec![(); order], edges)
        .map_err(|error| ExperimentConfigError::InvalidGraphConfig(error.to_string()))
}

impl GraphCreationConfig {
    pub fn build(&self) -> Result<MatrixGraph<usize, (), f64>, ExperimentConfigError> {
        match self {
            Self::Edges(list) => build_graph(list.order, list.directed, &list.edges),
            Self::File(file) => {
                let edges = read_edges(&file.filename)?;
                let order = edges
                    .iter()
                    .map(|&(from, to, _)| from.max(to) + 1)
                    .max()
                    .unwrap_or(0);
                build_graph(order, file.directed, &edges)
            }
        }
    }
}
