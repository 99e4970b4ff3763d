use std::collections::HashMap;

use pathwise_core::{DiGraph, EdgeId, EdgeMutable, VertexId, VertexMutable, WeightTable};

/// Graph with named vertices and an explicit weight per edge.
pub struct Network {
    pub graph: DiGraph<&'static str>,
    pub weights: WeightTable,
    names: HashMap<&'static str, VertexId>,
}

impl Network {
    #[must_use]
    pub fn new(vertices: &[&'static str], edges: &[(&'static str, &'static str, f64)]) -> Self {
        let mut graph = DiGraph::new();
        let mut names = HashMap::new();
        for &name in vertices {
            names.insert(name, graph.add_vertex(name).expect("names are distinct"));
        }
        let mut weights = WeightTable::new(0.0);
        for &(source, target, weight) in edges {
            let edge = graph
                .add_edge(names[source], names[target])
                .expect("endpoints are declared");
            weights.insert(edge, weight);
        }
        Self {
            graph,
            weights,
            names,
        }
    }

    #[must_use]
    pub fn vertex(&self, name: &str) -> VertexId {
        self.names[name]
    }

    pub fn connect(&mut self, source: &str, target: &str, weight: f64) -> EdgeId {
        let edge = self
            .graph
            .add_edge(self.names[source], self.names[target])
            .expect("endpoints are declared");
        self.weights.insert(edge, weight);
        edge
    }
}
