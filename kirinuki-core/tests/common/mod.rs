use kirinuki_core::{GraphSource, GraphSourceError};

#[derive(Clone, Debug)]
pub struct EdgeListGraph {
    name: &'static str,
    nodes: usize,
    edges: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl EdgeListGraph {
    #[must_use]
    pub fn new(name: &'static str, nodes: usize, edges: Vec<(usize, usize)>) -> Self {
        let mut adjacency = vec![Vec::new(); nodes];
        for &(a, b) in &edges {
            adjacency[a].push(b);
            if a != b {
                adjacency[b].push(a);
            }
        }
        Self {
            name,
            nodes,
            edges,
            adjacency,
        }
    }

    #[must_use]
    pub fn cycle(name: &'static str, nodes: usize) -> Self {
        let edges = (0..nodes).map(|n| (n, (n + 1) % nodes)).collect();
        Self::new(name, nodes, edges)
    }
}

impl GraphSource for EdgeListGraph {
    fn node_count(&self) -> usize {
        self.nodes
    }

    fn name(&self) -> &str {
        self.name
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.edges.clone()
    }

    fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError> {
        self.adjacency
            .get(node)
            .cloned()
            .ok_or(GraphSourceError::NodeOutOfBounds { node })
    }
}
