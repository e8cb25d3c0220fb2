use crate::{core::VID, db::graph::Graph};

/// A graph with its own dense ids, remembering which original node each id
/// stands for: a node of a parent graph, or a node id as written in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSubgraph {
    graph: Graph,
    original: Vec<VID>,
}

impl NodeSubgraph {
    pub(crate) fn new(graph: Graph, original: Vec<VID>) -> Self {
        Self { graph, original }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Original ids indexed by local id.
    pub fn original_ids(&self) -> &[VID] {
        &self.original
    }

    pub fn original_id(&self, v: VID) -> Option<VID> {
        self.original.get(v.index()).copied()
    }

    /// Keeps the nodes whose original id passes `filter`. The result maps its
    /// ids straight back to the original ids of `self`.
    pub fn filter_nodes<F: Fn(VID) -> bool>(&self, filter: F) -> NodeSubgraph {
        let sub = self.graph.filter_nodes(|v| filter(self.original[v.index()]));
        let original = sub
            .original_ids()
            .iter()
            .map(|v| self.original[v.index()])
            .collect();
        NodeSubgraph::new(sub.into_graph(), original)
    }
}

/// Every node stands for itself.
impl From<Graph> for NodeSubgraph {
    fn from(graph: Graph) -> Self {
        let original = graph.nodes().collect();
        NodeSubgraph::new(graph, original)
    }
}
