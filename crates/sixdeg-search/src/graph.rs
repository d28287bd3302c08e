//! In-memory graph representation for breadth-first search.
//!
//! Nodes live in a dense table; each node owns an ordered list of outgoing
//! neighbor ids. Neighbor ids are not required to resolve to a node: such
//! dangling references are kept so the search can still test them.

use std::collections::{BTreeSet, HashMap};

use sixdeg_core::{Attributes, GraphDocument, Node, NodeId};

use crate::error::Result;

static NO_ATTRIBUTES: Attributes = Attributes::new();

/// What a search predicate sees for a single node reference.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub id: &'a NodeId,
    /// Empty for dangling references.
    pub attributes: &'a Attributes,
    /// The id has no node entry in the graph.
    pub dangling: bool,
}

impl<'a> NodeView<'a> {
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Directed graph of labeled nodes.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// All nodes, indexed by dense index.
    pub nodes: Vec<Node>,
    /// Adjacency list: `adjacency[i]` = outgoing neighbor ids of node `i`, in order.
    pub adjacency: Vec<Vec<NodeId>>,
    /// Map from node id → dense index.
    pub node_index: HashMap<NodeId, usize>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw adjacency lists. Every key becomes a node without
    /// attributes; neighbor lists are kept verbatim, self-loops and repeats
    /// included. Empty ids, as keys or neighbors, are skipped.
    pub fn from_adjacency<'a, I>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Vec<&'a str>)>,
    {
        let entries: Vec<(&str, Vec<&str>)> = adjacency.into_iter().collect();
        let mut graph = Self::new();

        for (source, _) in &entries {
            graph.add_node(Node::new(*source));
        }
        for (source, neighbors) in entries {
            for neighbor in neighbors {
                graph.push_neighbor(source, NodeId::from(neighbor));
            }
        }

        graph
    }

    /// Build from a decoded [`GraphDocument`], validating it first.
    pub fn from_document(doc: GraphDocument) -> Result<Self> {
        doc.validate()?;

        let mut graph = Self::new();
        for record in doc.nodes {
            graph.add_node(record);
        }
        for (source, _) in &doc.adjacency {
            graph.add_node(Node::new(source.clone()));
        }
        for (source, neighbors) in doc.adjacency {
            for neighbor in neighbors {
                graph.push_neighbor(source.as_str(), neighbor);
            }
        }

        Ok(graph)
    }

    /// Insert a node. Returns `false` and leaves the existing entry untouched
    /// if the id is already present. Empty ids are never inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if node.id.is_empty() || self.node_index.contains_key(&node.id) {
            return false;
        }
        let index = self.nodes.len();
        self.node_index.insert(node.id.clone(), index);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        true
    }

    /// Add a directed friendship edge `from → to`.
    ///
    /// Connecting a node to itself, connecting an already-connected pair,
    /// connecting from an unknown node, or connecting to an empty id does
    /// nothing and returns `false`.
    pub fn connect(&mut self, from: &str, to: &str) -> bool {
        if from == to || to.is_empty() {
            return false;
        }
        let Some(&index) = self.node_index.get(from) else {
            return false;
        };
        let neighbors = &mut self.adjacency[index];
        if neighbors.iter().any(|n| n.as_str() == to) {
            return false;
        }
        neighbors.push(NodeId::from(to));
        true
    }

    fn push_neighbor(&mut self, source: &str, neighbor: NodeId) {
        if neighbor.is_empty() {
            return;
        }
        if let Some(&index) = self.node_index.get(source) {
            self.adjacency[index].push(neighbor);
        }
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Outgoing neighbors of `id`; empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        match self.index_of(id) {
            Some(i) => &self.adjacency[i],
            None => &[],
        }
    }

    /// A known node with no outgoing edges.
    pub fn is_leaf(&self, id: &str) -> bool {
        self.index_of(id)
            .is_some_and(|i| self.adjacency[i].is_empty())
    }

    /// Predicate view of a node reference, resolved against the node table.
    pub fn view<'a>(&'a self, id: &'a NodeId) -> NodeView<'a> {
        match self.node(id.as_str()) {
            Some(node) => NodeView {
                id: &node.id,
                attributes: &node.attributes,
                dangling: false,
            },
            None => NodeView {
                id,
                attributes: &NO_ATTRIBUTES,
                dangling: true,
            },
        }
    }

    /// Ids of all nodes whose attribute `key` equals `value`, in insertion order.
    pub fn nodes_with_attribute(&self, key: &str, value: &str) -> Vec<&NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.has_attribute(key, value))
            .map(|n| &n.id)
            .collect()
    }

    /// Neighbor ids that have no node entry, sorted and deduplicated.
    pub fn dangling_references(&self) -> Vec<&NodeId> {
        self.adjacency
            .iter()
            .flatten()
            .filter(|id| !self.contains(id.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph, dangling references included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }
}
