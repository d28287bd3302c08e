//! Request and response types for search operations.

use serde::{Deserialize, Serialize};

use sixdeg_core::{Attributes, GraphDocument, NodeId};

use crate::criteria::Criterion;

/// Request to find the nearest node matching a criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub graph: GraphDocument,
    /// Node to start from. The start node itself is eligible to match.
    pub start: String,
    pub criterion: Criterion,
    /// Attach the traversal trace. If None, uses the configured default.
    pub include_trace: Option<bool>,
}

/// Complete result of a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub start: String,
    pub found: Option<FoundNode>,
    pub trace: Option<SearchTrace>,
    pub graph_stats: GraphStats,
    pub computation_ms: u64,
}

/// The nearest matching node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundNode {
    pub id: NodeId,
    /// Hop count from the start node.
    pub depth: usize,
    /// Node ids from start to match, both ends included.
    pub path: Vec<NodeId>,
    pub attributes: Attributes,
    /// Matched through a reference with no node entry.
    pub dangling: bool,
}

/// Record of one traversal, in processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchTrace {
    /// Node ids in the order they were dequeued and tested.
    pub visit_order: Vec<NodeId>,
    /// Enqueue operations performed, start node included.
    pub enqueued: usize,
    /// Neighbor references skipped because they were already enqueued.
    pub duplicates_suppressed: usize,
}

/// Request for the hop distance between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationRequest {
    pub graph: GraphDocument,
    pub from: String,
    pub to: String,
}

/// Result of a separation query. `degrees` is None when `to` is unreachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationResult {
    pub from: String,
    pub to: String,
    pub degrees: Option<usize>,
    pub path: Option<Vec<NodeId>>,
}

/// Statistics about the in-memory graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub dangling_references: usize,
}
