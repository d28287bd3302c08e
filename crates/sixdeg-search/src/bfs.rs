//! Breadth-first nearest-match search.
//!
//! FIFO frontier plus a visited set keyed by node id. Ids are marked visited
//! when they are enqueued, so each id enters the frontier at most once and
//! cycles or self-loops cannot stall the traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use sixdeg_core::NodeId;

use crate::graph::{NodeView, SocialGraph};
use crate::types::{FoundNode, SearchTrace};

/// Outcome of a [`search`]: the match, if any, and how the traversal went.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub found: Option<FoundNode>,
    pub trace: SearchTrace,
}

/// Nearest node reachable from `start` (start included) for which
/// `predicate` holds.
///
/// Returns `None` if `start` is not a node of the graph or if no reachable
/// node matches. Among matches at the minimal hop count, the one enqueued
/// first wins.
pub fn find_nearest<F>(graph: &SocialGraph, start: &str, predicate: F) -> Option<NodeId>
where
    F: Fn(&NodeView<'_>) -> bool,
{
    search(graph, start, predicate).found.map(|m| m.id)
}

/// Same traversal as [`find_nearest`], returning depth, path and trace.
///
/// Dangling neighbor references are tested against the predicate with an
/// empty attribute map but never expanded.
pub fn search<F>(graph: &SocialGraph, start: &str, predicate: F) -> SearchOutcome
where
    F: Fn(&NodeView<'_>) -> bool,
{
    let mut trace = SearchTrace::default();

    let Some(start_index) = graph.index_of(start) else {
        return SearchOutcome { found: None, trace };
    };
    let start_id = &graph.nodes[start_index].id;

    let mut visited: HashSet<&NodeId> = HashSet::new();
    let mut parents: HashMap<&NodeId, &NodeId> = HashMap::new();
    let mut frontier: VecDeque<(&NodeId, usize)> = VecDeque::new();

    visited.insert(start_id);
    frontier.push_back((start_id, 0));
    trace.enqueued = 1;

    while let Some((current, depth)) = frontier.pop_front() {
        trace.visit_order.push(current.clone());

        let view = graph.view(current);
        if predicate(&view) {
            let found = FoundNode {
                id: current.clone(),
                depth,
                path: rebuild_path(&parents, current),
                attributes: view.attributes.clone(),
                dangling: view.dangling,
            };
            return SearchOutcome {
                found: Some(found),
                trace,
            };
        }

        for neighbor in graph.neighbors(current.as_str()) {
            if !visited.insert(neighbor) {
                trace.duplicates_suppressed += 1;
                continue;
            }
            parents.insert(neighbor, current);
            frontier.push_back((neighbor, depth + 1));
            trace.enqueued += 1;
        }
    }

    SearchOutcome { found: None, trace }
}

/// Hop count of the shortest directed path `from → to`.
///
/// `Some(0)` when `from == to` and `from` is a node. `to` may be a dangling
/// reference; it is reachable if some reachable node lists it.
pub fn degrees_of_separation(graph: &SocialGraph, from: &str, to: &str) -> Option<usize> {
    shortest_path(graph, from, to).map(|path| path.len() - 1)
}

/// Node ids along a shortest directed path `from → to`, both ends included.
pub fn shortest_path(graph: &SocialGraph, from: &str, to: &str) -> Option<Vec<NodeId>> {
    search(graph, from, |v| v.id.as_str() == to)
        .found
        .map(|m| m.path)
}

/// Every id reachable from `start` with its hop count, in discovery order.
///
/// Includes `start` at depth 0 and dangling references. Empty if `start` is
/// not a node.
pub fn reachable(graph: &SocialGraph, start: &str) -> Vec<(NodeId, usize)> {
    let Some(start_index) = graph.index_of(start) else {
        return Vec::new();
    };
    let start_id = &graph.nodes[start_index].id;

    let mut visited: HashSet<&NodeId> = HashSet::new();
    visited.insert(start_id);

    let mut out = Vec::new();
    let mut queue: VecDeque<(&NodeId, usize)> = VecDeque::new();
    queue.push_back((start_id, 0));

    while let Some((node, hops)) = queue.pop_front() {
        out.push((node.clone(), hops));
        for neighbor in graph.neighbors(node.as_str()) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    out
}

fn rebuild_path(parents: &HashMap<&NodeId, &NodeId>, target: &NodeId) -> Vec<NodeId> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(&parent) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}
