//! sixdeg-search: Nearest-match breadth-first search over labeled graphs.
//!
//! Builds an in-memory directed graph from a JSON document, then answers
//! "who is the closest person with role X?" and "how many hops separate A
//! from B?" with a plain BFS. The start node may itself be the match;
//! unknown start nodes and exhausted searches both come back as "not found".

pub mod bfs;
pub mod config;
pub mod criteria;
pub mod error;
pub mod graph;
pub mod sample;
pub mod types;

pub use bfs::{degrees_of_separation, find_nearest, reachable, search, SearchOutcome};
pub use config::SearchConfig;
pub use criteria::Criterion;
pub use error::SearchError;
pub use graph::{NodeView, SocialGraph};
pub use types::{
    FoundNode, GraphStats, SearchRequest, SearchResult, SearchTrace, SeparationRequest,
    SeparationResult,
};

/// Serves search requests against graphs supplied per request.
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Read a JSON [`SearchRequest`] from `reader` and run it.
    pub fn search_from_reader<R: std::io::Read>(&self, reader: R) -> error::Result<SearchResult> {
        let input = std::io::read_to_string(reader)?;
        let request: SearchRequest = serde_json::from_str(&input)?;
        self.run_search(request)
    }

    /// Read a JSON [`SeparationRequest`] from `reader` and run it.
    pub fn separation_from_reader<R: std::io::Read>(
        &self,
        reader: R,
    ) -> error::Result<SeparationResult> {
        let input = std::io::read_to_string(reader)?;
        let request: SeparationRequest = serde_json::from_str(&input)?;
        self.run_separation(request)
    }

    /// Build the request's graph and find the nearest match.
    pub fn run_search(&self, request: SearchRequest) -> error::Result<SearchResult> {
        let graph = SocialGraph::from_document(request.graph)?;
        let include_trace = request.include_trace.unwrap_or(self.config.include_trace);
        Ok(self.search_graph(&graph, &request.start, &request.criterion, include_trace))
    }

    /// Search an already-built graph.
    pub fn search_graph(
        &self,
        graph: &SocialGraph,
        start: &str,
        criterion: &Criterion,
        include_trace: bool,
    ) -> SearchResult {
        let started = std::time::Instant::now();

        if !graph.contains(start) {
            tracing::debug!(start, "Start node not in graph");
        }

        let outcome = bfs::search(graph, start, |view| criterion.matches(view));
        let computation_ms = started.elapsed().as_millis() as u64;

        match &outcome.found {
            Some(found) => tracing::info!(
                start,
                criterion = %criterion.describe(),
                found = %found.id,
                depth = found.depth,
                visited = outcome.trace.visit_order.len(),
                "Match found"
            ),
            None => tracing::info!(
                start,
                criterion = %criterion.describe(),
                visited = outcome.trace.visit_order.len(),
                "No match reachable"
            ),
        }

        SearchResult {
            start: start.to_string(),
            found: outcome.found,
            trace: include_trace.then_some(outcome.trace),
            graph_stats: graph_stats(graph),
            computation_ms,
        }
    }

    /// Hop distance and path between two nodes of the request's graph.
    pub fn run_separation(&self, request: SeparationRequest) -> error::Result<SeparationResult> {
        let graph = SocialGraph::from_document(request.graph)?;
        let path = bfs::shortest_path(&graph, &request.from, &request.to);
        let degrees = path.as_ref().map(|p| p.len() - 1);

        tracing::info!(
            from = %request.from,
            to = %request.to,
            degrees = ?degrees,
            "Separation computed"
        );

        Ok(SeparationResult {
            from: request.from,
            to: request.to,
            degrees,
            path,
        })
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Summary counts for a graph.
pub fn graph_stats(graph: &SocialGraph) -> GraphStats {
    GraphStats {
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        dangling_references: graph.dangling_references().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: serde_json::Value) -> SearchRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_run_search_with_role() {
        let engine = SearchEngine::default();
        let result = engine
            .run_search(request(serde_json::json!({
                "graph": {
                    "nodes": [
                        {"id": "you", "attributes": {"job": "unknown"}},
                        {"id": "bob", "attributes": {"job": "chef"}}
                    ],
                    "adjacency": {"you": ["bob"]}
                },
                "start": "you",
                "criterion": {"type": "has_role", "role": "chef"}
            })))
            .unwrap();

        let found = result.found.unwrap();
        assert_eq!(found.id.as_str(), "bob");
        assert_eq!(found.depth, 1);
        assert_eq!(found.attributes.get("job").map(String::as_str), Some("chef"));
        assert!(result.trace.is_none());
        assert_eq!(result.graph_stats.total_nodes, 2);
        assert_eq!(result.graph_stats.total_edges, 1);
    }

    #[test]
    fn test_trace_override() {
        let engine = SearchEngine::new(SearchConfig {
            include_trace: true,
            ..Default::default()
        });
        let base = serde_json::json!({
            "graph": {"adjacency": {"A": ["B"]}},
            "start": "A",
            "criterion": {"type": "id_equals", "id": "B"}
        });

        let with_default = engine.run_search(request(base.clone())).unwrap();
        assert_eq!(with_default.trace.unwrap().enqueued, 2);

        let mut off = base;
        off["include_trace"] = serde_json::json!(false);
        assert!(engine.run_search(request(off)).unwrap().trace.is_none());
    }

    #[test]
    fn test_run_search_unknown_start_is_not_an_error() {
        let engine = SearchEngine::default();
        let result = engine
            .run_search(request(serde_json::json!({
                "graph": {"adjacency": {"A": []}},
                "start": "nobody",
                "criterion": {"type": "all", "criteria": []}
            })))
            .unwrap();
        assert!(result.found.is_none());
    }

    #[test]
    fn test_run_search_rejects_bad_document() {
        let engine = SearchEngine::default();
        let result = engine.run_search(request(serde_json::json!({
            "graph": {"nodes": [{"id": "A"}, {"id": "A"}]},
            "start": "A",
            "criterion": {"type": "id_equals", "id": "A"}
        })));
        assert!(matches!(result, Err(SearchError::Core(_))));
    }

    #[test]
    fn test_run_search_rejects_repeated_adjacency_key() {
        let engine = SearchEngine::default();
        let input = r#"{
            "graph": {"adjacency": {"A": ["B"], "A": ["C"], "B": [], "C": []}},
            "start": "A",
            "criterion": {"type": "id_equals", "id": "B"}
        }"#;
        let result = engine.search_from_reader(input.as_bytes());
        assert!(matches!(
            result,
            Err(SearchError::Core(sixdeg_core::SixdegError::DuplicateAdjacency(id))) if id == "A"
        ));
    }

    #[test]
    fn test_search_from_reader() {
        let engine = SearchEngine::default();
        let input = r#"{
            "graph": {"adjacency": {"A": ["B"], "B": []}},
            "start": "A",
            "criterion": {"type": "id_equals", "id": "B"}
        }"#;
        let result = engine.search_from_reader(input.as_bytes()).unwrap();
        assert_eq!(result.found.unwrap().depth, 1);
    }

    #[test]
    fn test_from_reader_malformed_json() {
        let engine = SearchEngine::default();
        let result = engine.search_from_reader("{\"graph\": ".as_bytes());
        assert!(matches!(result, Err(SearchError::Serialization(_))));

        let result = engine.separation_from_reader("[]".as_bytes());
        assert!(matches!(result, Err(SearchError::Serialization(_))));
    }

    struct BrokenPipe;

    impl std::io::Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_from_reader_io_error() {
        let engine = SearchEngine::default();
        assert!(matches!(
            engine.search_from_reader(BrokenPipe),
            Err(SearchError::Io(_))
        ));
        assert!(matches!(
            engine.separation_from_reader(BrokenPipe),
            Err(SearchError::Io(_))
        ));
    }

    #[test]
    fn test_run_separation() {
        let engine = SearchEngine::default();
        let request: SeparationRequest = serde_json::from_value(serde_json::json!({
            "graph": {"adjacency": {"A": ["B"], "B": ["C"], "C": []}},
            "from": "A",
            "to": "C"
        }))
        .unwrap();

        let result = engine.run_separation(request).unwrap();
        assert_eq!(result.degrees, Some(2));
        assert_eq!(result.path.unwrap().len(), 3);
    }

    #[test]
    fn test_graph_stats_counts_dangling() {
        let graph = SocialGraph::from_adjacency([("A", vec!["B", "C", "C"])]);
        let stats = graph_stats(&graph);
        assert_eq!(
            stats,
            GraphStats {
                total_nodes: 1,
                total_edges: 3,
                dangling_references: 2,
            }
        );
    }
}
