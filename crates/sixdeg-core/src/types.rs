//! Core domain types for sixdeg graphs.
//!
//! A graph is a set of named nodes, each carrying a small string attribute
//! map, plus directed adjacency lists between node names.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SixdegError};

/// Attribute key holding a person's role (e.g. "chef", "policeOffice").
pub const ROLE_ATTRIBUTE: &str = "job";

/// Attribute map attached to a node. Ordered so serialized output is stable.
pub type Attributes = BTreeMap<String, String>;

// ── Node ──────────────────────────────────────────────────────────

/// Unique identifier (name) of a node.
///
/// Construction through `From` is unchecked. Empty ids are rejected when a
/// [`GraphDocument`] is validated and ignored when inserted into a graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Parse a node id, rejecting the empty string.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(SixdegError::InvalidNodeId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A named entity with labeled attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Shorthand for a node carrying a `job` attribute.
    pub fn person(id: &str, role: &str) -> Self {
        Self::new(id).with_attribute(ROLE_ATTRIBUTE, role)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str, value: &str) -> bool {
        self.attribute(key) == Some(value)
    }
}

// ── Wire format ───────────────────────────────────────────────────

/// JSON graph description accepted at the request boundary.
///
/// ```json
/// { "nodes": [ {"id": "you", "attributes": {"job": "unknown"}} ],
///   "adjacency": { "you": ["ana", "bob"] } }
/// ```
///
/// Every id listed in `nodes` or used as an `adjacency` key is a graph node.
/// Neighbor ids that appear nowhere else are dangling references and are
/// accepted as-is. Adjacency entries keep document order, repeated keys
/// included, so that [`GraphDocument::validate`] can reject them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default, with = "adjacency_entries")]
    pub adjacency: Vec<(NodeId, Vec<NodeId>)>,
}

impl GraphDocument {
    /// Decode and validate a document from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        let doc: GraphDocument = serde_json::from_str(input)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check id well-formedness and uniqueness of node records and
    /// adjacency keys.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for record in &self.nodes {
            NodeId::parse(record.id.as_str())?;
            if !seen.insert(record.id.as_str()) {
                return Err(SixdegError::DuplicateNode(record.id.0.clone()));
            }
        }

        let mut sources = HashSet::with_capacity(self.adjacency.len());
        for (source, neighbors) in &self.adjacency {
            NodeId::parse(source.as_str())?;
            if !sources.insert(source.as_str()) {
                return Err(SixdegError::DuplicateAdjacency(source.0.clone()));
            }
            for neighbor in neighbors {
                NodeId::parse(neighbor.as_str())?;
            }
        }

        tracing::trace!(
            nodes = self.nodes.len(),
            sources = self.adjacency.len(),
            "Graph document validated"
        );
        Ok(())
    }

    /// Outgoing list for `source`, first entry wins.
    pub fn neighbors_of(&self, source: &str) -> Option<&[NodeId]> {
        self.adjacency
            .iter()
            .find(|(id, _)| id.as_str() == source)
            .map(|(_, neighbors)| neighbors.as_slice())
    }
}

/// Serde adapter: a JSON object read as an ordered list of entries, so
/// repeated keys survive decoding instead of overwriting each other.
mod adjacency_entries {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use super::NodeId;

    type Entries = Vec<(NodeId, Vec<NodeId>)>;

    pub fn serialize<S: Serializer>(entries: &Entries, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Entries, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Entries;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from node id to a list of neighbor ids")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Entries, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<NodeId, Vec<NodeId>>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_rejects_empty() {
        assert!(matches!(
            NodeId::parse(""),
            Err(SixdegError::InvalidNodeId(_))
        ));
        assert_eq!(NodeId::parse("you").unwrap().as_str(), "you");
    }

    #[test]
    fn test_person_role() {
        let fom = Node::person("fom", "policeOffice");
        assert_eq!(fom.attribute(ROLE_ATTRIBUTE), Some("policeOffice"));
        assert!(fom.has_attribute("job", "policeOffice"));
        assert!(!fom.has_attribute("job", "chef"));
        assert_eq!(fom.attribute("age"), None);
    }

    #[test]
    fn test_document_from_json() {
        let doc = GraphDocument::from_json(
            r#"{
                "nodes": [{"id": "you", "attributes": {"job": "unknown"}}, {"id": "ana"}],
                "adjacency": {"you": ["ana", "bob"]}
            }"#,
        )
        .unwrap();

        assert_eq!(doc.nodes.len(), 2);
        assert!(doc.nodes[1].attributes.is_empty());
        assert_eq!(
            doc.neighbors_of("you").unwrap(),
            &[NodeId::from("ana"), NodeId::from("bob")]
        );
        assert_eq!(doc.neighbors_of("ana"), None);
    }

    #[test]
    fn test_document_duplicate_adjacency_key() {
        let result =
            GraphDocument::from_json(r#"{"adjacency": {"A": ["B"], "A": ["C"], "B": [], "C": []}}"#);
        assert!(matches!(result, Err(SixdegError::DuplicateAdjacency(id)) if id == "A"));
    }

    #[test]
    fn test_document_adjacency_keeps_document_order() {
        let doc = GraphDocument::from_json(r#"{"adjacency": {"z": ["a"], "a": [], "m": ["z"]}}"#)
            .unwrap();
        let keys: Vec<&str> = doc.adjacency.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["adjacency"]["m"], serde_json::json!(["z"]));
    }

    #[test]
    fn test_document_duplicate_node() {
        let result = GraphDocument::from_json(r#"{"nodes": [{"id": "a"}, {"id": "a"}]}"#);
        assert!(matches!(result, Err(SixdegError::DuplicateNode(id)) if id == "a"));
    }

    #[test]
    fn test_document_empty_source_id() {
        let result = GraphDocument::from_json(r#"{"adjacency": {"": ["a"]}}"#);
        assert!(matches!(result, Err(SixdegError::InvalidNodeId(_))));
    }

    #[test]
    fn test_document_empty_neighbor_id() {
        let result = GraphDocument::from_json(r#"{"adjacency": {"a": [""]}}"#);
        assert!(matches!(result, Err(SixdegError::InvalidNodeId(_))));
    }

    #[test]
    fn test_document_malformed_json() {
        let result = GraphDocument::from_json("{\"nodes\": 3}");
        assert!(matches!(result, Err(SixdegError::Serialization(_))));
    }

    #[test]
    fn test_node_id_serializes_as_string() {
        let json = serde_json::to_string(&NodeId::from("bob")).unwrap();
        assert_eq!(json, "\"bob\"");
    }
}
