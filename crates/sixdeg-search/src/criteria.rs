//! Serializable search predicates.
//!
//! Closures are the native predicate form for [`crate::bfs::find_nearest`];
//! `Criterion` is the same idea in a shape that can travel in a JSON request.

use serde::{Deserialize, Serialize};

use sixdeg_core::ROLE_ATTRIBUTE;

use crate::graph::NodeView;

/// A boolean test over a node reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criterion {
    /// The node's id equals `id`.
    IdEquals { id: String },
    /// The node's id ends with `suffix`.
    IdEndsWith { suffix: String },
    /// Attribute `key` is present and equals `value`.
    AttributeEquals { key: String, value: String },
    /// The node's `job` attribute equals `role`.
    HasRole { role: String },
    /// At least one inner criterion matches. Empty never matches.
    Any { criteria: Vec<Criterion> },
    /// Every inner criterion matches. Empty always matches.
    All { criteria: Vec<Criterion> },
}

impl Criterion {
    pub fn id_equals(id: &str) -> Self {
        Self::IdEquals { id: id.to_string() }
    }

    pub fn has_role(role: &str) -> Self {
        Self::HasRole {
            role: role.to_string(),
        }
    }

    pub fn matches(&self, view: &NodeView<'_>) -> bool {
        match self {
            Self::IdEquals { id } => view.id.as_str() == id.as_str(),
            Self::IdEndsWith { suffix } => view.id.as_str().ends_with(suffix.as_str()),
            Self::AttributeEquals { key, value } => view.attribute(key) == Some(value.as_str()),
            Self::HasRole { role } => view.attribute(ROLE_ATTRIBUTE) == Some(role.as_str()),
            Self::Any { criteria } => criteria.iter().any(|c| c.matches(view)),
            Self::All { criteria } => criteria.iter().all(|c| c.matches(view)),
        }
    }

    /// Short description used in log lines and demo output.
    pub fn describe(&self) -> String {
        match self {
            Self::IdEquals { id } => format!("id == {id}"),
            Self::IdEndsWith { suffix } => format!("id ends with {suffix:?}"),
            Self::AttributeEquals { key, value } => format!("{key} == {value}"),
            Self::HasRole { role } => format!("job == {role}"),
            Self::Any { criteria } => join(criteria, " or "),
            Self::All { criteria } => join(criteria, " and "),
        }
    }
}

fn join(criteria: &[Criterion], sep: &str) -> String {
    let parts: Vec<String> = criteria.iter().map(Criterion::describe).collect();
    format!("({})", parts.join(sep))
}
