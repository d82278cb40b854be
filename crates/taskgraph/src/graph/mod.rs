//! Task dependency graph results.
//!
//! Every query builds a fresh [`GraphResult`] and discards it after use; no
//! graph state survives between calls.
//!
//! # Edge Direction Convention
//!
//! Edges point from **dependency -> dependent**: an edge `A -> B` means `A`
//! is a dependency of `B`, i.e. `B` should not proceed until `A` completes.
//! This is the reverse of how the relation is stored on tasks (`B.depends`
//! lists `A`).
//!
//! # Well-formedness
//!
//! Every result satisfies:
//!
//! - exactly one node per distinct id (first writer wins)
//! - every edge endpoint is a node of the same result
//! - each `(from, to)` pair appears at most once
//! - `has_cycles` is the exact answer of [`cycle::has_cycle`] over the result

pub mod builder;
pub mod cycle;

pub use builder::{full_graph, neighbors_graph, GraphService};

use crate::domain::{Priority, Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Title given to nodes synthesized for unresolved dependency ids.
pub const PLACEHOLDER_TITLE: &str = "Unknown Task";

/// A node of a graph result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Task id, or the unresolved dependency id for placeholders
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Task status
    pub status: TaskStatus,

    /// Display name of the owning project
    pub project_display_name: Option<String>,

    /// Assignee
    pub assignee: Option<String>,

    /// Priority level, serialized as its upper-case label (`HIGH`, `NONE`, ...)
    #[serde(with = "priority_label")]
    pub priority: Priority,

    /// Cached urgency copied from the task (0.0 if never computed)
    pub urgency: f64,

    /// True iff no task with this id was found while building
    pub placeholder: bool,
}

impl GraphNode {
    /// Node for a resolved task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            project_display_name: task.project_display_name.clone(),
            assignee: task.assignee.clone(),
            priority: task.priority,
            urgency: task.urgency_or_zero(),
            placeholder: false,
        }
    }

    /// Stand-in node for a dependency id that resolves to no task.
    pub fn placeholder(id: TaskId) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            status: TaskStatus::Pending,
            project_display_name: None,
            assignee: None,
            priority: Priority::None,
            urgency: 0.0,
            placeholder: true,
        }
    }
}

/// Node priorities travel as display labels rather than the task wire names.
mod priority_label {
    use crate::domain::Priority;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(
        priority: &Priority,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(priority.label())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Priority, D::Error> {
        let label = String::deserialize(deserializer)?;
        Priority::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown priority '{label}'")))
    }
}

/// A directed edge: `from` is a dependency of `to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    /// The dependency
    pub from: TaskId,

    /// The dependent
    pub to: TaskId,
}

impl GraphEdge {
    /// Create an edge from `from` (dependency) to `to` (dependent).
    pub fn new(from: impl Into<TaskId>, to: impl Into<TaskId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Immutable answer to a graph query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphResult {
    /// The requested center for neighbors queries; `None` for full graphs
    pub center_id: Option<TaskId>,

    /// Nodes in insertion order
    pub nodes: Vec<GraphNode>,

    /// Edges in first-discovery order
    pub edges: Vec<GraphEdge>,

    /// Whether the node/edge set contains a directed cycle
    pub has_cycles: bool,
}

impl GraphResult {
    /// A result with no nodes or edges.
    pub fn empty(center_id: Option<TaskId>) -> Self {
        Self {
            center_id,
            nodes: Vec::new(),
            edges: Vec::new(),
            has_cycles: false,
        }
    }

    /// Whether the result has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &TaskId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Whether an edge `from -> to` is present.
    pub fn has_edge(&self, from: &TaskId, to: &TaskId) -> bool {
        self.edges.iter().any(|e| &e.from == from && &e.to == to)
    }

    /// Number of placeholder nodes.
    pub fn placeholder_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.placeholder).count()
    }

    /// Nodes ordered for display: highest urgency first, ties broken by id.
    pub fn nodes_by_urgency(&self) -> Vec<&GraphNode> {
        let mut nodes: Vec<&GraphNode> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| b.urgency.total_cmp(&a.urgency).then_with(|| a.id.cmp(&b.id)));
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let node = GraphNode::placeholder(TaskId::new("ghost"));

        assert!(node.placeholder);
        assert_eq!(node.title, PLACEHOLDER_TITLE);
        assert_eq!(node.status, TaskStatus::Pending);
        assert_eq!(node.priority, Priority::None);
        assert!(node.urgency.abs() < f64::EPSILON);
    }

    #[test]
    fn test_placeholder_json_uses_priority_label() {
        let json = serde_json::to_value(GraphNode::placeholder(TaskId::new("z"))).unwrap();

        assert_eq!(json["priority"], "NONE");
        assert_eq!(json["title"], PLACEHOLDER_TITLE);
        assert_eq!(json["placeholder"], true);
    }

    #[test]
    fn test_node_json_round_trips_priority_label() {
        let node = GraphNode::from_task(&Task::new("t-1", "Ship").with_priority(Priority::High));

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains(r#""priority":"HIGH""#), "json: {json}");

        let back: GraphNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_node_json_rejects_unknown_priority() {
        let json = r#"{"id":"t","title":"T","status":"pending","project_display_name":null,"assignee":null,"priority":"SOMEDAY","urgency":0.0,"placeholder":false}"#;
        assert!(serde_json::from_str::<GraphNode>(json).is_err());
    }

    #[test]
    fn test_from_task_copies_cached_urgency() {
        let task = Task::new("t-1", "Ship it")
            .with_priority(Priority::High)
            .with_assignee("alice")
            .with_project("Launch")
            .with_urgency(42.5);

        let node = GraphNode::from_task(&task);
        assert!(!node.placeholder);
        assert_eq!(node.title, "Ship it");
        assert_eq!(node.assignee.as_deref(), Some("alice"));
        assert_eq!(node.project_display_name.as_deref(), Some("Launch"));
        assert!((node.urgency - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nodes_by_urgency_orders_descending_then_by_id() {
        let result = GraphResult {
            center_id: None,
            nodes: vec![
                GraphNode::from_task(&Task::new("b", "B").with_urgency(5.0)),
                GraphNode::from_task(&Task::new("c", "C").with_urgency(9.0)),
                GraphNode::from_task(&Task::new("a", "A").with_urgency(5.0)),
            ],
            edges: vec![],
            has_cycles: false,
        };

        let order: Vec<&str> = result
            .nodes_by_urgency()
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_result_serializes_snake_case() {
        let json = serde_json::to_value(GraphResult::empty(Some(TaskId::new("x")))).unwrap();
        assert_eq!(json["center_id"], "x");
        assert_eq!(json["has_cycles"], false);
        assert!(json["nodes"].as_array().unwrap().is_empty());
    }
}
