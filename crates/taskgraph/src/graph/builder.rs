//! Graph construction.
//!
//! The pure builders ([`full_graph`], [`neighbors_graph`]) work over task
//! slices already fetched from a store. [`GraphService`] wraps them with the
//! store reads, so each build runs against exactly one snapshot.

use super::{cycle, GraphEdge, GraphNode, GraphResult};
use crate::domain::{Task, TaskId, TaskStatus};
use crate::error::Result;
use crate::storage::TaskStore;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, VecDeque};

/// Append-only node/edge accumulator owned by a single build.
///
/// Node and edge indices grow in insertion order, which becomes the order of
/// the finished result.
#[derive(Default)]
struct GraphAccumulator {
    /// Edge direction: dependency -> dependent.
    graph: DiGraph<GraphNode, ()>,

    /// Maps each inserted id to its node.
    node_map: HashMap<TaskId, NodeIndex>,
}

impl GraphAccumulator {
    fn contains(&self, id: &TaskId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Insert `node` unless its id is already present (first writer wins).
    fn insert_node(&mut self, node: GraphNode) {
        if !self.node_map.contains_key(&node.id) {
            let id = node.id.clone();
            let index = self.graph.add_node(node);
            self.node_map.insert(id, index);
        }
    }

    /// Add `from -> to` once. Both endpoints must already be inserted.
    fn add_edge(&mut self, from: &TaskId, to: &TaskId) {
        let (Some(&source), Some(&target)) = (self.node_map.get(from), self.node_map.get(to))
        else {
            return;
        };
        if self.graph.find_edge(source, target).is_none() {
            self.graph.add_edge(source, target, ());
        }
    }

    fn finish(self, center_id: Option<TaskId>) -> GraphResult {
        let has_cycles = cycle::is_cyclic(&self.graph);

        let (nodes, edges) = self.graph.into_nodes_edges();
        let nodes: Vec<GraphNode> = nodes.into_iter().map(|n| n.weight).collect();
        let edges = edges
            .iter()
            .map(|e| GraphEdge {
                from: nodes[e.source().index()].id.clone(),
                to: nodes[e.target().index()].id.clone(),
            })
            .collect();

        GraphResult {
            center_id,
            nodes,
            edges,
            has_cycles,
        }
    }
}

/// Build the graph over every task in `tasks`, in slice order.
///
/// For each task its node is inserted, then for each dependency an edge
/// `dependency -> task`.
///
/// The fetched set is indexed before any node is inserted. A dependency that
/// is listed after its dependent still gets its real node at first sight
/// instead of a placeholder that would then win as first writer. Placeholders
/// therefore mean exactly "id absent from `tasks`", which includes real tasks
/// excluded by the status filter.
pub fn full_graph(tasks: &[Task]) -> GraphResult {
    let by_id: HashMap<&TaskId, &Task> = tasks.iter().map(|t| (&t.id, t)).collect();
    let mut acc = GraphAccumulator::default();

    for task in tasks {
        acc.insert_node(GraphNode::from_task(task));

        for dep_id in task.dependency_ids() {
            if !acc.contains(dep_id) {
                let node = match by_id.get(dep_id) {
                    Some(dep) => GraphNode::from_task(dep),
                    None => GraphNode::placeholder(dep_id.clone()),
                };
                acc.insert_node(node);
            }
            acc.add_edge(dep_id, &task.id);
        }
    }

    acc.finish(None)
}

/// Build the neighborhood of `center` within `depth` hops over `snapshot`.
///
/// Expansion is breadth-first over a worklist of `(task, remaining_depth)`.
/// At each task, dependencies are expanded first (in list order), then
/// dependents (in snapshot order). A task with no remaining budget keeps the
/// edges already discovered but is not expanded.
///
/// Dependencies missing from `snapshot` become placeholder nodes when
/// `include_placeholders` is set; otherwise the node and its edge are both
/// dropped, so no edge ever dangles.
pub fn neighbors_graph(
    center: &Task,
    snapshot: &[Task],
    depth: usize,
    include_placeholders: bool,
) -> GraphResult {
    let by_id: HashMap<&TaskId, &Task> = snapshot.iter().map(|t| (&t.id, t)).collect();
    let mut acc = GraphAccumulator::default();
    acc.insert_node(GraphNode::from_task(center));

    let mut worklist: VecDeque<(&Task, usize)> = VecDeque::from([(center, depth)]);

    while let Some((current, remaining)) = worklist.pop_front() {
        if remaining == 0 {
            continue;
        }
        let next = remaining - 1;

        for dep_id in current.dependency_ids() {
            if !acc.contains(dep_id) {
                match by_id.get(dep_id) {
                    Some(&dep) => {
                        acc.insert_node(GraphNode::from_task(dep));
                        worklist.push_back((dep, next));
                    }
                    None if include_placeholders => {
                        acc.insert_node(GraphNode::placeholder(dep_id.clone()));
                    }
                    None => continue,
                }
            }
            acc.add_edge(dep_id, &current.id);
        }

        for candidate in snapshot {
            if acc.contains(&candidate.id) || !candidate.depends_on(&current.id) {
                continue;
            }
            acc.insert_node(GraphNode::from_task(candidate));
            acc.add_edge(&current.id, &candidate.id);
            worklist.push_back((candidate, next));
        }
    }

    acc.finish(Some(center.id.clone()))
}

/// Graph queries backed by a [`TaskStore`].
///
/// Holds no state besides the store reference; any number of builds may run
/// concurrently.
#[derive(Clone, Copy)]
pub struct GraphService<'a> {
    store: &'a dyn TaskStore,
}

impl std::fmt::Debug for GraphService<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphService")
            .field("store", &"<dyn TaskStore>")
            .finish()
    }
}

impl<'a> GraphService<'a> {
    /// Create a service reading from `store`.
    pub fn new(store: &'a dyn TaskStore) -> Self {
        Self { store }
    }

    /// Graph of every task whose status is in `statuses` (empty = all).
    ///
    /// # Errors
    ///
    /// Propagates store failures unmodified.
    pub async fn build_graph(&self, statuses: &[TaskStatus]) -> Result<GraphResult> {
        let tasks = self.store.fetch_by_statuses(statuses).await?;
        let result = full_graph(&tasks);

        tracing::debug!(
            statuses = ?statuses,
            nodes = result.nodes.len(),
            edges = result.edges.len(),
            has_cycles = result.has_cycles,
            "Built task graph"
        );
        Ok(result)
    }

    /// Neighborhood graph of `center_id` within `depth` hops.
    ///
    /// An unknown center is not an error: the result is empty but still
    /// carries `center_id`.
    ///
    /// # Errors
    ///
    /// Propagates store failures unmodified.
    pub async fn build_neighbors(
        &self,
        center_id: &TaskId,
        depth: usize,
        include_placeholders: bool,
    ) -> Result<GraphResult> {
        let Some(center) = self.store.fetch_by_id(center_id).await? else {
            tracing::debug!(center = %center_id, "Center task not found, returning empty graph");
            return Ok(GraphResult::empty(Some(center_id.clone())));
        };

        // One snapshot for the whole expansion
        let snapshot = self.store.fetch_all().await?;
        let result = neighbors_graph(&center, &snapshot, depth, include_placeholders);

        tracing::debug!(
            center = %center_id,
            depth,
            include_placeholders,
            nodes = result.nodes.len(),
            edges = result.edges.len(),
            has_cycles = result.has_cycles,
            "Built neighbors graph"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::{InMemoryTaskStore, UnavailableStore};

    fn node_ids(result: &GraphResult) -> Vec<&str> {
        result.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_full_graph_of_nothing_is_empty() {
        let result = full_graph(&[]);
        assert_eq!(result, GraphResult::empty(None));
    }

    #[test]
    fn test_full_graph_resolves_dependency_listed_later() {
        let tasks = vec![
            Task::new("b", "B").with_depends(["a"]),
            Task::new("a", "A"),
        ];

        let result = full_graph(&tasks);

        assert_eq!(node_ids(&result), vec!["b", "a"]);
        assert_eq!(result.placeholder_count(), 0);
        assert_eq!(result.node(&TaskId::new("a")).unwrap().title, "A");
        assert_eq!(result.edges, vec![GraphEdge::new("a", "b")]);
    }

    #[test]
    fn test_full_graph_handles_long_dependency_chain() {
        let tasks: Vec<Task> = (0..100_000)
            .map(|i| {
                let task = Task::new(format!("t{i}"), "Link");
                if i == 0 {
                    task
                } else {
                    task.with_depends([format!("t{}", i - 1)])
                }
            })
            .collect();

        let result = full_graph(&tasks);

        assert_eq!(result.nodes.len(), 100_000);
        assert_eq!(result.edges.len(), 99_999);
        assert_eq!(result.placeholder_count(), 0);
        assert!(!result.has_cycles);
    }

    #[test]
    fn test_full_graph_flags_cycle_closing_long_chain() {
        let tasks: Vec<Task> = (0..100_000)
            .map(|i| {
                let previous = if i == 0 { 99_999 } else { i - 1 };
                Task::new(format!("t{i}"), "Link").with_depends([format!("t{previous}")])
            })
            .collect();

        assert!(full_graph(&tasks).has_cycles);
    }

    #[test]
    fn test_full_graph_collapses_duplicate_dependencies() {
        let tasks = vec![
            Task::new("a", "A"),
            Task::new("b", "B").with_depends(["a", "a"]),
        ];

        let result = full_graph(&tasks);
        assert_eq!(result.edges.len(), 1);
    }

    #[test]
    fn test_accumulator_first_writer_wins() {
        let mut acc = GraphAccumulator::default();
        acc.insert_node(GraphNode::placeholder(TaskId::new("x")));
        acc.insert_node(GraphNode::from_task(&Task::new("x", "Real")));

        let result = acc.finish(None);
        assert_eq!(result.nodes.len(), 1);
        assert!(result.nodes[0].placeholder);
    }

    #[test]
    fn test_neighbors_prefers_shortest_path_budget() {
        // c -> b -> a (each depends on the previous) and c depends on a directly.
        // From a with depth 1, both b and c are one hop away.
        let snapshot = vec![
            Task::new("a", "A"),
            Task::new("b", "B").with_depends(["a"]),
            Task::new("c", "C").with_depends(["b", "a"]),
        ];

        let result = neighbors_graph(&snapshot[0], &snapshot, 1, true);

        assert_eq!(node_ids(&result), vec!["a", "b", "c"]);
        assert!(result.has_edge(&TaskId::new("a"), &TaskId::new("b")));
        assert!(result.has_edge(&TaskId::new("a"), &TaskId::new("c")));
        // b and c are frontier nodes: the b -> c edge is never explored
        assert!(!result.has_edge(&TaskId::new("b"), &TaskId::new("c")));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = UnavailableStore::new("down");
        let service = GraphService::new(&store);

        let full = service.build_graph(&[]).await;
        assert!(matches!(full, Err(Error::StoreUnavailable(_))));

        let neighbors = service.build_neighbors(&TaskId::new("x"), 2, true).await;
        assert!(matches!(neighbors, Err(Error::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_service_reads_through_store() {
        let store = InMemoryTaskStore::from_tasks(vec![
            Task::new("a", "A").with_status(TaskStatus::Completed),
            Task::new("b", "B").with_depends(["a"]),
        ]);
        let service = GraphService::new(&store);

        // The completed dependency is filtered out and becomes a placeholder.
        let pending = service.build_graph(&[TaskStatus::Pending]).await.unwrap();
        assert_eq!(node_ids(&pending), vec!["b", "a"]);
        assert!(pending.node(&TaskId::new("a")).unwrap().placeholder);

        let all = service.build_graph(&[]).await.unwrap();
        assert_eq!(all.placeholder_count(), 0);
    }
}
