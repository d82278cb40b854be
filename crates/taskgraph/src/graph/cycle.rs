//! Directed cycle detection.
//!
//! A directed graph is acyclic iff it has a topological order. petgraph's
//! `toposort` walks the graph with an explicit stack, so arbitrarily long
//! dependency chains never grow the call stack. Self-loops are cycles.
//! O(V + E).

use super::{GraphEdge, GraphNode};
use crate::domain::TaskId;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Returns `true` if the directed graph given by `nodes` and `edges` has a cycle.
///
/// Edge endpoints missing from `nodes` are added implicitly, so isolated and
/// unreferenced nodes are all visited.
pub fn has_cycle<'a, N, E>(nodes: N, edges: E) -> bool
where
    N: IntoIterator<Item = &'a TaskId>,
    E: IntoIterator<Item = (&'a TaskId, &'a TaskId)>,
{
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let mut node_map: HashMap<&TaskId, NodeIndex> = HashMap::new();

    for id in nodes {
        node_map.entry(id).or_insert_with(|| graph.add_node(()));
    }
    for (from, to) in edges {
        let source = *node_map.entry(from).or_insert_with(|| graph.add_node(()));
        let target = *node_map.entry(to).or_insert_with(|| graph.add_node(()));
        graph.add_edge(source, target, ());
    }

    is_cyclic(&graph)
}

/// [`has_cycle`] over graph result parts.
pub fn detect(nodes: &[GraphNode], edges: &[GraphEdge]) -> bool {
    has_cycle(
        nodes.iter().map(|n| &n.id),
        edges.iter().map(|e| (&e.from, &e.to)),
    )
}

/// Cycle check over an already-built petgraph graph.
pub(crate) fn is_cyclic<N, E>(graph: &DiGraph<N, E>) -> bool {
    toposort(graph, None).is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<TaskId> {
        names.iter().map(|n| TaskId::new(*n)).collect()
    }

    fn check(nodes: &[&str], edges: &[(&str, &str)]) -> bool {
        let nodes = ids(nodes);
        let edges: Vec<(TaskId, TaskId)> = edges
            .iter()
            .map(|(a, b)| (TaskId::new(*a), TaskId::new(*b)))
            .collect();
        has_cycle(&nodes, edges.iter().map(|(a, b)| (a, b)))
    }

    #[test]
    fn test_chain_has_no_cycle() {
        assert!(!check(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
    }

    #[test]
    fn test_triangle_is_cycle() {
        assert!(check(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        assert!(check(&["a"], &[("a", "a")]));
    }

    #[test]
    fn test_empty_graph_has_no_cycle() {
        assert!(!check(&[], &[]));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // Two paths converging on the same node are cross edges, not back edges.
        assert!(!check(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]
        ));
    }

    #[test]
    fn test_cycle_in_disconnected_component_is_found() {
        assert!(check(
            &["a", "b", "x", "y"],
            &[("a", "b"), ("x", "y"), ("y", "x")]
        ));
    }

    #[test]
    fn test_edge_endpoints_need_not_be_listed_as_nodes() {
        assert!(check(&[], &[("p", "q"), ("q", "p")]));
        assert!(!check(&["lonely"], &[("p", "q")]));
    }

    #[test]
    fn test_long_chain_does_not_exhaust_stack() {
        let nodes: Vec<TaskId> = (0..200_000).map(|i| TaskId::new(format!("t{i}"))).collect();
        let chain = || nodes.windows(2).map(|pair| (&pair[0], &pair[1]));

        assert!(!has_cycle(&nodes, chain()));

        let closing = (&nodes[nodes.len() - 1], &nodes[0]);
        assert!(has_cycle(&nodes, chain().chain(std::iter::once(closing))));
    }

    #[test]
    fn test_detect_over_result_parts() {
        let nodes = vec![
            GraphNode::placeholder(TaskId::new("a")),
            GraphNode::placeholder(TaskId::new("b")),
        ];
        let acyclic = vec![GraphEdge::new("a", "b")];
        let cyclic = vec![GraphEdge::new("a", "b"), GraphEdge::new("b", "a")];

        assert!(!detect(&nodes, &acyclic));
        assert!(detect(&nodes, &cyclic));
    }
}
