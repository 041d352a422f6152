//! Serialization of a [`ParentGraph`] into the Graphviz DOT text format.

use crate::graph::ParentGraph;

/// Renders the graph as a DOT `digraph` document.
///
/// One `"parent" -> "child"` statement is written per edge, in the child's
/// discovery order, between the opening `digraph <name> {` header and the
/// closing brace. Double quotes and backslashes inside paths are escaped so
/// a compliant DOT reader recovers the original path exactly.
pub fn to_dot(graph: &ParentGraph, name: &str) -> String {
    let mut out = String::with_capacity(64 + graph.edges().len() * 32);
    out.push_str(&format!("digraph {} {{\n", name));
    for edge in graph.edges() {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\"\n",
            escape(&edge.parent),
            escape(&edge.child)
        ));
    }
    out.push_str("}\n");
    out
}

/// Escapes a raw path for inclusion in a DOT double-quoted string.
fn escape(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
