//! Parent/child graph construction from an ordered list of directory paths.

use serde::{Deserialize, Serialize};

/// One directed parent -> child relationship between two directories.
///
/// Both endpoints are stored as the raw path strings they were discovered
/// under. No escaping is applied here; that is the serializer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub parent: String,
    pub child: String,
}

/// A forest of directories inferred from a walk-ordered path list.
///
/// Nodes keep their discovery order. Each node has at most one parent edge,
/// chosen by nearest-prefix matching: the most recently seen path that is a
/// proper prefix of the new path up to a `/` boundary. Paths with no such
/// ancestor in the input become roots of their own tree, so the result may
/// contain several disconnected trees (e.g. one per filesystem root walked).
///
/// The builder is pure string comparison over the input order. It does not
/// touch the filesystem and has no failure modes; an empty input produces an
/// empty graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentGraph {
    nodes: Vec<String>,
    edges: Vec<Edge>,
}

impl ParentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from paths in discovery order.
    ///
    /// The input contract matches what a directory walk produces: a directory
    /// appears after its parent whenever the parent is part of the input set,
    /// though not necessarily immediately after. Duplicate paths are a caller
    /// error and yield unspecified edges.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for path in paths {
            graph.insert(path.into());
        }
        graph
    }

    /// Records one path, inferring its parent among the paths seen so far.
    ///
    /// The scan runs over already-recorded paths in reverse discovery order
    /// and stops at the first candidate `p` where `path` continues past `p`
    /// with a `/`. Reverse order makes the choice the *nearest* previously
    /// seen ancestor, not the shortest one.
    pub fn insert(&mut self, path: String) {
        if let Some(parent) = self
            .nodes
            .iter()
            .rev()
            .find(|candidate| is_direct_prefix(candidate, &path))
        {
            self.edges.push(Edge {
                parent: parent.clone(),
                child: path.clone(),
            });
        }
        self.nodes.push(path);
    }

    /// All discovered paths, in discovery order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Parent edges, ordered by the child's discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes with no inferred parent in this graph.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|node| !self.edges.iter().any(|e| &e.child == *node))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// True when `child` starts with `candidate` immediately followed by `/`.
///
/// A trailing `/` on the candidate is ignored before comparison so a
/// candidate like `/a/` still matches `/a/b` instead of demanding `/a//b`.
/// The filesystem root `/` strips to the empty candidate and therefore
/// parents every absolute path, which keeps a walk of `/` a single tree.
/// Equality can never match: the child must be strictly longer than the
/// candidate by at least the separator and one further character.
fn is_direct_prefix(candidate: &str, child: &str) -> bool {
    let candidate = candidate.strip_suffix('/').unwrap_or(candidate);
    match child.as_bytes().get(candidate.len()) {
        Some(b'/') => child.starts_with(candidate) && child.len() > candidate.len() + 1,
        _ => false,
    }
}
