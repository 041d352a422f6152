use dirdot::{
    ParentGraph,
    ScanBuilder,
    scan,
    to_dot,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_basic_scan() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let options = ScanBuilder::new(dir.path()).build();
    let result = scan(options).unwrap();
    assert_eq!(result.graph.nodes().len(), 2);
    assert_eq!(result.graph.edges().len(), 1);
    assert!(result.graph.edges()[0].child.ends_with("sub"));
}
#[test]
fn test_files_are_not_nodes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let options = ScanBuilder::new(dir.path()).build();
    let result = scan(options).unwrap();
    assert_eq!(result.graph.nodes().len(), 1);
    assert!(result.graph.edges().is_empty());
}
#[test]
fn test_ignore_patterns() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("keep")).unwrap();
    fs::create_dir(dir.path().join("skip")).unwrap();
    let options = ScanBuilder::new(dir.path())
        .ignore_patterns(vec!["**/skip".into()])
        .build();
    let result = scan(options).unwrap();
    let nodes = result.graph.nodes();
    assert!(nodes.iter().any(|n| n.ends_with("keep")));
    assert!(!nodes.iter().any(|n| n.ends_with("skip")));
}
#[test]
fn test_max_depth() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    let options = ScanBuilder::new(dir.path()).max_depth(1).build();
    let result = scan(options).unwrap();
    assert!(result.graph.nodes().iter().any(|n| n.ends_with("a")));
    assert!(!result.graph.nodes().iter().any(|n| n.ends_with("b")));
}
#[test]
fn test_hidden_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".secret")).unwrap();
    let options = ScanBuilder::new(dir.path()).build();
    let result = scan(options).unwrap();
    assert_eq!(result.graph.nodes().len(), 1);
    let options = ScanBuilder::new(dir.path()).include_hidden(true).build();
    let result = scan(options).unwrap();
    assert_eq!(result.graph.nodes().len(), 2);
}
#[test]
fn test_nearest_seen_parent_policy() {
    let graph = ParentGraph::from_paths(["/a", "/a/b", "/a/c", "/a/c/d"]);
    let last = graph.edges().last().unwrap();
    assert_eq!(last.parent, "/a/c");
}
#[test]
fn test_dot_output_shape() {
    let graph = ParentGraph::from_paths(["/a", "/a/b", "/x"]);
    let dot = to_dot(&graph, "tree");
    assert!(dot.starts_with("digraph tree {\n"));
    assert!(dot.contains("\"/a\" -> \"/a/b\""));
    assert!(!dot.contains("/x\" ->"));
    assert!(dot.ends_with("}\n"));
}
