use dirdot::{DirdotError, ImageFormat, ScanBuilder, render_dot, scan, to_dot};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/module")).unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    let options = ScanBuilder::new(dir.path()).build();
    let result = scan(options).unwrap();

    // Root, src, src/module, docs. The file is not a node.
    assert_eq!(result.graph.nodes().len(), 4);
    assert_eq!(result.graph.edges().len(), 3);
    assert_eq!(result.graph.roots().count(), 1);

    let dot = to_dot(&result.graph, "tree");
    assert!(dot.contains("-> "));
    for edge in result.graph.edges() {
        assert!(dot.contains(&format!("\"{}\"", edge.child)));
    }
}
#[test]
fn integration_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();
    let first = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    let second = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(first.graph, second.graph);
}
#[test]
fn integration_render_errors_propagate() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    let dot = to_dot(&result.graph, "tree");
    let err = render_dot(
        "dirdot-missing-program",
        &dot,
        ImageFormat::Svg,
        &dir.path().join("out.svg"),
    )
    .unwrap_err();
    assert!(matches!(err, DirdotError::RendererSpawn { .. }));
}
