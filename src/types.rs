use crate::graph::ParentGraph;
use serde::{Deserialize, Serialize};

/// The complete result of a scan operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResult {
    /// The parent/child forest inferred from the walked directories.
    pub graph: ParentGraph,
}
