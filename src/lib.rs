//! # Dirdot
//!
//! `dirdot` is a library for recursively walking a directory tree, inferring the
//! parent/child structure between the discovered directories, and rendering the
//! result as a graph image via Graphviz.
//!
//! The graph construction itself is pure: [`ParentGraph::from_paths`] consumes an
//! ordered list of path strings (walk discovery order) and assigns each path its
//! nearest previously seen ancestor as parent. Directory enumeration, DOT layout,
//! and rasterization are external collaborators the library wraps but does not
//! reimplement.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirdot::{ScanBuilder, scan, to_dot};
//!
//! let options = ScanBuilder::new(".")
//!     .respect_gitignore(true)
//!     .include_hidden(false)
//!     .build();
//!
//! let result = scan(options).expect("Failed to scan directory");
//!
//! println!("{}", to_dot(&result.graph, "tree"));
//! for root in result.graph.roots() {
//!     println!("root: {}", root);
//! }
//! ```

mod dot;
mod engine;
mod error;
mod graph;
mod options;
mod render;
mod types;

pub use dot::to_dot;
pub use engine::scan;
pub use error::DirdotError;
pub use graph::{Edge, ParentGraph};
pub use options::{ScanBuilder, ScanOptions};
pub use render::{DEFAULT_RENDERER, ImageFormat, render_dot};
pub use types::ScanResult;
