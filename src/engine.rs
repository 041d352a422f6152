use crate::error::DirdotError;
use crate::graph::ParentGraph;
use crate::options::ScanOptions;
use crate::types::ScanResult;
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
    #[allow(dead_code)]
    matcher: Option<globset::GlobSet>,
}
impl Walker {
    fn new(options: &ScanOptions) -> Result<Self, DirdotError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    DirdotError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(
                glob_builder
                    .build()
                    .map_err(|e| DirdotError::Walk(format!("Failed to build glob set: {}", e)))?,
            )
        } else {
            None
        };
        if let Some(ref matcher) = matcher {
            let matcher = matcher.clone();
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
            matcher,
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, DirdotError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => match entry.file_type() {
                Some(ft) if ft.is_dir() => Some(Ok(entry.path().to_path_buf())),
                _ => None,
            },
            Err(e) => Some(Err(DirdotError::Walk(e.to_string()))),
        })
    }
    fn collect_directories(self) -> Result<Vec<PathBuf>, DirdotError> {
        self.into_iter().collect()
    }
}
/// Walks the directory tree under `options.root` and builds the parent graph.
///
/// Only directories participate; files are skipped during the walk. The walk
/// yields a directory after its parent, which is the ordering contract the
/// graph builder relies on.
pub fn scan(options: ScanOptions) -> Result<ScanResult, DirdotError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let walker = Walker::new(&options)?;
    let directories = walker.collect_directories()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Walk found {} directories", directories.len());
    let graph = ParentGraph::from_paths(directories.iter().map(|p| path_to_slash(p)));
    Ok(ScanResult { graph })
}
/// Stringifies a walked path with `/` between components, regardless of the
/// platform's native separator. The graph builder only understands `/`.
fn path_to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => {
                if !out.ends_with('/') {
                    out.push('/');
                }
            }
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy());
            }
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
