//! Invocation of the external graph renderer (Graphviz `dot`).
//!
//! The renderer is a black box: it receives the DOT text on stdin, an output
//! format selector, and a target path. Layout and rasterization failures are
//! surfaced unchanged through [`DirdotError`].

use crate::error::DirdotError;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
#[cfg(feature = "logging")]
use tracing;

/// Default renderer program name, resolved through `PATH`.
pub const DEFAULT_RENDERER: &str = "dot";

/// Image formats the renderer is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
    Pdf,
    Jpeg,
}

impl ImageFormat {
    /// The `-T` selector understood by Graphviz.
    pub fn selector(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// The conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        self.selector()
    }
}

/// Runs `program` with the given format selector and output path, feeding it
/// the DOT document on stdin.
pub fn render_dot(
    program: &str,
    dot_source: &str,
    format: ImageFormat,
    output: &Path,
) -> Result<(), DirdotError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Rendering {} bytes of DOT via '{}' to {}",
        dot_source.len(),
        program,
        output.display()
    );
    let mut child = Command::new(program)
        .arg(format!("-T{}", format.selector()))
        .arg("-o")
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| DirdotError::RendererSpawn {
            program: program.to_string(),
            source: e,
        })?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(dot_source.as_bytes())
            .map_err(|e| DirdotError::RendererIo {
                program: program.to_string(),
                source: e,
            })?;
    }
    let result = child
        .wait_with_output()
        .map_err(|e| DirdotError::RendererIo {
            program: program.to_string(),
            source: e,
        })?;
    if !result.status.success() {
        return Err(DirdotError::RendererFailed {
            program: program.to_string(),
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }
    Ok(())
}
