use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirdotError {
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Failed to spawn renderer '{program}': {source}")]
    RendererSpawn {
        program: String,
        source: std::io::Error,
    },
    #[error("I/O error talking to renderer '{program}': {source}")]
    RendererIo {
        program: String,
        source: std::io::Error,
    },
    #[error("Renderer '{program}' exited with {status}: {stderr}")]
    RendererFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}
