use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatError>;

#[derive(Error, Debug)]
pub enum StatError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    GitFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
        /// Whatever git printed before failing.
        stdout: String,
    },
    #[error("Repository path does not exist: {}", .0.display())]
    RepoNotFound(PathBuf),
}
