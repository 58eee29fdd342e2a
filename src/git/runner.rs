use crate::error::{Result, StatError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// A source of `git` output for one repository.
pub trait GitQuery {
    /// Run `git <args>` and return its trimmed stdout.
    fn query(&self, args: &[&str]) -> Result<String>;
}

/// Runs the `git` binary with the repository as working directory.
pub struct GitCli {
    path: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Like [`GitCli::new`], but fails if `path` does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StatError::RepoNotFound(path.to_path_buf()));
        }
        Ok(Self::new(path))
    }

}

impl GitQuery for GitCli {
    fn query(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, repo = %self.path.display(), "running git");

        let output = Command::new("git")
            .current_dir(&self.path)
            .args(args)
            .output()
            .map_err(|source| StatError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() {
            return Err(StatError::GitFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                stdout,
            });
        }

        Ok(stdout)
    }
}

/// Runs a query without failing.
///
/// When git exits non-zero, whatever it printed to stdout is still returned.
/// When it cannot be started at all, the result is empty. Either way the
/// failure is logged as a warning.
pub fn run_lenient(git: &dyn GitQuery, args: &[&str]) -> String {
    match git.query(args) {
        Ok(out) => out,
        Err(StatError::GitFailed {
            command,
            status,
            stderr,
            stdout,
        }) => {
            warn!(%command, %status, %stderr, "git query failed, keeping its partial output");
            stdout
        }
        Err(e) => {
            warn!(%e, "git query failed, counting it as empty");
            String::new()
        }
    }
}
