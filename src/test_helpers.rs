//! In-memory `git` stand-in for unit tests.

use crate::error::{Result, StatError};
use crate::git::GitQuery;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;

/// Answers `git log` per day and `git show` per commit from canned output.
///
/// Unknown days and commits produce empty output. Commits registered with
/// [`StubGit::with_failing_commit`] fail the way a broken git would.
#[derive(Default)]
pub struct StubGit {
    days: HashMap<NaiveDate, String>,
    commits: HashMap<String, String>,
    failing: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl StubGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, date: NaiveDate, commits: &[(&str, &str)]) -> Self {
        let lines: Vec<String> = commits
            .iter()
            .map(|(id, author)| format!("{id}|{author}"))
            .collect();
        self.days.insert(date, lines.join("\n"));
        self
    }

    pub fn with_commit(mut self, id: &str, show_output: &str) -> Self {
        self.commits.insert(id.to_string(), show_output.to_string());
        self
    }

    /// Register a commit whose summary is the usual `N files changed, ...` line.
    pub fn with_stat(self, id: &str, added: u64, deleted: u64) -> Self {
        let output = format!(
            "{id} subject\n 1 file changed, {added} insertions(+), {deleted} deletions(-)"
        );
        self.with_commit(id, &output)
    }

    pub fn with_failing_commit(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }

    /// Every query received so far, joined with spaces.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GitQuery for StubGit {
    fn query(&self, args: &[&str]) -> Result<String> {
        self.calls.borrow_mut().push(args.join(" "));
        match args.first() {
            Some(&"log") => {
                let date = args
                    .iter()
                    .find_map(|a| a.strip_prefix("--since="))
                    .and_then(|s| s.split_whitespace().next())
                    .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
                Ok(date
                    .and_then(|d| self.days.get(&d).cloned())
                    .unwrap_or_default())
            }
            Some(&"show") => {
                let id = args.last().copied().unwrap_or_default();
                if self.failing.iter().any(|f| f == id) {
                    return Err(StatError::Spawn {
                        command: format!("git {}", args.join(" ")),
                        source: std::io::Error::other("stub failure"),
                    });
                }
                Ok(self.commits.get(id).cloned().unwrap_or_default())
            }
            _ => Ok(String::new()),
        }
    }
}
