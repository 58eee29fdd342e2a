use super::runner::{run_lenient, GitQuery};
use crate::model::DayCommit;
use crate::util::day_bounds;
use chrono::NaiveDate;
use tracing::debug;

const FIELD_SEPARATOR: char = '|';

/// Build the `git log` arguments listing one day's commits as `id|author`.
pub fn log_args(date: NaiveDate, excludes: &[String]) -> Vec<String> {
    let (since, until) = day_bounds(date);
    let mut args = vec![
        "log".to_string(),
        format!("--since={since}"),
        format!("--until={until}"),
        format!("--format=%H{FIELD_SEPARATOR}%an"),
        "--".to_string(),
        ".".to_string(),
    ];
    args.extend(excludes.iter().map(|glob| format!(":!{glob}")));
    args
}

/// List the commits made on `date`, skipping those that only touch excluded paths.
pub fn list_commits(git: &dyn GitQuery, date: NaiveDate, excludes: &[String]) -> Vec<DayCommit> {
    let args = log_args(date, excludes);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    parse_log(&run_lenient(git, &args))
}

pub fn parse_log(output: &str) -> Vec<DayCommit> {
    output.lines().filter_map(parse_log_line).collect()
}

fn parse_log_line(line: &str) -> Option<DayCommit> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    // Hashes never contain the separator, so anything after the first one
    // belongs to the author name.
    match line.split_once(FIELD_SEPARATOR) {
        Some((id, author)) => Some(DayCommit {
            id: id.to_string(),
            author: author.to_string(),
        }),
        None => {
            debug!(line, "skipping malformed log line");
            None
        }
    }
}
