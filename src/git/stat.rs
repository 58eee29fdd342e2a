use super::runner::{run_lenient, GitQuery};
use crate::model::ChangeCount;

/// Lines added and deleted by one commit, per its `git show --stat` summary.
pub fn get_change_counts(git: &dyn GitQuery, commit_id: &str) -> ChangeCount {
    let output = run_lenient(git, &["show", "--stat", "--oneline", commit_id]);
    parse_stat_summary(&output)
}

/// Sum every "N insertion(s)" and "N deletion(s)" clause in `output`.
///
/// Every line is scanned. In practice only the trailing summary line, e.g.
/// `2 files changed, 10 insertions(+), 3 deletions(-)`, carries such clauses.
/// A file line such as `a, 7 insertion_sort.rs | 3` is miscounted as 7 added.
pub fn parse_stat_summary(output: &str) -> ChangeCount {
    let mut counts = ChangeCount::default();
    for clause in output.lines().flat_map(|line| line.split(',')) {
        if clause.contains("insertion") {
            counts.added += leading_number(clause).unwrap_or(0);
        } else if clause.contains("deletion") {
            counts.deleted += leading_number(clause).unwrap_or(0);
        }
    }
    counts
}

fn leading_number(clause: &str) -> Option<u64> {
    clause.split_whitespace().next()?.parse().ok()
}
