use crate::git::{get_change_counts, list_commits, GitQuery};
use crate::model::{DayEntry, Report, DEFAULT_EXCLUDE, WINDOW_DAYS};
use crate::util::window_dates;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub days: u32,
    /// Pathspec globs whose changes are left out of the scan.
    pub excludes: Vec<String>,
    pub progress: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            days: WINDOW_DAYS,
            excludes: vec![DEFAULT_EXCLUDE.to_string()],
            progress: false,
        }
    }
}

/// Walk the window ending at `today` and total each author's changes per day
/// and overall.
pub fn collect(git: &dyn GitQuery, today: NaiveDate, options: &CollectOptions) -> Report {
    let mut report = Report::default();

    let pb = if options.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for date in window_dates(today, options.days) {
        pb.set_message(format!("Collecting commits for {date}..."));
        let mut day = DayEntry::new(date);

        for commit in list_commits(git, date, &options.excludes) {
            let change = get_change_counts(git, &commit.id);
            debug!(%date, commit = %commit.id, author = %commit.author, added = change.added, deleted = change.deleted, "counted commit");

            *day.authors.entry(&commit.author) += change;
            report.totals.entry(&commit.author).add(change);
        }

        pb.inc(1);
        report.daily.push(day);
    }

    pb.finish_and_clear();
    info!(
        days = report.daily.len(),
        authors = report.totals.len(),
        "collected line changes"
    );
    report
}
