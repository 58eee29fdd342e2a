use chrono::NaiveDate;
use std::ops::AddAssign;

/// Number of days covered by a report, today included.
pub const WINDOW_DAYS: u32 = 30;

/// Glob excluded from the commit scan when none is given on the command line.
pub const DEFAULT_EXCLUDE: &str = "*.go";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCount {
    pub added: u64,
    pub deleted: u64,
}

impl ChangeCount {
    pub fn new(added: u64, deleted: u64) -> Self {
        Self { added, deleted }
    }
}

impl AddAssign for ChangeCount {
    fn add_assign(&mut self, rhs: Self) {
        self.added += rhs.added;
        self.deleted += rhs.deleted;
    }
}

/// Cross-day totals for one author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorTotals {
    pub added: u64,
    pub deleted: u64,
}

impl AuthorTotals {
    pub fn add(&mut self, change: ChangeCount) {
        self.added += change.added;
        self.deleted += change.deleted;
    }

    pub fn differential(&self) -> i64 {
        self.added as i64 - self.deleted as i64
    }
}

/// Author-keyed map that iterates in first-insertion order.
///
/// Names are compared exactly, so `alice` and `Alice` are two authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> AuthorMap<V> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn get(&self, author: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(name, _)| name == author)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Default> AuthorMap<V> {
    /// Returns the slot for `author`, appending a default one on first sight.
    pub fn entry(&mut self, author: &str) -> &mut V {
        let idx = match self.entries.iter().position(|(name, _)| name == author) {
            Some(idx) => idx,
            None => {
                self.entries.push((author.to_string(), V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

impl<V> Default for AuthorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub authors: AuthorMap<ChangeCount>,
}

impl DayEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            authors: AuthorMap::new(),
        }
    }
}

/// Per-day breakdown, newest day first.
pub type DailyReport = Vec<DayEntry>;

pub type TotalsReport = AuthorMap<AuthorTotals>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub daily: DailyReport,
    pub totals: TotalsReport,
}

impl Report {
    pub fn day(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.daily.iter().find(|d| d.date == date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCommit {
    pub id: String,
    pub author: String,
}
