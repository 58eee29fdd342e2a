pub mod log;
pub mod runner;
pub mod stat;

pub use log::list_commits;
pub use runner::{run_lenient, GitCli, GitQuery};
pub use stat::get_change_counts;
