use crate::aggregate::{collect, CollectOptions};
use crate::git::GitCli;
use crate::model::{DEFAULT_EXCLUDE, WINDOW_DAYS};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linedelta")]
#[command(about = "Lines added and deleted per author, per day, over the last month of a git repository")]
#[command(version)]
pub struct Cli {
    #[arg(help = "The absolute path to the Git repository")]
    pub repo_path: PathBuf,

    #[arg(
        long = "exclude",
        value_name = "GLOB",
        default_value = DEFAULT_EXCLUDE,
        help = "Leave out changes confined to files matching this glob (repeatable)"
    )]
    pub excludes: Vec<String>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Log more to stderr (-v info, -vv debug)")]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        init_logging(self.verbose);

        if self.no_color
            || std::env::var_os("NO_COLOR").is_some()
            || std::env::var_os("TERM").is_some_and(|v| v == "dumb")
            || !std::io::stdout().is_terminal()
        {
            console::set_colors_enabled(false);
        }

        let git = GitCli::open(&self.repo_path).context("Failed to open git repository")?;

        let options = CollectOptions {
            days: WINDOW_DAYS,
            excludes: self.excludes,
            progress: std::io::stderr().is_terminal(),
        };
        let today = chrono::Local::now().date_naive();
        let report = collect(&git, today, &options);

        crate::report::print(&report).context("Failed to write report")?;
        Ok(())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Fails only if a subscriber is already installed, which is fine.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn excludes_default_to_go_sources() {
        let cli = Cli::try_parse_from(["linedelta", "/tmp/repo"]).unwrap();
        assert_eq!(cli.excludes, vec!["*.go".to_string()]);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn excludes_replace_the_default() {
        let cli = Cli::try_parse_from([
            "linedelta",
            "--exclude",
            "yarn.lock",
            "--exclude",
            ".idea/",
            "-vv",
            "/tmp/repo",
        ])
        .unwrap();
        assert_eq!(cli.excludes, vec!["yarn.lock".to_string(), ".idea/".to_string()]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn repo_path_is_required() {
        assert!(Cli::try_parse_from(["linedelta"]).is_err());
    }
}
