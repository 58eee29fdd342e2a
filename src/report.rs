use crate::model::Report;
use console::style;
use std::io::{self, Write};

pub fn render<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for day in &report.daily {
        writeln!(out, "{}", style(format!("Date: {}", day.date.format("%Y-%m-%d"))).cyan())?;
        for (author, change) in day.authors.iter() {
            writeln!(
                out,
                "  {}, {}, {}",
                style(format!("Author: {author}")).yellow(),
                style(format!("Lines added: {}", change.added)).green(),
                style(format!("Lines deleted: {}", change.deleted)).red(),
            )?;
        }
    }

    writeln!(
        out,
        "\n{}",
        style("Total Lines Added and Deleted by Author Over the Last Month:").cyan()
    )?;
    for (author, totals) in report.totals.iter() {
        writeln!(
            out,
            "  {}, {}, {}, {}",
            style(format!("Author: {author}")).yellow(),
            style(format!("Total lines added: {}", totals.added)).green(),
            style(format!("Total lines deleted: {}", totals.deleted)).red(),
            style(format!("Differential: {}", totals.differential())).magenta(),
        )?;
    }

    Ok(())
}

pub fn print(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(report, &mut out)?;
    out.flush()
}
