//! The four statistics reports, printed in a fixed order after each load.

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use crate::config::Config;
use crate::models::{Filter, TripTable};
use std::io::{self, Write};
use std::time::Instant;

pub use duration::DurationReport;
pub use station::StationReport;
pub use time::TimeReport;
pub use users::UserReport;

/// A computed report that knows how to print itself.
pub trait Report {
    /// Line printed before the report is computed
    const TITLE: &'static str;

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// How reports are framed on the console.
#[derive(Debug, Clone)]
pub struct Layout {
    pub separator: String,
    pub show_timing: bool,
}

impl Layout {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            separator: cfg.separator_line(),
            show_timing: cfg.show_timing,
        }
    }
}

/// Print the title, compute and render the report, then the timing line and separator.
pub fn present<W, R, F>(out: &mut W, layout: &Layout, compute: F) -> io::Result<()>
where
    W: Write,
    R: Report,
    F: FnOnce() -> R,
{
    writeln!(out, "\n{}\n", R::TITLE)?;
    let started = Instant::now();

    let report = compute();
    report.render(out)?;

    if layout.show_timing {
        writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    }
    writeln!(out, "{}", layout.separator)
}

pub fn run_all<W: Write>(
    out: &mut W,
    layout: &Layout,
    table: &TripTable,
    filter: &Filter,
) -> io::Result<()> {
    present(out, layout, || TimeReport::compute(table, filter))?;
    present(out, layout, || StationReport::compute(table))?;
    present(out, layout, || DurationReport::compute(table))?;
    present(out, layout, || UserReport::compute(table))
}
