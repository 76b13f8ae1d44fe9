mod browser;
mod diagnostics;
mod escape;
mod render;
mod report;

use clap::Parser;
use std::process::ExitCode;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "streetbite-report", version)]
#[command(
    about = "Render STREETBITE_EXECUTIVE_SUMMARY.md into StreetBite_Report.html and open it",
    long_about = None
)]
struct Cli {
    /// Write the report but do not launch a browser.
    #[arg(long)]
    no_open: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let generator = report::ReportGenerator::in_current_dir()?;
    match generator.run(!cli.no_open)? {
        report::Outcome::Generated { .. } => Ok(ExitCode::SUCCESS),
        report::Outcome::MissingInput { .. } => Ok(ExitCode::FAILURE),
    }
}
