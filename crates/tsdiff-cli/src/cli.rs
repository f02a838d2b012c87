use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tsdiff",
    about = "Compare timesheet snapshots and report added, removed, and updated rows",
    version,
)]
pub struct Cli {
    /// Current snapshot file (defaults to timesheet_updated.csv)
    #[arg(long, value_name = "FILE")]
    pub current: Option<PathBuf>,

    /// Previous snapshot file (defaults to timesheet_previous.csv)
    #[arg(long, value_name = "FILE")]
    pub previous: Option<PathBuf>,

    /// Report file to write (defaults to changes.csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Field delimiter shared by all three files
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Configuration file to read before applying flags
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}
