use structopt::StructOpt;

/// Reads `data/results-<N>-*.txt` and writes `phases_comparison.png` and
/// `disk_accesses_comparison.png` into the current directory.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "sortplot",
    about = "Plot actual vs. theoretical phases and disk accesses of external sort runs"
)]
pub struct CliOpt {}
