use std::io;

use structopt::StructOpt;

use sortplot::cliopt::CliOpt;
use sortplot::output::LineWriter;
use sortplot::runner::{Config, Runner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    CliOpt::from_args();

    let mut runner = Runner::new(Config::default(), LineWriter::new(io::stdout()));
    runner.run()?;

    Ok(())
}
