use crate::config::load_config;
use crate::demo;
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io::Write;
use tracing::{instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "bytepoly")]
#[command(version, about = "Evaluate the byte-histogram polynomial of a sample byte sequence", long_about = None)]
pub struct Cli {
    /// Indicate error levels by adding additional `-v` arguments. Eg. `bytepoly -vvv` will give you
    /// trace level output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        self.execute_to(&mut std::io::stdout().lock())
    }

    /// Runs the demonstration and writes the evaluated value as a single line.
    #[instrument(skip_all)]
    pub fn execute_to<W: Write>(self, out: &mut W) -> Result<()> {
        let config = load_config()?;
        let value = demo::run(&config);
        writeln!(out, "{value}")?;
        Ok(())
    }
}
