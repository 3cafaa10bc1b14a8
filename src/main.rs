use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use postcode::{ParseOption, ParseOptions, Postcode};

#[derive(Parser, Debug)]
#[command(version, about = "Check and normalize UK postcodes", long_about = None)]
struct Args {
    /// Postcodes to check; read from standard input when omitted
    #[arg(value_name = "POSTCODE")]
    postcodes: Vec<String>,

    /// Accept a bare outward code
    #[arg(short = 'p', long)]
    incode_optional: bool,

    /// Match British Forces Post Office codes
    #[arg(short = 'b', long)]
    bfpo: bool,

    /// Match overseas territory codes
    #[arg(short = 't', long)]
    overseas: bool,

    /// Match the reserved Girobank code
    #[arg(short = 'g', long)]
    girobank: bool,

    /// Match the novelty Santa Claus code
    #[arg(short = 's', long)]
    santa: bool,
}

impl Args {
    fn options(&self) -> ParseOptions {
        let mut options = ParseOptions::NONE;
        if self.incode_optional {
            options = options.with(ParseOption::IncodeOptional);
        }
        if self.bfpo {
            options = options.with(ParseOption::MatchBfpo);
        }
        if self.overseas {
            options = options.with(ParseOption::MatchOverseasTerritories);
        }
        if self.girobank {
            options = options.with(ParseOption::MatchGirobank);
        }
        if self.santa {
            options = options.with(ParseOption::MatchSanta);
        }
        options
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let options = args.options();

    let candidates = if args.postcodes.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read postcodes from stdin")?
    } else {
        args.postcodes
    };

    let mut failures = 0usize;
    for candidate in &candidates {
        match Postcode::parse(candidate, options) {
            Ok(postcode) => println!("{postcode}"),
            Err(err) => {
                eprintln!("{candidate}: {err}");
                failures += 1;
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
