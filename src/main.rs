use std::{collections::HashMap, fs};

use clap::Parser;
use sieva::evaluate;

/// sieva is an embeddable expression language for safely evaluating
/// conditions over host-supplied data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sieva to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(&source, &HashMap::new()) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
