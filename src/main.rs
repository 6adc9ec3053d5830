use std::fs;

use admatch::{
    interpreter::{
        evaluator::{core::EvalContext, function::core::FunctionTable},
        matcher,
        record::Record,
    },
    parse,
};
use clap::Parser;

/// admatch parses attribute records and decides whether two records'
/// Requirements accept each other.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A file containing one record.
    record: String,

    /// A second record file. When given, the two records are matched
    /// against each other.
    candidate: Option<String>,

    /// Evaluate one attribute of the first record instead of printing the
    /// whole record. With a candidate present, the attribute sees it as
    /// `other`.
    #[arg(short, long)]
    attr: Option<String>,
}

fn main() {
    let args = Args::parse();

    let record = load_record(&args.record);

    match args.candidate {
        Some(path) => {
            let candidate = load_record(&path);

            if let Some(name) = args.attr {
                let functions = FunctionTable::new();
                let context = EvalContext::new(&record, Some(&candidate), &functions);
                match record.lookup(&name) {
                    Some(expr) => println!("{}", context.eval(expr)),
                    None => println!("undefined"),
                }
            } else if matcher::is_match(&record, &candidate) {
                println!("Matched");
            } else {
                println!("Unmatched");
            }
        },
        None => match args.attr {
            Some(name) => println!("{}", record.evaluate_attribute(&name)),
            None => println!("{record}"),
        },
    }
}

/// Reads and parses one record file, exiting with a message on failure.
fn load_record(path: &str) -> Record {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    parse(&source).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}
